// Menu registry - 사용 가능한 항목과 메뉴 정의 묶음

use super::menu::{MenuDefinition, MenubarSetting};
use super::menu_item::MenuItemSpec;
use std::collections::HashMap;

/// 메뉴 레지스트리
///
/// `menubar`가 `None`이면 기본 메뉴바 순서를 사용한다.
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    /// 이름 -> 항목 스펙
    pub menu_items: HashMap<String, MenuItemSpec>,
    /// 메뉴바 설정
    pub menubar: Option<MenubarSetting>,
    /// 메뉴 키 -> 사용자 메뉴 정의
    pub menus: HashMap<String, MenuDefinition>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목 등록 (스펙의 id는 등록 이름으로 덮어씀)
    pub fn with_item(mut self, name: impl Into<String>, item: MenuItemSpec) -> Self {
        self.register_item(name, item);
        self
    }

    pub fn with_menubar(mut self, menubar: impl Into<MenubarSetting>) -> Self {
        self.menubar = Some(menubar.into());
        self
    }

    pub fn with_menu(mut self, key: impl Into<String>, menu: MenuDefinition) -> Self {
        self.menus.insert(key.into(), menu);
        self
    }

    pub fn register_item(&mut self, name: impl Into<String>, mut item: MenuItemSpec) {
        let name = name.into();
        item.id = name.clone();
        self.menu_items.insert(name, item);
    }

    /// 이름으로 항목 조회
    pub fn item(&self, name: &str) -> Option<&MenuItemSpec> {
        self.menu_items.get(name)
    }

    /// 사용자 메뉴가 하나라도 정의되어 있는지
    pub fn has_custom_menus(&self) -> bool {
        !self.menus.is_empty()
    }
}
