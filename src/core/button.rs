// Menu button adapter - 툴바 메뉴 버튼을 드롭다운 설정으로 변환
//
// 드롭다운 렌더러 자체는 외부 구성 요소이며, 여기서는 고정 설정과
// 항목 조회 콜백 연결만 담당한다.

use crate::models::MenuItemSpec;
use std::fmt;
use std::rc::Rc;

/// 버튼의 항목 조회 결과를 받는 콜백
pub type ItemsCallback = Box<dyn FnOnce(Vec<MenuItemSpec>)>;
/// 드롭다운의 중첩 메뉴를 받는 콜백
pub type NestedMenuCallback = Box<dyn FnOnce(NestedMenu)>;

/// 툴바 메뉴 버튼 스펙
pub struct ToolbarMenuButton {
    pub text: Option<String>,
    pub icon: Option<String>,
    pub tooltip: Option<String>,
    /// 메뉴가 열릴 때마다 한 번 호출되며, 콜백을 정확히 한 번 호출해야 한다
    pub fetch: Rc<dyn Fn(ItemsCallback)>,
}

impl ToolbarMenuButton {
    pub fn new(fetch: impl Fn(ItemsCallback) + 'static) -> Self {
        Self {
            text: None,
            icon: None,
            tooltip: None,
            fetch: Rc::new(fetch),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// 항목 실행 후 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemResponse {
    /// 실행하면 메뉴 닫기
    CloseOnExecute,
}

/// 드롭다운 메뉴 프리셋
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPreset {
    Normal,
}

/// 렌더러에 넘기는 중첩 메뉴
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedMenu {
    pub items: Vec<MenuItemSpec>,
    pub response: ItemResponse,
}

/// 항목 목록으로 중첩 메뉴 구성
pub fn build_nested_menu(items: Vec<MenuItemSpec>, response: ItemResponse) -> NestedMenu {
    NestedMenu { items, response }
}

/// 드롭다운 렌더러 설정
pub struct DropdownSpec {
    pub text: Option<String>,
    pub icon: Option<String>,
    pub tooltip: Option<String>,
    pub role: Option<String>,
    /// 렌더러가 생성하는 요소 ID 접두사
    pub prefix: String,
    pub columns: usize,
    pub presets: MenuPreset,
    pub classes: Vec<String>,
    fetch: Rc<dyn Fn(NestedMenuCallback)>,
}

impl DropdownSpec {
    /// 메뉴를 열 때 항목 조회
    pub fn fetch(&self, callback: NestedMenuCallback) {
        (self.fetch)(callback)
    }
}

impl fmt::Debug for DropdownSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownSpec")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("tooltip", &self.tooltip)
            .field("role", &self.role)
            .field("prefix", &self.prefix)
            .field("columns", &self.columns)
            .field("presets", &self.presets)
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}

/// 메뉴 버튼을 드롭다운 설정으로 변환
pub fn render_menu_button(
    spec: ToolbarMenuButton,
    prefix: &str,
    role: Option<String>,
) -> DropdownSpec {
    let button_fetch = spec.fetch;
    DropdownSpec {
        text: spec.text,
        icon: spec.icon,
        tooltip: spec.tooltip,
        role,
        prefix: prefix.to_string(),
        columns: 1,
        presets: MenuPreset::Normal,
        classes: Vec::new(),
        fetch: Rc::new(move |callback: NestedMenuCallback| {
            button_fetch(Box::new(move |items| {
                callback(build_nested_menu(items, ItemResponse::CloseOnExecute));
            }));
        }),
    }
}
