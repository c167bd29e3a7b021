// Menu item spec - 레지스트리에 등록되는 메뉴 항목
//
// 호스트(또는 플러그인)가 이름으로 등록해 두는, 이미 완성된 클릭 가능 항목

use serde::Deserialize;

fn default_enabled() -> bool {
    true
}

/// 메뉴 항목 스펙
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItemSpec {
    /// 항목 ID (설정 파일에서는 테이블 키로 채워짐)
    #[serde(default)]
    pub id: String,
    /// 표시 텍스트
    pub text: String,
    /// 아이콘 이름
    #[serde(default)]
    pub icon: Option<String>,
    /// 단축키 표시
    #[serde(default)]
    pub shortcut: Option<String>,
    /// 활성화 여부
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// 서브메뉴 항목들
    #[serde(default)]
    pub submenu: Vec<MenuItemSpec>,
}

impl MenuItemSpec {
    /// 액션 항목 생성
    pub fn action(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            icon: None,
            shortcut: None,
            enabled: true,
            submenu: Vec::new(),
        }
    }

    /// 서브메뉴 항목 생성
    pub fn submenu(
        id: impl Into<String>,
        text: impl Into<String>,
        items: Vec<MenuItemSpec>,
    ) -> Self {
        Self {
            submenu: items,
            ..Self::action(id, text)
        }
    }

    /// 단축키 설정
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// 아이콘 설정
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// 활성화 여부 설정
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// 서브메뉴가 있는지 확인
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItemSpec::action("bold", "Bold").shortcut("Ctrl+B");
        assert_eq!(item.id, "bold");
        assert_eq!(item.text, "Bold");
        assert_eq!(item.shortcut, Some("Ctrl+B".to_string()));
        assert!(item.enabled);
        assert!(!item.has_submenu());
    }

    #[test]
    fn test_submenu_item() {
        let item = MenuItemSpec::submenu(
            "align",
            "Align",
            vec![
                MenuItemSpec::action("alignleft", "Left"),
                MenuItemSpec::action("alignright", "Right"),
            ],
        );
        assert!(item.has_submenu());
        assert_eq!(item.submenu.len(), 2);
    }

    #[test]
    fn test_deserialize_defaults() {
        let item: MenuItemSpec = toml::from_str(r#"text = "Custom""#).unwrap();
        assert_eq!(item.text, "Custom");
        assert!(item.id.is_empty());
        assert!(item.enabled);
        assert!(item.submenu.is_empty());
    }
}
