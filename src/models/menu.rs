// Menu definitions - 메뉴 정의와 메뉴바 설정
//
// 기본 메뉴와 사용자 메뉴가 공유하는 선언형 데이터

use super::menu_item::MenuItemSpec;
use serde::Deserialize;

/// 메뉴 항목 토큰 목록
///
/// 설정에서는 공백 구분 문자열 또는 이미 나뉜 목록 둘 다 허용한다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemTokens {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for ItemTokens {
    fn from(items: &str) -> Self {
        Self::Text(items.to_string())
    }
}

impl From<String> for ItemTokens {
    fn from(items: String) -> Self {
        Self::Text(items)
    }
}

impl From<Vec<String>> for ItemTokens {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// 메뉴 정의
///
/// 사용자 정의는 `title`이나 `items`를 생략할 수 있다. 같은 키의 기본 메뉴는
/// 항목 단위 병합 없이 통째로 대체된다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuDefinition {
    /// 메뉴 제목
    #[serde(default)]
    pub title: Option<String>,
    /// 메뉴 항목 토큰
    #[serde(default)]
    pub items: Option<ItemTokens>,
}

impl MenuDefinition {
    pub fn new(title: impl Into<String>, items: impl Into<ItemTokens>) -> Self {
        Self {
            title: Some(title.into()),
            items: Some(items.into()),
        }
    }

    /// 항목 없이 제목만 있는 정의
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            items: None,
        }
    }

    pub fn has_items(&self) -> bool {
        self.items.is_some()
    }
}

/// 메뉴바 설정
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MenubarSetting {
    /// `true`는 기본 순서, `false`는 빈 메뉴바
    Toggle(bool),
    /// 메뉴 키 목록
    Keys(Vec<String>),
    /// 공백 구분 메뉴 키 문자열
    Text(String),
}

impl From<bool> for MenubarSetting {
    fn from(enabled: bool) -> Self {
        Self::Toggle(enabled)
    }
}

impl From<&str> for MenubarSetting {
    fn from(keys: &str) -> Self {
        Self::Text(keys.to_string())
    }
}

impl From<Vec<String>> for MenubarSetting {
    fn from(keys: Vec<String>) -> Self {
        Self::Keys(keys)
    }
}

/// 해석된 메뉴 항목 (레지스트리 항목 또는 구분선)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry<'a> {
    Item(&'a MenuItemSpec),
    Separator,
}

impl<'a> MenuEntry<'a> {
    /// 구분선인지 확인
    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }

    pub fn item(&self) -> Option<&'a MenuItemSpec> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        }
    }
}
