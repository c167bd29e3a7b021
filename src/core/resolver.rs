//! 메뉴바 해석기
//!
//! 레지스트리와 에디터 설정으로부터 렌더러에 넘길 메뉴 목록을 만든다.
//! 잘못되었거나 알 수 없는 입력은 오류 없이 "생략"으로 처리된다.

use super::defaults::{default_menu, is_default_menu};
use super::settings::EditorSettings;
use super::tokens::{is_separator_token, parse_items, parse_menubar, parse_removed_items};
use crate::models::{MenuDefinition, MenuEntry, MenuRegistry};
use log::{debug, trace};
use std::rc::Rc;

/// 해석된 메뉴
///
/// 항목 목록은 캐시하지 않고 `get_items` 호출마다 레지스트리에서 다시 만든다.
#[derive(Debug, Clone)]
pub struct ResolvedMenu<'a> {
    key: String,
    text: String,
    tokens: Vec<String>,
    removed: Rc<[String]>,
    registry: &'a MenuRegistry,
}

impl<'a> ResolvedMenu<'a> {
    /// 메뉴 키 (`file`, `edit`, ...)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 메뉴 제목
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 메뉴 항목 목록 생성
    pub fn get_items(&self) -> Vec<MenuEntry<'a>> {
        self.tokens
            .iter()
            .filter_map(|token| self.resolve_token(token))
            .collect()
    }

    fn resolve_token(&self, token: &str) -> Option<MenuEntry<'a>> {
        if token.trim().is_empty() {
            return None;
        }
        if self.removed.iter().any(|removed| removed == token) {
            return None;
        }
        if is_separator_token(token) {
            return Some(MenuEntry::Separator);
        }

        let registry = self.registry;
        match registry.item(token) {
            Some(item) => Some(MenuEntry::Item(item)),
            None => {
                trace!("menu '{}': unknown item '{}' omitted", self.key, token);
                None
            }
        }
    }
}

/// 메뉴 정의 하나를 해석된 메뉴로 변환
pub fn make_menu<'a>(
    key: &str,
    menu: &MenuDefinition,
    registry: &'a MenuRegistry,
    removed: Rc<[String]>,
) -> ResolvedMenu<'a> {
    ResolvedMenu {
        key: key.to_string(),
        text: menu.title.clone().unwrap_or_default(),
        tokens: menu.items.as_ref().map(parse_items).unwrap_or_default(),
        removed,
        registry,
    }
}

/// 기본 메뉴와 사용자 메뉴 병합 (같은 키는 사용자 정의가 통째로 대체)
fn merged_menu<'a>(registry: &'a MenuRegistry, key: &str) -> Option<&'a MenuDefinition> {
    registry.menus.get(key).or_else(|| default_menu(key))
}

/// 메뉴바에 올릴 수 있는 키인지 확인
fn is_valid_menu(registry: &MenuRegistry, key: &str) -> bool {
    if registry.has_custom_menus() {
        registry
            .menus
            .get(key)
            .is_some_and(MenuDefinition::has_items)
            || is_default_menu(key)
    } else {
        is_default_menu(key)
    }
}

/// 항목이 없거나 구분선뿐인 메뉴는 표시하지 않음
fn has_content(entries: &[MenuEntry<'_>]) -> bool {
    !entries.is_empty() && entries.iter().any(|entry| !entry.is_separator())
}

/// 메뉴바 메뉴 목록 해석 (메뉴바 순서 유지)
pub fn identify_menus<'a, S>(editor: &S, registry: &'a MenuRegistry) -> Vec<ResolvedMenu<'a>>
where
    S: EditorSettings + ?Sized,
{
    let removed: Rc<[String]> = parse_removed_items(editor.removed_menu_items()).into();

    parse_menubar(registry.menubar.as_ref())
        .into_iter()
        .filter(|key| {
            let valid = is_valid_menu(registry, key);
            if !valid {
                debug!("menubar key '{}' is not a known menu, skipping", key);
            }
            valid
        })
        .filter_map(|key| {
            let menu = merged_menu(registry, &key)?;
            Some(make_menu(&key, menu, registry, Rc::clone(&removed)))
        })
        .filter(|menu| {
            let keep = has_content(&menu.get_items());
            if !keep {
                debug!("menu '{}' has no items after filtering, skipping", menu.key);
            }
            keep
        })
        .collect()
}

#[cfg(test)]
mod tests;
