// Token parsing - 설정 문자열을 토큰 목록으로 분리

use super::defaults::DEFAULT_MENUBAR;
use crate::models::{ItemTokens, MenubarSetting};

/// 구분선 토큰
pub const SEPARATOR_TOKENS: [&str; 2] = ["|", "separator"];

/// 항목 문자열을 단일 공백 기준으로 분리 (목록은 그대로 통과)
///
/// 연속 공백은 빈 토큰을 만들며, 빈 토큰은 항목 해석 단계에서 걸러진다.
pub fn parse_items(items: &ItemTokens) -> Vec<String> {
    match items {
        ItemTokens::Text(text) => split_spaces(text),
        ItemTokens::List(list) => list.clone(),
    }
}

/// 활성 메뉴바 순서 결정
pub fn parse_menubar(menubar: Option<&MenubarSetting>) -> Vec<String> {
    match menubar {
        None | Some(MenubarSetting::Toggle(true)) => split_spaces(DEFAULT_MENUBAR),
        Some(MenubarSetting::Toggle(false)) => split_spaces(""),
        Some(MenubarSetting::Keys(keys)) => keys.clone(),
        Some(MenubarSetting::Text(text)) => split_spaces(text),
    }
}

/// 제거 항목 설정을 공백 또는 쉼표 기준으로 분리
pub fn parse_removed_items(removed: &str) -> Vec<String> {
    removed.split([' ', ',']).map(str::to_string).collect()
}

/// 구분선 토큰인지 확인
pub fn is_separator_token(token: &str) -> bool {
    SEPARATOR_TOKENS.contains(&token)
}

fn split_spaces(text: &str) -> Vec<String> {
    text.split(' ').map(str::to_string).collect()
}
