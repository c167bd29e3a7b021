//! 기본 메뉴바 구성
//!
//! 사용자 설정이 없을 때 쓰이는 메뉴바 순서와 메뉴 정의.

use crate::models::MenuDefinition;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 기본 메뉴바 순서
pub const DEFAULT_MENUBAR: &str = "file edit view insert format tools table help";

/// 기본 메뉴 정의 (키, 제목, 항목)
static DEFAULT_MENU_DEFS: &[(&str, &str, &str)] = &[
    (
        "file",
        "File",
        "newdocument restoredraft | preview | print | deleteallconversations",
    ),
    (
        "edit",
        "Edit",
        "undo redo | cut copy paste pastetext | selectall | searchreplace",
    ),
    (
        "view",
        "View",
        "code | visualaid visualchars visualblocks | spellchecker | preview fullscreen | showcomments",
    ),
    (
        "insert",
        "Insert",
        "image link media addcomment pageembed template codesample inserttable | charmap emoticons hr | pagebreak nonbreaking anchor toc | insertdatetime",
    ),
    (
        "format",
        "Format",
        "bold italic underline strikethrough superscript subscript codeformat | formats blockformats fontformats fontsizes align | removeformat",
    ),
    (
        "tools",
        "Tools",
        "spellchecker spellcheckerlanguage | a11ycheck code wordcount",
    ),
    (
        "table",
        "Table",
        "inserttable tableprops deletetable row column cell",
    ),
    ("help", "Help", "help"),
];

static DEFAULT_MENUS: LazyLock<HashMap<&'static str, MenuDefinition>> = LazyLock::new(|| {
    DEFAULT_MENU_DEFS
        .iter()
        .map(|(key, title, items)| (*key, MenuDefinition::new(*title, *items)))
        .collect()
});

/// 기본 메뉴 정의 조회
pub fn default_menu(key: &str) -> Option<&'static MenuDefinition> {
    DEFAULT_MENUS.get(key)
}

/// 기본 메뉴 키인지 확인
pub fn is_default_menu(key: &str) -> bool {
    DEFAULT_MENUS.contains_key(key)
}
