//! 기본 항목 카탈로그
//!
//! 에디터 표준 명령의 메타데이터. 호스트가 따로 등록하지 않아도 기본 메뉴가
//! 채워지도록 레지스트리의 초기 항목으로 쓰인다.

use crate::models::MenuItemSpec;
use std::collections::HashMap;

/// 카탈로그 항목 정의
pub struct ItemDef {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub shortcut_display: Option<&'static str>,
}

const fn item(id: &'static str, label: &'static str) -> ItemDef {
    ItemDef {
        id,
        label,
        icon: None,
        shortcut_display: None,
    }
}

const fn item_with(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    shortcut: &'static str,
) -> ItemDef {
    ItemDef {
        id,
        label,
        icon: Some(icon),
        shortcut_display: Some(shortcut),
    }
}

/// 모든 기본 항목 메타데이터
pub static ITEM_DEFS: &[ItemDef] = &[
    // File
    item("newdocument", "New document"),
    item("restoredraft", "Restore last draft"),
    item_with("preview", "Preview", "preview", "Ctrl+Shift+P"),
    item_with("print", "Print...", "print", "Ctrl+P"),
    // Edit
    item_with("undo", "Undo", "undo", "Ctrl+Z"),
    item_with("redo", "Redo", "redo", "Ctrl+Y"),
    item_with("cut", "Cut", "cut", "Ctrl+X"),
    item_with("copy", "Copy", "copy", "Ctrl+C"),
    item_with("paste", "Paste", "paste", "Ctrl+V"),
    item("pastetext", "Paste as text"),
    item_with("selectall", "Select all", "select-all", "Ctrl+A"),
    item_with("searchreplace", "Find and replace", "search", "Ctrl+F"),
    // View
    item("code", "Source code"),
    item("visualaid", "Visual aids"),
    item("visualchars", "Show invisible characters"),
    item("visualblocks", "Show blocks"),
    item_with("fullscreen", "Fullscreen", "fullscreen", "Ctrl+Shift+F"),
    // Insert
    item("image", "Image..."),
    item_with("link", "Link...", "link", "Ctrl+K"),
    item("media", "Media..."),
    item("template", "Insert template..."),
    item("codesample", "Code sample..."),
    item("inserttable", "Table"),
    item("charmap", "Special character..."),
    item("emoticons", "Emoticons..."),
    item("hr", "Horizontal line"),
    item("pagebreak", "Page break"),
    item("nonbreaking", "Nonbreaking space"),
    item("anchor", "Anchor..."),
    item("toc", "Table of contents"),
    item("insertdatetime", "Date/time"),
    // Format
    item_with("bold", "Bold", "bold", "Ctrl+B"),
    item_with("italic", "Italic", "italic", "Ctrl+I"),
    item_with("underline", "Underline", "underline", "Ctrl+U"),
    item("strikethrough", "Strikethrough"),
    item("superscript", "Superscript"),
    item("subscript", "Subscript"),
    item("codeformat", "Code"),
    item("formats", "Formats"),
    item("blockformats", "Blocks"),
    item("fontformats", "Fonts"),
    item("fontsizes", "Font sizes"),
    item("removeformat", "Clear formatting"),
    // Tools
    item("spellchecker", "Spellcheck"),
    item("wordcount", "Word count"),
    // Table
    item("tableprops", "Table properties"),
    item("deletetable", "Delete table"),
    // Help
    item_with("help", "Help", "help", "Alt+0"),
];

/// 정렬 서브메뉴 항목 (align)
fn align_submenu() -> MenuItemSpec {
    MenuItemSpec::submenu(
        "align",
        "Align",
        vec![
            MenuItemSpec::action("alignleft", "Left").shortcut("Ctrl+Shift+L"),
            MenuItemSpec::action("aligncenter", "Center").shortcut("Ctrl+Shift+E"),
            MenuItemSpec::action("alignright", "Right").shortcut("Ctrl+Shift+R"),
            MenuItemSpec::action("alignjustify", "Justify").shortcut("Ctrl+Shift+J"),
        ],
    )
    .icon("align-left")
}

impl ItemDef {
    /// 레지스트리 항목 스펙으로 변환
    pub fn to_spec(&self) -> MenuItemSpec {
        let mut spec = MenuItemSpec::action(self.id, self.label);
        if let Some(icon) = self.icon {
            spec = spec.icon(icon);
        }
        if let Some(shortcut) = self.shortcut_display {
            spec = spec.shortcut(shortcut);
        }
        spec
    }
}

/// 카탈로그 전체를 레지스트리 항목으로 변환
pub fn catalog_items() -> HashMap<String, MenuItemSpec> {
    let mut items: HashMap<String, MenuItemSpec> = ITEM_DEFS
        .iter()
        .map(|def| (def.id.to_string(), def.to_spec()))
        .collect();
    let align = align_submenu();
    items.insert(align.id.clone(), align);
    items
}

/// 메뉴 단축키 표시용 조회
pub fn shortcut_display(id: &str) -> Option<&'static str> {
    ITEM_DEFS
        .iter()
        .find(|d| d.id == id)
        .and_then(|d| d.shortcut_display)
}
