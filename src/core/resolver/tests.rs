use super::*;
use crate::core::catalog::catalog_items;
use crate::models::{ItemTokens, MenuItemSpec, MenubarSetting};

fn item_ids(menu: &ResolvedMenu<'_>) -> Vec<String> {
    menu.get_items()
        .iter()
        .map(|entry| match entry {
            MenuEntry::Item(item) => item.id.clone(),
            MenuEntry::Separator => "|".to_string(),
        })
        .collect()
}

fn titles(menus: &[ResolvedMenu<'_>]) -> Vec<String> {
    menus.iter().map(|menu| menu.text().to_string()).collect()
}

fn custom_file_registry() -> MenuRegistry {
    MenuRegistry::new()
        .with_item("newdocument", MenuItemSpec::action("", "New document"))
        .with_item("custom1", MenuItemSpec::action("", "Custom 1"))
        .with_menubar("file")
        .with_menu("file", MenuDefinition::new("File", "newdocument | custom1"))
}

fn catalog_registry() -> MenuRegistry {
    MenuRegistry {
        menu_items: catalog_items(),
        ..MenuRegistry::default()
    }
}

/// 사용자 메뉴 + 등록 항목: 구분선 포함 순서 유지
#[test]
fn test_custom_file_menu() {
    let registry = custom_file_registry();
    let menus = identify_menus("", &registry);

    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].text(), "File");
    assert_eq!(item_ids(&menus[0]), vec!["newdocument", "|", "custom1"]);
}

/// 제거 항목을 빼도 구분선 아닌 항목이 남으면 메뉴 유지
#[test]
fn test_removed_item_keeps_menu_with_remaining_item() {
    let registry = custom_file_registry();
    let menus = identify_menus("custom1", &registry);

    assert_eq!(menus.len(), 1);
    assert_eq!(item_ids(&menus[0]), vec!["newdocument", "|"]);
}

/// 구분선만 남으면 메뉴 제거
#[test]
fn test_menu_with_only_separators_left_is_dropped() {
    let registry = custom_file_registry();
    let menus = identify_menus("newdocument,custom1", &registry);
    assert!(menus.is_empty());
}

#[test]
fn test_separator_only_menu_is_dropped() {
    let registry = MenuRegistry::new()
        .with_menubar("file")
        .with_menu("file", MenuDefinition::new("File", "|"));
    assert!(identify_menus("", &registry).is_empty());
}

#[test]
fn test_menubar_false_is_empty() {
    let registry = catalog_registry().with_menubar(false);
    assert!(identify_menus("", &registry).is_empty());
}

#[test]
fn test_default_menubar_order() {
    let expected = vec![
        "File", "Edit", "View", "Insert", "Format", "Tools", "Table", "Help",
    ];

    let unset = catalog_registry();
    assert_eq!(titles(&identify_menus("", &unset)), expected);

    let enabled = catalog_registry().with_menubar(true);
    assert_eq!(titles(&identify_menus("", &enabled)), expected);
}

/// 항목이 하나도 등록되지 않으면 기본 메뉴도 모두 제거
#[test]
fn test_default_menus_without_items_are_dropped() {
    let registry = MenuRegistry::new();
    assert!(identify_menus("", &registry).is_empty());
}

#[test]
fn test_unknown_menubar_keys_are_excluded() {
    let registry = catalog_registry().with_menubar("nonexistent edit bogus help");
    let menus = identify_menus("", &registry);
    assert_eq!(titles(&menus), vec!["Edit", "Help"]);
}

#[test]
fn test_menubar_key_list() {
    let registry =
        catalog_registry().with_menubar(vec!["help".to_string(), "file".to_string()]);
    let menus = identify_menus("", &registry);
    assert_eq!(titles(&menus), vec!["Help", "File"]);
}

#[test]
fn test_menubar_string_with_extra_spaces() {
    let registry = catalog_registry().with_menubar("file  edit ");
    let menus = identify_menus("", &registry);
    assert_eq!(titles(&menus), vec!["File", "Edit"]);
}

#[test]
fn test_removed_item_filtered_from_every_menu() {
    let registry = catalog_registry();
    let menus = identify_menus("inserttable spellchecker", &registry);

    for menu in &menus {
        let ids = item_ids(menu);
        assert!(!ids.contains(&"inserttable".to_string()), "{}", menu.text());
        assert!(!ids.contains(&"spellchecker".to_string()), "{}", menu.text());
    }
}

#[test]
fn test_shared_token_resolves_per_menu() {
    let registry = catalog_registry();
    let menus = identify_menus("", &registry);

    let insert = menus.iter().find(|m| m.key() == "insert").unwrap();
    let table = menus.iter().find(|m| m.key() == "table").unwrap();
    assert!(item_ids(insert).contains(&"inserttable".to_string()));
    assert_eq!(item_ids(table)[0], "inserttable");
}

#[test]
fn test_unknown_tokens_are_omitted() {
    let registry = catalog_registry();
    let menus = identify_menus("", &registry);

    let file = menus.iter().find(|m| m.key() == "file").unwrap();
    // deleteallconversations는 카탈로그에 없음
    assert_eq!(
        item_ids(file),
        vec!["newdocument", "restoredraft", "|", "preview", "|", "print", "|"]
    );
}

#[test]
fn test_separator_keyword_token() {
    let registry = MenuRegistry::new()
        .with_item("a", MenuItemSpec::action("", "A"))
        .with_item("b", MenuItemSpec::action("", "B"))
        .with_menubar("file")
        .with_menu("file", MenuDefinition::new("File", "a separator b"));
    let menus = identify_menus("", &registry);
    assert_eq!(item_ids(&menus[0]), vec!["a", "|", "b"]);
}

/// 제거 목록 비교는 정확히 일치할 때만
#[test]
fn test_removed_match_is_exact() {
    let registry = custom_file_registry();

    let menus = identify_menus("Custom1 newdoc", &registry);
    assert_eq!(item_ids(&menus[0]), vec!["newdocument", "|", "custom1"]);

    let menus = identify_menus(" , custom1,", &registry);
    assert_eq!(item_ids(&menus[0]), vec!["newdocument", "|"]);
}

/// 사용자 정의는 기본 메뉴를 통째로 대체 (항목 병합 없음)
#[test]
fn test_user_menu_replaces_default_wholesale() {
    let registry = catalog_registry()
        .with_menubar("edit")
        .with_menu("edit", MenuDefinition::new("My Edit", "bold"));
    let menus = identify_menus("", &registry);

    assert_eq!(titles(&menus), vec!["My Edit"]);
    assert_eq!(item_ids(&menus[0]), vec!["bold"]);
}

/// 항목 없는 사용자 정의가 기본 메뉴를 가리면 메뉴는 비어서 제거됨
#[test]
fn test_user_menu_without_items_shadows_default() {
    let registry = catalog_registry()
        .with_menubar("file edit")
        .with_menu("file", MenuDefinition::titled("Document"));
    let menus = identify_menus("", &registry);

    assert_eq!(titles(&menus), vec!["Edit"]);
}

/// 항목 없는 사용자 정의 메뉴 키는 기본 메뉴가 아니면 무효
#[test]
fn test_custom_key_requires_items() {
    let registry = catalog_registry()
        .with_menubar("custom other")
        .with_menu("custom", MenuDefinition::new("Custom", "bold italic"))
        .with_menu("other", MenuDefinition::titled("Other"));
    let menus = identify_menus("", &registry);

    assert_eq!(titles(&menus), vec!["Custom"]);
    assert_eq!(menus[0].key(), "custom");
}

#[test]
fn test_custom_menu_with_token_list() {
    let registry = catalog_registry().with_menubar("custom").with_menu(
        "custom",
        MenuDefinition {
            title: Some("Custom".to_string()),
            items: Some(ItemTokens::List(vec![
                "undo".to_string(),
                "|".to_string(),
                "redo".to_string(),
            ])),
        },
    );
    let menus = identify_menus("", &registry);
    assert_eq!(item_ids(&menus[0]), vec!["undo", "|", "redo"]);
}

#[test]
fn test_custom_menu_without_title_uses_empty_text() {
    let registry = catalog_registry().with_menubar("custom").with_menu(
        "custom",
        MenuDefinition {
            title: None,
            items: Some(ItemTokens::from("undo")),
        },
    );
    let menus = identify_menus("", &registry);
    assert_eq!(menus[0].text(), "");
}

#[test]
fn test_get_items_is_repeatable() {
    let registry = custom_file_registry();
    let menus = identify_menus("", &registry);

    let first = menus[0].get_items();
    let second = menus[0].get_items();
    assert_eq!(first, second);
}

#[test]
fn test_make_menu_keeps_raw_tokens() {
    let registry = MenuRegistry::new();
    let def = MenuDefinition::new("File", "a  b");
    let menu = make_menu("file", &def, &registry, Rc::from(Vec::<String>::new()));

    assert_eq!(menu.tokens, ["a", "", "b"]);
    assert!(menu.get_items().is_empty());
}

#[test]
fn test_menubar_setting_text_variant() {
    let registry = MenuRegistry {
        menubar: Some(MenubarSetting::Text(String::new())),
        ..catalog_registry()
    };
    assert!(identify_menus("", &registry).is_empty());
}
