// Core Layer
pub mod button;
pub mod catalog;
pub mod config;
pub mod defaults;
pub mod resolver;
pub mod settings;
pub mod tokens;

pub use button::{
    build_nested_menu, render_menu_button, DropdownSpec, ItemResponse, MenuPreset, NestedMenu,
    ToolbarMenuButton,
};
pub use catalog::{catalog_items, shortcut_display};
pub use config::EditorConfig;
pub use defaults::{default_menu, is_default_menu, DEFAULT_MENUBAR};
pub use resolver::{identify_menus, make_menu, ResolvedMenu};
pub use settings::EditorSettings;
