// Data Models
pub mod menu;
pub mod menu_item;
pub mod registry;

pub use menu::{ItemTokens, MenuDefinition, MenuEntry, MenubarSetting};
pub use menu_item::MenuItemSpec;
pub use registry::MenuRegistry;
