// UI Layer (preview renderer)
pub mod dropdown_menu;
pub mod menu_bar;
pub mod preview;

pub use dropdown_menu::DropdownMenu;
pub use menu_bar::MenuBar;
pub use preview::{render_preview, PreviewOptions};
