//! 리치 텍스트 에디터 메뉴바 구성
//!
//! 기본 메뉴와 사용자 메뉴를 병합하고, 제거된 항목을 걸러
//! 렌더러가 그릴 선언형 메뉴 목록을 만든다.

pub mod core;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::{identify_menus, EditorConfig, EditorSettings, ResolvedMenu};
pub use models::{MenuDefinition, MenuEntry, MenuItemSpec, MenuRegistry, MenubarSetting};
pub use utils::error::{MenubarError, Result};
