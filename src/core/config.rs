//! 에디터 메뉴 설정 파일
//!
//! `~/.config/editor-menubar/menubar.toml` 형식 예:
//!
//! ```toml
//! removed_menuitems = "print, preview"
//! menubar = "file edit custom"
//!
//! [menus.custom]
//! title = "Custom"
//! items = "newdocument | custom1"
//!
//! [menu_items.custom1]
//! text = "Custom item"
//! shortcut = "Ctrl+K"
//! ```

use super::catalog::catalog_items;
use super::settings::EditorSettings;
use super::tokens::is_separator_token;
use crate::models::{MenuDefinition, MenuItemSpec, MenuRegistry, MenubarSetting};
use crate::utils::error::{MenubarError, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 디렉토리 이름
pub const CONFIG_DIR_NAME: &str = "editor-menubar";
/// 설정 파일 이름
pub const CONFIG_FILE_NAME: &str = "menubar.toml";

/// 에디터 메뉴 설정
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// 모든 메뉴에서 제외할 항목 (공백 또는 쉼표 구분)
    pub removed_menuitems: String,
    /// 메뉴바 순서 (`true`/`false`/문자열/목록)
    pub menubar: Option<MenubarSetting>,
    /// 사용자 메뉴 정의
    pub menus: HashMap<String, MenuDefinition>,
    /// 추가 항목 (테이블 키가 항목 ID)
    pub menu_items: HashMap<String, MenuItemSpec>,
}

impl EditorConfig {
    /// TOML 문자열에서 설정 파싱 및 검사
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정 로드
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|source| MenubarError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 기본 설정 파일 경로
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 기본 경로에서 설정 로드 (파일이 없으면 기본값)
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                debug!("no menubar config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// 항목 이름 검사 (빈 이름, 구분선 토큰, 공백 포함 이름은 메뉴에서 참조할 수 없음)
    pub fn validate(&self) -> Result<()> {
        for name in self.menu_items.keys() {
            if name.trim().is_empty() {
                return Err(MenubarError::Config(
                    "menu item name must not be blank".to_string(),
                ));
            }
            if is_separator_token(name) {
                return Err(MenubarError::Config(format!(
                    "menu item name '{}' is reserved for separators",
                    name
                )));
            }
            if name.contains([' ', ',']) {
                return Err(MenubarError::Config(format!(
                    "menu item name '{}' must not contain spaces or commas",
                    name
                )));
            }
        }
        Ok(())
    }

    /// 카탈로그 항목 + 설정 항목으로 레지스트리 구성
    ///
    /// 같은 이름이면 설정 항목이 카탈로그 항목을 대체한다.
    pub fn registry(&self) -> MenuRegistry {
        let mut registry = MenuRegistry {
            menu_items: catalog_items(),
            menubar: self.menubar.clone(),
            menus: self.menus.clone(),
        };
        for (name, item) in &self.menu_items {
            registry.register_item(name.clone(), item.clone());
        }
        registry
    }
}

impl EditorSettings for EditorConfig {
    fn removed_menu_items(&self) -> &str {
        &self.removed_menuitems
    }
}
