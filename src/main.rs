use anyhow::{Context, Result};
use clap::Parser;
use editor_menubar::ui::preview::buffer_lines;
use editor_menubar::ui::{render_preview, PreviewOptions};
use editor_menubar::{identify_menus, EditorConfig, MenubarSetting};
use log::{debug, info};
use std::path::PathBuf;

/// 터미널 너비를 알 수 없을 때 기본값
const FALLBACK_WIDTH: u16 = 80;

#[derive(Parser)]
#[command(
    name = "menubar-preview",
    version,
    about = "Resolve an editor menubar configuration and print a text preview"
)]
struct Cli {
    /// Configuration file (default: <config dir>/editor-menubar/menubar.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Items removed from every menu, separated by spaces or commas.
    #[arg(long, value_name = "LIST")]
    removed: Option<String>,

    /// Menubar order: `true`, `false`, or space-separated menu keys.
    #[arg(long, value_name = "SPEC")]
    menubar: Option<String>,

    /// Menu to show expanded, by key or title.
    #[arg(long, value_name = "MENU")]
    open: Option<String>,

    /// Output width in columns (default: terminal width).
    #[arg(long, value_name = "N")]
    width: Option<u16>,
}

fn parse_menubar_arg(spec: &str) -> MenubarSetting {
    match spec {
        "true" => MenubarSetting::Toggle(true),
        "false" => MenubarSetting::Toggle(false),
        keys => MenubarSetting::from(keys),
    }
}

fn load_config(cli: &Cli) -> Result<EditorConfig> {
    let mut config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EditorConfig::load_default().context("failed to load default config")?,
    };

    if let Some(removed) = &cli.removed {
        config.removed_menuitems = removed.clone();
    }
    if let Some(menubar) = &cli.menubar {
        config.menubar = Some(parse_menubar_arg(menubar));
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let registry = config.registry();
    let menus = identify_menus(&config, &registry);
    info!("resolved {} menus", menus.len());

    let width = cli.width.unwrap_or_else(|| {
        crossterm::terminal::size()
            .map(|(cols, _)| cols)
            .unwrap_or_else(|err| {
                debug!("terminal size unavailable ({err}), using {FALLBACK_WIDTH}");
                FALLBACK_WIDTH
            })
    });

    let options = PreviewOptions {
        width,
        open: cli.open.clone(),
    };
    for line in buffer_lines(&render_preview(&menus, &options)) {
        println!("{line}");
    }

    Ok(())
}
