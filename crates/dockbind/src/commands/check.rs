use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

pub fn handle(file: Option<PathBuf>) -> Result<()> {
    let path = match file {
        Some(path) => path,
        None => dockbind_config::find_binds_file()?,
    };
    info!(path = %path.display(), "checking bind file");

    let config = dockbind_config::load_binds_file(&path)
        .with_context(|| format!("{} の検証に失敗しました", path.display()))?;

    println!("{}", format!("設定ファイル: {}", path.display()).blue());
    for bind in &config.binds {
        super::print_bind(bind);
    }
    println!(
        "{}",
        format!("{}件のバインドを確認しました", config.binds.len()).green()
    );

    Ok(())
}
