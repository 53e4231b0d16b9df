//! バインド一覧の設定ファイル
//!
//! ```yaml
//! binds:
//!   - /srv/data:/data
//!   - /etc/app:/etc/app:ro,Z
//! ```

pub mod error;

pub use error::*;

use dockbind_core::Binds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 設定ファイルのパスを直接指定する環境変数
pub const CONFIG_PATH_ENV: &str = "DOCKBIND_CONFIG_PATH";

const CANDIDATES: [&str; 4] = [
    "dockbind.local.yaml",
    ".dockbind.local.yaml",
    "dockbind.yaml",
    ".dockbind.yaml",
];

/// バインド設定ファイルの内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindsFile {
    #[serde(default)]
    pub binds: Binds,
}

impl BindsFile {
    /// YAML文字列をパース
    ///
    /// `path` はエラーメッセージにのみ使用されます。
    pub fn from_yaml_str(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
            path: path.into(),
            source,
        })
    }
}

/// dockbindの設定ディレクトリを取得
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("dockbind");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// バインド設定ファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 DOCKBIND_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ: dockbind.local.yaml, .dockbind.local.yaml, dockbind.yaml, .dockbind.yaml
/// 3. ./.dockbind/ ディレクトリ内: 同様の順序
/// 4. ~/.config/dockbind/dockbind.yaml (グローバル設定)
pub fn find_binds_file() -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            debug!(path = %path.display(), "using bind file from {}", CONFIG_PATH_ENV);
            return Ok(path);
        }
        warn!(
            path = %path.display(),
            "{} points to a missing file, falling back to search",
            CONFIG_PATH_ENV
        );
    }

    let current_dir = std::env::current_dir()?;

    // 2. カレントディレクトリ → 3. ./.dockbind/
    for dir in [current_dir.clone(), current_dir.join(".dockbind")] {
        if let Some(path) = find_in_dir(&dir) {
            return Ok(path);
        }
    }

    // 4. グローバル設定ファイル
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("dockbind").join("dockbind.yaml");
        if global_config.exists() {
            debug!(path = %global_config.display(), "using global bind file");
            return Ok(global_config);
        }
    }

    Err(ConfigError::BindsFileNotFound)
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }
    CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
        .inspect(|path| debug!(path = %path.display(), "found bind file"))
}

/// バインド設定ファイルを読み込む
pub fn load_binds_file(path: &Path) -> Result<BindsFile> {
    let content = std::fs::read_to_string(path)?;
    let file = BindsFile::from_yaml_str(&content, path)?;
    debug!(path = %path.display(), count = file.binds.len(), "loaded bind file");
    Ok(file)
}
