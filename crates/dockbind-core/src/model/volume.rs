//! コンテナ側のマウント先

use serde::{Deserialize, Serialize};
use std::fmt;

/// コンテナ内のマウント先パス
///
/// パスの正規化や絶対パスの検証は行わず、与えられた文字列をそのまま保持します。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Volume {
    path: String,
}

impl Volume {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for Volume {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Volume {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
