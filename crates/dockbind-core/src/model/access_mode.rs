//! アクセスモード定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// マウント先に対するアクセス権
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    #[default]
    ReadWrite,
    ReadOnly,
}

impl AccessMode {
    /// コードとモードの対応表
    const CODES: [(&'static str, AccessMode); 2] =
        [("rw", AccessMode::ReadWrite), ("ro", AccessMode::ReadOnly)];

    /// 2文字のコードからモードを引く（大文字小文字は区別しない）
    ///
    /// 未知のコードは `None` を返します。
    pub fn from_code(code: &str) -> Option<Self> {
        Self::CODES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, mode)| *mode)
    }

    /// Docker APIで使用するコード
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadWrite => "rw",
            Self::ReadOnly => "ro",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
