//! マウントプロパゲーション定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// マウント/アンマウントイベントをホストと共有するかどうか
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropagationMode {
    /// ランタイムの既定値（文字列表現は空）
    #[default]
    Default,
    Shared,
    Slave,
    Private,
}

impl PropagationMode {
    const KEYWORDS: [(&'static str, PropagationMode); 3] = [
        ("shared", PropagationMode::Shared),
        ("slave", PropagationMode::Slave),
        ("private", PropagationMode::Private),
    ];

    /// キーワードからモードを引く（完全一致）
    ///
    /// `Default` は空文字列で表されるため、ここでは返しません。
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, mode)| *mode)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Shared => "shared",
            Self::Slave => "slave",
            Self::Private => "private",
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for PropagationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
