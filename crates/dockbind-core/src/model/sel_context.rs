//! SELinux ラベル指定

use crate::error::InvalidBind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SELinux の再ラベル付け指定
///
/// - `z`: 複数コンテナで共有するラベル
/// - `Z`: このコンテナ専用のラベル
/// - `user:role:type[:level]`: 明示的なラベル
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SelContext {
    #[default]
    None,
    Shared,
    Private,
    Custom(SelLabel),
}

/// 検証済みの `user:role:type[:level]` ラベル
///
/// [`SelContext::custom`] または [`SelLabel::new`] でのみ生成できます。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelLabel(String);

impl SelLabel {
    pub fn new(label: impl Into<String>) -> Result<Self, InvalidBind> {
        let label = label.into();
        if is_selinux_label(&label) {
            Ok(Self(label))
        } else {
            Err(InvalidBind::InvalidSelContext(label))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl SelContext {
    const CODES: [(&'static str, SelContext); 3] = [
        ("", SelContext::None),
        ("z", SelContext::Shared),
        ("Z", SelContext::Private),
    ];

    /// 明示的なラベルを指定
    ///
    /// ラベルとして不正な文字列は `InvalidSelContext` になります。
    pub fn custom(label: impl Into<String>) -> Result<Self, InvalidBind> {
        SelLabel::new(label).map(SelContext::Custom)
    }

    /// フラグトークンを SELinux 指定として解釈する
    pub fn parse(token: &str) -> Result<Self, InvalidBind> {
        if let Some((_, context)) = Self::CODES.iter().find(|(code, _)| *code == token) {
            return Ok(context.clone());
        }
        Self::custom(token)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::Shared => "z",
            Self::Private => "Z",
            Self::Custom(label) => label.as_str(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// `user:role:type` の後ろに任意個の level 要素が続く形式かどうか
///
/// ',' や空白を含まず ':' を2つ以上含むため、他のフラグと衝突しない。
fn is_selinux_label(token: &str) -> bool {
    let parts: Vec<&str> = token.split(':').collect();
    parts.len() >= 3
        && parts.iter().all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        })
}

impl fmt::Display for SelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for SelContext {
    type Error = InvalidBind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SelContext::parse(&value)
    }
}

impl From<SelContext> for String {
    fn from(context: SelContext) -> Self {
        context.as_str().to_string()
    }
}
