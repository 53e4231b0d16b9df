//! バインドマウント定義

use super::{AccessMode, PropagationMode, SelContext, Volume};
use crate::error::BindError;
use crate::parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ホストのパスをコンテナ内の [`Volume`] にバインドマウントする指定
///
/// 生成後は変更されません。文字列表現 `host:container:mode[,...]` との相互変換は
/// [`Bind::parse`] と `Display` で行います。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bind {
    host_path: String,
    volume: Volume,
    access_mode: AccessMode,
    sel_context: SelContext,
    no_copy: Option<bool>,
    propagation_mode: PropagationMode,
}

/// [`Bind::new`] に渡す省略可能な設定
///
/// すべてのフィールドはデフォルト値を持ちます:
/// `ReadWrite` / SELinux 指定なし / nocopy 未指定 / プロパゲーションは既定値。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindOptions {
    pub access_mode: AccessMode,
    pub sel_context: SelContext,
    pub no_copy: Option<bool>,
    pub propagation_mode: PropagationMode,
}

impl Bind {
    pub fn new(host_path: impl Into<String>, volume: Volume, options: BindOptions) -> Self {
        Self {
            host_path: host_path.into(),
            volume,
            access_mode: options.access_mode,
            sel_context: options.sel_context,
            no_copy: options.no_copy,
            propagation_mode: options.propagation_mode,
        }
    }

    /// フラグなしのバインドを生成
    pub fn simple(host_path: impl Into<String>, container_path: impl Into<String>) -> Self {
        Self::new(
            host_path,
            Volume::new(container_path),
            BindOptions::default(),
        )
    }

    /// `/host:/container[:flags]` 形式の文字列をパース
    ///
    /// # Errors
    /// フィールドに分割できない場合、フィールド数が2〜3でない場合、
    /// フラグに解釈できないトークンが含まれる場合は
    /// [`BindError::InvalidSpecification`] を返します。
    pub fn parse(spec: &str) -> Result<Self, BindError> {
        parser::parse_bind(spec)
    }

    pub fn host_path(&self) -> &str {
        &self.host_path
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn access_mode(&self) -> AccessMode {
        self.access_mode
    }

    pub fn sel_context(&self) -> &SelContext {
        &self.sel_context
    }

    /// nocopy の指定（未指定は `None`）
    pub fn no_copy(&self) -> Option<bool> {
        self.no_copy
    }

    pub fn propagation_mode(&self) -> PropagationMode {
        self.propagation_mode
    }

    pub fn options(&self) -> BindOptions {
        BindOptions {
            access_mode: self.access_mode,
            sel_context: self.sel_context.clone(),
            no_copy: self.no_copy,
            propagation_mode: self.propagation_mode,
        }
    }
}

/// 正規形 `host:container:mode[,selinux][,nocopy][,propagation]` で出力
///
/// アクセスモードは常に明示され、`no_copy == Some(false)` は未指定と同じく省略されます。
impl fmt::Display for Bind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.host_path,
            self.volume.path(),
            self.access_mode
        )?;
        if !self.sel_context.is_none() {
            write!(f, ",{}", self.sel_context)?;
        }
        if self.no_copy == Some(true) {
            f.write_str(",nocopy")?;
        }
        if !self.propagation_mode.is_default() {
            write!(f, ",{}", self.propagation_mode)?;
        }
        Ok(())
    }
}

impl FromStr for Bind {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bind::parse(s)
    }
}

impl TryFrom<String> for Bind {
    type Error = BindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Bind::parse(&value)
    }
}

impl From<Bind> for String {
    fn from(bind: Bind) -> Self {
        bind.to_string()
    }
}
