//! バインドの一覧

use super::Bind;
use serde::{Deserialize, Serialize};

/// コンテナ作成リクエストに含めるバインドの一覧
///
/// Docker Engine API の `HostConfig.Binds` と同じく、文字列の配列としてシリアライズされます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Binds(Vec<Bind>);

impl Binds {
    pub fn new(binds: Vec<Bind>) -> Self {
        Self(binds)
    }

    /// 文字列の一覧をまとめてパース
    ///
    /// 最初に失敗した指定のエラーを返します。
    pub fn parse_all<S: AsRef<str>>(specs: &[S]) -> crate::error::Result<Self> {
        specs
            .iter()
            .map(|spec| Bind::parse(spec.as_ref()))
            .collect::<crate::error::Result<Vec<_>>>()
            .map(Self)
    }

    pub fn push(&mut self, bind: Bind) {
        self.0.push(bind);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bind> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Bind] {
        &self.0
    }

    /// 正規形の文字列に変換
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(Bind::to_string).collect()
    }
}

impl From<Vec<Bind>> for Binds {
    fn from(binds: Vec<Bind>) -> Self {
        Self(binds)
    }
}

impl FromIterator<Bind> for Binds {
    fn from_iter<I: IntoIterator<Item = Bind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Binds {
    type Item = Bind;
    type IntoIter = std::vec::IntoIter<Bind>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Binds {
    type Item = &'a Bind;
    type IntoIter = std::slice::Iter<'a, Bind>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
