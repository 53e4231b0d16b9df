use thiserror::Error;

/// バインド指定のパースに失敗した理由
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBind {
    #[error("空文字列、または ':' で始まる指定はフィールドに分割できません")]
    Unsplittable,

    #[error("フィールド数が不正です（{0}個）。<host>:<container>[:<flags>] の形式で指定してください")]
    FieldCount(usize),

    #[error("不明なアクセスモード '{0}' です（rw または ro）")]
    UnknownAccessMode(String),

    #[error("不正な SELinux コンテキスト '{0}' です（z, Z, または user:role:type[:level]）")]
    InvalidSelContext(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("バインド指定 '{spec}' をパースできません: {cause}")]
    InvalidSpecification {
        spec: String,
        #[source]
        cause: InvalidBind,
    },
}

impl BindError {
    pub fn invalid(spec: impl Into<String>, cause: InvalidBind) -> Self {
        BindError::InvalidSpecification {
            spec: spec.into(),
            cause,
        }
    }

    /// パースに失敗した元の文字列
    pub fn spec(&self) -> &str {
        match self {
            BindError::InvalidSpecification { spec, .. } => spec,
        }
    }

    pub fn cause(&self) -> &InvalidBind {
        match self {
            BindError::InvalidSpecification { cause, .. } => cause,
        }
    }
}

pub type Result<T> = std::result::Result<T, BindError>;
