use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ディレクトリが見つかりません")]
    ConfigDirNotFound,

    #[error(
        "バインド設定ファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: dockbind.local.yaml, .dockbind.local.yaml, dockbind.yaml, .dockbind.yaml\n\
        - ./.dockbind/ ディレクトリ\n\
        - ~/.config/dockbind/dockbind.yaml\n\
        または DOCKBIND_CONFIG_PATH 環境変数で直接指定できます"
    )]
    BindsFileNotFound,

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("設定ファイルの読み込みに失敗しました: {path}\n理由: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
