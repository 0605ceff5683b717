use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "SHIP_CONFIG_PATH で指定されたパイプラインファイルが見つかりません: {0}\n\
        パスを確認するか、環境変数を外してカレントディレクトリの ship.kdl を使用してください"
    )]
    PipelineFileNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
