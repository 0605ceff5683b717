pub mod error;

pub use error::*;

use std::path::{Path, PathBuf};

/// パイプラインファイルのパスを直接指定する環境変数
pub const CONFIG_PATH_ENV: &str = "SHIP_CONFIG_PATH";

/// 検索するファイル名（優先順）
const CANDIDATES: [&str; 4] = ["ship.local.kdl", ".ship.local.kdl", "ship.kdl", ".ship.kdl"];

/// 指定ディレクトリを起点にパイプラインファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 SHIP_CONFIG_PATH (直接パス指定、存在しなければエラー)
/// 2. 起点ディレクトリ: ship.local.kdl, .ship.local.kdl, ship.kdl, .ship.kdl
/// 3. ./.shipflow/ ディレクトリ内: 同様の順序
/// 4. ~/.config/shipflow/ship.kdl (グローバル設定)
///
/// どれも見つからない場合は `None`（組み込みのデフォルトで動作する）
pub fn find_pipeline_file_from(base_dir: &Path) -> Result<Option<PathBuf>> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            tracing::debug!("Using pipeline file from {}: {}", CONFIG_PATH_ENV, path.display());
            return Ok(Some(path));
        }
        return Err(ConfigError::PipelineFileNotFound(path));
    }

    // 2. 起点ディレクトリで検索
    if let Some(path) = first_existing(base_dir) {
        return Ok(Some(path));
    }

    // 3. ./.shipflow/ ディレクトリで検索
    let ship_dir = base_dir.join(".shipflow");
    if ship_dir.is_dir()
        && let Some(path) = first_existing(&ship_dir)
    {
        return Ok(Some(path));
    }

    // 4. グローバル設定ファイル
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("shipflow").join("ship.kdl");
        if global_config.exists() {
            return Ok(Some(global_config));
        }
    }

    tracing::debug!("No pipeline file found under {}", base_dir.display());
    Ok(None)
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}
