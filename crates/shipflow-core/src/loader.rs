//! 統合ローダー
//!
//! ファイル発見とパースを統合

use crate::error::Result;
use crate::model::Pipeline;
use crate::parser::parse_pipeline_file;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// 指定ディレクトリを起点にパイプラインをロード
///
/// 戻り値の2番目は読み込んだファイル（なければ `None`）
#[instrument(skip(base_dir), fields(base_dir = %base_dir.display()))]
pub fn load_pipeline_from(base_dir: &Path) -> Result<(Pipeline, Option<PathBuf>)> {
    match shipflow_config::find_pipeline_file_from(base_dir)? {
        Some(path) => {
            debug!("Parsing pipeline file: {}", path.display());
            let pipeline = parse_pipeline_file(&path)?;
            info!(file = %path.display(), "Pipeline loaded");
            Ok((pipeline, Some(path)))
        }
        None => {
            info!("No pipeline file found, using built-in defaults");
            Ok((Pipeline::default(), None))
        }
    }
}
