//! shipflow core
//!
//! パイプライン設定（ship.kdl）のモデル定義・パース・ロードを提供します。

pub mod error;
pub mod loader;
pub mod model;
pub mod parser;

pub use error::{FlowError, Result};
pub use loader::load_pipeline_from;
pub use model::*;
pub use parser::{parse_pipeline_file, parse_pipeline_string};
