//! KDLパーサー
//!
//! ship.kdl をパースして Pipeline を生成します。
//! 省略されたノードは既定値のまま残ります。

mod recipe;
mod registry;

use recipe::parse_recipe;
use registry::parse_registry;

use crate::error::{FlowError, Result};
use crate::model::Pipeline;
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::{Path, PathBuf};

/// KDLファイルをパースしてPipelineを生成
pub fn parse_pipeline_file<P: AsRef<Path>>(path: P) -> Result<Pipeline> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| FlowError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_pipeline_string(&content)
}

/// KDL文字列をパース
pub fn parse_pipeline_string(content: &str) -> Result<Pipeline> {
    let doc: KdlDocument = content.parse()?;
    let mut pipeline = Pipeline::default();

    for node in doc.nodes() {
        match node.name().value() {
            "engine" => {
                pipeline.engine = required_arg(node)?.to_string();
            }
            "image" => {
                pipeline.image.name = required_arg(node)?.to_string();
                if let Some(tag) = property(node, "tag") {
                    pipeline.image.tag = tag.to_string();
                }
            }
            "context" => {
                pipeline.context = PathBuf::from(required_arg(node)?);
            }
            "recipe" => {
                parse_recipe(node, &mut pipeline.recipe)?;
            }
            "registry" => {
                parse_registry(node, &mut pipeline.registry)?;
            }
            "credential" => {
                pipeline.credential = PathBuf::from(required_arg(node)?);
            }
            other => {
                // 不明なノードはスキップ
                tracing::warn!("Unknown node in pipeline file: {}", other);
            }
        }
    }

    Ok(pipeline)
}

/// 最初の位置引数（文字列）
fn first_arg(node: &KdlNode) -> Option<&str> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
}

fn required_arg(node: &KdlNode) -> Result<&str> {
    first_arg(node).ok_or_else(|| {
        FlowError::InvalidConfig(format!("{} requires a value", node.name().value()))
    })
}

/// すべての位置引数（文字列）
fn args(node: &KdlNode) -> Vec<String> {
    node.entries()
        .iter()
        .filter(|e| e.name().is_none())
        .filter_map(|e| e.value().as_string().map(|s| s.to_string()))
        .collect()
}

/// 名前付きプロパティ（文字列）
fn property<'a>(node: &'a KdlNode, key: &str) -> Option<&'a str> {
    node.entries()
        .iter()
        .find(|e| e.name().is_some_and(|n| n.value() == key))
        .and_then(|e| e.value().as_string())
}
