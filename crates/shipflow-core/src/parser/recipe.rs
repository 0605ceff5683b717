//! recipe ノードのパース

use super::{args, first_arg, property, required_arg};
use crate::error::{FlowError, Result};
use crate::model::{RecipeMode, RecipeSpec};
use kdl::KdlNode;
use std::path::PathBuf;

/// recipe ノードをパース
pub fn parse_recipe(node: &KdlNode, recipe: &mut RecipeSpec) -> Result<()> {
    if let Some(path) = first_arg(node) {
        recipe.path = PathBuf::from(path);
    }

    if let Some(mode) = property(node, "mode") {
        recipe.mode = RecipeMode::parse(mode).ok_or_else(|| {
            FlowError::InvalidConfig(format!(
                "recipe mode must be \"generate\" or \"provided\": {}",
                mode
            ))
        })?;
    }

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "base" => recipe.base = required_arg(child)?.to_string(),
                "workdir" => recipe.workdir = required_arg(child)?.to_string(),
                "install" => recipe.install = required_arg(child)?.to_string(),
                "command" => {
                    let command = args(child);
                    if command.is_empty() {
                        return Err(FlowError::InvalidConfig(
                            "command requires at least one argument".to_string(),
                        ));
                    }
                    recipe.command = command;
                }
                // 複数の変数名を引数として受け取る
                "env" => recipe.env = args(child),
                other => tracing::warn!("Unknown recipe field: {}", other),
            }
        }
    }

    Ok(())
}
