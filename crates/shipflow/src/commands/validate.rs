use crate::utils::{self, Project};
use colored::Colorize;
use serde::Serialize;
use shipflow_build::{local_image, remote_image};
use shipflow_core::RecipeMode;
use std::path::PathBuf;

/// `--json` で出力する解決済みの設定
#[derive(Debug, Serialize)]
struct ResolvedPipeline {
    config_file: Option<PathBuf>,
    engine: String,
    local: String,
    remote: String,
    context: PathBuf,
    recipe_path: PathBuf,
    mode: RecipeMode,
    credential: PathBuf,
    credential_exists: bool,
}

/// validateコマンドを処理
///
/// 認証トークンは存在確認のみで、中身は読まない
pub fn handle(project: &Project, json: bool) -> anyhow::Result<()> {
    let pipeline = &project.pipeline;
    let local = local_image(pipeline)?;
    let remote = remote_image(pipeline)?;

    let credential_exists = project.root.join(&pipeline.credential).is_file();

    if json {
        let resolved = ResolvedPipeline {
            config_file: project.source.clone(),
            engine: pipeline.engine.clone(),
            local: local.to_string(),
            remote: remote.to_string(),
            context: pipeline.context.clone(),
            recipe_path: pipeline.recipe_path(),
            mode: pipeline.recipe.mode,
            credential: pipeline.credential.clone(),
            credential_exists,
        };
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!("{}", "設定を検証中...".green());
    utils::print_loaded_config_file(project);
    println!();
    println!("  Engine:     {}", pipeline.engine.cyan());
    println!("  Local:      {}", local.to_string().cyan());
    println!("  Remote:     {}", remote.to_string().cyan());
    println!("  Context:    {}", pipeline.context.display().to_string().cyan());
    println!(
        "  Dockerfile: {} ({})",
        pipeline.recipe_path().display().to_string().cyan(),
        pipeline.recipe.mode
    );

    println!(
        "  Credential: {} {}",
        pipeline.credential.display().to_string().cyan(),
        if credential_exists {
            "✓".green()
        } else {
            "(未作成)".yellow()
        }
    );

    println!();
    println!("{}", "✓ 設定は有効です".green().bold());
    Ok(())
}
