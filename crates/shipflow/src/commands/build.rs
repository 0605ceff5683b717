use crate::utils::{self, Project};
use colored::Colorize;
use shipflow_build::{BuildResult, ContainerEngine, ImageBuilder, ImageRef};

/// buildコマンドを処理
pub async fn handle(project: &Project) -> anyhow::Result<()> {
    println!("{}", "Dockerイメージをビルド中...".green());
    utils::print_loaded_config_file(project);

    let engine = utils::engine(project);
    let image = run(&engine, project).await?;

    println!();
    println!("{} {}", "✓ ビルド完了:".green().bold(), image.to_string().cyan());
    Ok(())
}

/// ビルドステージを実行（release からも使う）
pub async fn run(engine: &dyn ContainerEngine, project: &Project) -> BuildResult<ImageRef> {
    let pipeline = &project.pipeline;

    println!();
    println!(
        "{}",
        format!("🔨 {} をビルド中...", pipeline.image.name)
            .green()
            .bold()
    );
    println!(
        "  → Dockerfile: {} ({})",
        pipeline.recipe_path().display().to_string().cyan(),
        pipeline.recipe.mode
    );
    println!(
        "  → Context: {}",
        pipeline.context.display().to_string().cyan()
    );

    ImageBuilder::new(engine)
        .build(pipeline, &project.root)
        .await
}
