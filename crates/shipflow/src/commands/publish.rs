use crate::utils::{self, Project};
use colored::Colorize;
use shipflow_build::{BuildResult, ContainerEngine, ImagePublisher, ImageRef};

/// publishコマンドを処理
pub async fn handle(project: &Project) -> anyhow::Result<()> {
    println!("{}", "イメージを公開中...".green());
    utils::print_loaded_config_file(project);

    let engine = utils::engine(project);
    let remote = run(&engine, project).await?;

    println!();
    println!("{} {}", "✓ プッシュ完了:".green().bold(), remote.to_string().cyan());
    Ok(())
}

/// パブリッシュステージを実行（release からも使う）
pub async fn run(engine: &dyn ContainerEngine, project: &Project) -> BuildResult<ImageRef> {
    let pipeline = &project.pipeline;

    println!();
    println!("{}", "📤 イメージをプッシュ中...".blue().bold());
    println!(
        "  → Registry: {} ({})",
        pipeline.registry.host.cyan(),
        pipeline.registry.login_user()
    );
    println!(
        "  → Credential: {}",
        pipeline.credential.display().to_string().cyan()
    );

    ImagePublisher::new(engine)
        .publish(pipeline, &project.root)
        .await
}
