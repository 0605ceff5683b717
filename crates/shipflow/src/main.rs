mod commands;
mod utils;

use clap::{Parser, Subcommand};
use colored::Colorize;
use shipflow_build::BuildError;
use tracing_subscriber::EnvFilter;
use utils::Overrides;

#[derive(Parser)]
#[command(name = "ship")]
#[command(
    about = "mcp-azure-devops のコンテナイメージをビルドし、レジストリに公開する",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dockerfileを用意してローカルイメージをビルド
    Build,
    /// ローカルイメージを再タグ付けしてレジストリにプッシュ
    Publish,
    /// build と publish を順に実行
    Release,
    /// 生成されるDockerfileを表示（ファイルは書き換えない）
    Recipe,
    /// ローカルのイメージストアにある参照を確認
    Status,
    /// 設定を検証して解決結果を表示
    Validate {
        /// JSON形式で出力
        #[arg(long)]
        json: bool,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdoutはレシピ出力などに使うので、ログはstderrに出力
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), describe(&e));
        std::process::exit(exit_code(&e));
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Versionコマンドは設定ファイル不要
    if matches!(cli.command, Commands::Version) {
        println!("shipflow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let project = utils::load_project(&cli.overrides)?;

    // コマンドディスパッチ
    match cli.command {
        Commands::Build => commands::build::handle(&project).await?,
        Commands::Publish => commands::publish::handle(&project).await?,
        Commands::Release => commands::release::handle(&project).await?,
        Commands::Recipe => commands::recipe::handle(&project).await?,
        Commands::Status => commands::status::handle(&project).await?,
        Commands::Validate { json } => commands::validate::handle(&project, json)?,
        Commands::Version => unreachable!("Version is handled before config loading"),
    }

    Ok(())
}

fn describe(error: &anyhow::Error) -> String {
    match error.downcast_ref::<BuildError>() {
        Some(build_error) => build_error.user_message(),
        None => format!("{:#}", error),
    }
}

/// エンジンの終了コードをそのまま返す（それ以外の失敗は 1）
fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<BuildError>()
        .and_then(BuildError::exit_code)
        .unwrap_or(1)
}
