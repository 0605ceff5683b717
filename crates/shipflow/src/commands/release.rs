use super::{build, publish};
use crate::utils::{self, Project};
use colored::Colorize;

/// releaseコマンドを処理
///
/// build が成功した場合のみ publish に進む
pub async fn handle(project: &Project) -> anyhow::Result<()> {
    println!("{}", "ビルド＆公開を開始します...".green());
    utils::print_loaded_config_file(project);

    let engine = utils::engine(project);
    let local = build::run(&engine, project).await?;
    println!("  {} ビルド完了", "✓".green());

    let remote = publish::run(&engine, project).await?;
    println!("  {} プッシュ完了", "✓".green());

    // 結果サマリー
    println!();
    println!("{}", "結果サマリー:".bold());
    println!("  {} local:  {}", "✓".green(), local.to_string().cyan());
    println!("  {} remote: {}", "✓".green(), remote.to_string().cyan());
    Ok(())
}
