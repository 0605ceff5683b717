use crate::utils::{self, Project};
use colored::Colorize;
use shipflow_build::inspect_images;

/// statusコマンドを処理
pub async fn handle(project: &Project) -> anyhow::Result<()> {
    let engine = utils::engine(project);
    let status = inspect_images(&engine, &project.pipeline).await?;

    println!("{}", "イメージの状態:".bold());
    for (image, id) in [
        (&status.local, &status.local_id),
        (&status.remote, &status.remote_id),
    ] {
        match id {
            Some(id) => println!("  {} {} {}", "✓".green(), image.to_string().cyan(), id.dimmed()),
            None => println!("  {} {} {}", "✗".red(), image.to_string().cyan(), "(なし)".dimmed()),
        }
    }

    println!();
    if status.is_tagged() {
        println!("{}", "リモート参照はローカルイメージと同じイメージを指しています".green());
    } else if status.local_id.is_none() {
        println!("{}", "ローカルイメージがありません: ship build を実行してください".yellow());
    } else {
        println!("{}", "リモート参照が未作成または古いままです: ship publish を実行してください".yellow());
    }
    Ok(())
}
