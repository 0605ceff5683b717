use clap::Args;
use colored::Colorize;
use shipflow_build::CliEngine;
use shipflow_core::Pipeline;
use std::path::PathBuf;

/// ship.kdl の値を上書きするオプション
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// 使用するコンテナエンジン (docker, podman, nerdctl)
    #[arg(long, env = "SHIP_ENGINE", global = true)]
    pub engine: Option<String>,

    /// イメージタグ（ローカル・リモート共通）
    #[arg(long, env = "SHIP_TAG", global = true)]
    pub tag: Option<String>,

    /// レジストリのトークンを格納したファイル
    #[arg(long, env = "SHIP_CREDENTIAL_FILE", global = true)]
    pub credential: Option<PathBuf>,

    /// ビルドコンテキスト（ソースツリー）のディレクトリ
    #[arg(long, global = true)]
    pub context: Option<PathBuf>,
}

impl Overrides {
    /// CLI > ship.kdl > 既定値 の優先順位で適用
    pub fn apply(&self, pipeline: &mut Pipeline) {
        if let Some(engine) = &self.engine {
            pipeline.engine = engine.clone();
        }
        if let Some(tag) = &self.tag {
            pipeline.image.tag = tag.clone();
        }
        if let Some(credential) = &self.credential {
            pipeline.credential = credential.clone();
        }
        if let Some(context) = &self.context {
            pipeline.context = context.clone();
        }
    }
}

/// 実行対象のプロジェクト
pub struct Project {
    /// 相対パスの基準（カレントディレクトリ）
    pub root: PathBuf,
    pub pipeline: Pipeline,
    /// 読み込んだ設定ファイル（なければ既定値）
    pub source: Option<PathBuf>,
}

/// 設定をロードして上書きを適用
pub fn load_project(overrides: &Overrides) -> anyhow::Result<Project> {
    let root = std::env::current_dir()?;
    let (mut pipeline, source) = shipflow_core::load_pipeline_from(&root)?;
    overrides.apply(&mut pipeline);
    tracing::debug!(root = %root.display(), engine = %pipeline.engine, "Project resolved");

    Ok(Project {
        root,
        pipeline,
        source,
    })
}

/// 設定されたエンジンを、実行するコマンドラインを表示する形で作る
pub fn engine(project: &Project) -> CliEngine {
    CliEngine::new(project.pipeline.engine.clone()).with_echo(true)
}

/// 読み込んだ設定ファイル情報を表示
pub fn print_loaded_config_file(project: &Project) {
    match &project.source {
        Some(path) => println!("📄 設定ファイル: {}", path.display().to_string().cyan()),
        None => println!("📄 設定ファイル: {}", "なし（既定値を使用）".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_priority() {
        let overrides = Overrides {
            engine: Some("podman".to_string()),
            tag: Some("v3".to_string()),
            credential: Some(PathBuf::from("/run/secrets/ghcr")),
            context: Some(PathBuf::from("mcp-azure-devops")),
        };
        let mut pipeline = Pipeline::default();
        overrides.apply(&mut pipeline);

        assert_eq!(pipeline.engine, "podman");
        assert_eq!(pipeline.image.tag, "v3");
        assert_eq!(pipeline.credential, PathBuf::from("/run/secrets/ghcr"));
        assert_eq!(pipeline.context, PathBuf::from("mcp-azure-devops"));
    }

    #[test]
    fn test_empty_overrides_keep_pipeline() {
        let mut pipeline = Pipeline::default();
        Overrides::default().apply(&mut pipeline);
        assert_eq!(pipeline, Pipeline::default());
    }
}
