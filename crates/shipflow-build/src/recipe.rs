//! ビルドレシピ（Dockerfile）の生成
//!
//! 埋め込みテンプレートを Tera で展開します。環境変数は値を空のまま
//! 宣言し、コンテナ実行時に上書きさせます。

use crate::error::{BuildError, BuildResult};
use shipflow_core::RecipeSpec;
use std::path::Path;
use tera::{Context, Tera};

/// 埋め込みの Dockerfile テンプレート
pub const DOCKERFILE_TEMPLATE: &str = include_str!("templates/Dockerfile.tera");

/// 展開済みのレシピ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    content: String,
}

impl Recipe {
    /// レシピ設定からテンプレートを展開
    pub fn render(spec: &RecipeSpec) -> BuildResult<Self> {
        let mut context = Context::new();
        context.insert("base", &spec.base);
        context.insert("workdir", &spec.workdir);
        context.insert("install", &spec.install);
        context.insert("env", &spec.env);
        context.insert("command", &spec.command);

        let content = Tera::one_off(DOCKERFILE_TEMPLATE, &context, false)?;
        Ok(Self { content })
    }

    /// 既存のレシピファイルを読み込む
    pub async fn read_from(path: &Path) -> BuildResult<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Self { content }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BuildError::RecipeNotFound(path.to_path_buf()))
            }
            Err(e) => Err(BuildError::Io(e)),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// レシピをファイルに書き出す（既存ファイルは無条件に上書き）
    pub async fn write_to(&self, path: &Path) -> BuildResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &self.content).await?;
        tracing::debug!("Wrote recipe: {} ({} bytes)", path.display(), self.content.len());
        Ok(())
    }
}
