use crate::engine::ContainerEngine;
use crate::error::{BuildError, BuildResult};
use crate::recipe::Recipe;
use crate::reference::{ImageRef, local_image};
use shipflow_core::{Pipeline, RecipeMode};
use std::path::{Path, PathBuf};

/// ビルドステージ: レシピを用意してローカルイメージを作る
pub struct ImageBuilder<'a> {
    engine: &'a dyn ContainerEngine,
}

impl<'a> ImageBuilder<'a> {
    pub fn new(engine: &'a dyn ContainerEngine) -> Self {
        Self { engine }
    }

    /// レシピを用意してそのパスを返す
    ///
    /// - generate: テンプレートを展開して書き出す（既存ファイルは上書き）
    /// - provided: ソースツリー内のファイルが存在することだけ確認する
    pub async fn prepare_recipe(&self, pipeline: &Pipeline, root: &Path) -> BuildResult<PathBuf> {
        let recipe_path = root.join(pipeline.recipe_path());

        match pipeline.recipe.mode {
            RecipeMode::Generate => {
                let recipe = Recipe::render(&pipeline.recipe)?;
                recipe.write_to(&recipe_path).await?;
                tracing::info!("Generated recipe: {}", recipe_path.display());
            }
            RecipeMode::Provided => {
                if !recipe_path.is_file() {
                    return Err(BuildError::RecipeNotFound(recipe_path));
                }
                tracing::info!("Using provided recipe: {}", recipe_path.display());
            }
        }

        Ok(recipe_path)
    }

    /// イメージをビルド
    pub async fn build(&self, pipeline: &Pipeline, root: &Path) -> BuildResult<ImageRef> {
        let image = local_image(pipeline)?;
        let context = root.join(&pipeline.context);

        // コンテキストディレクトリの存在確認
        if !context.is_dir() {
            return Err(BuildError::ContextNotFound(context));
        }

        let recipe_path = self.prepare_recipe(pipeline, root).await?;

        tracing::info!(engine = self.engine.name(), "Building image: {}", image);
        self.engine.build(&context, &recipe_path, &image).await?;
        tracing::info!("Successfully built: {}", image);

        Ok(image)
    }
}
