//! パイプライン定義

use super::{ImageSpec, RecipeSpec, RegistrySpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ENGINE: &str = "docker";
pub const DEFAULT_CONTEXT: &str = ".";
pub const DEFAULT_CREDENTIAL_FILE: &str = ".ghcr_token";

/// ビルド＆パブリッシュのパイプライン全体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// docker 互換の CLI（docker, podman, nerdctl など）
    pub engine: String,
    pub image: ImageSpec,
    /// ソースツリーを含むビルドコンテキスト
    pub context: PathBuf,
    pub recipe: RecipeSpec,
    pub registry: RegistrySpec,
    /// レジストリのトークンを格納したファイル
    pub credential: PathBuf,
}

impl Pipeline {
    /// レシピファイルの実際のパス（コンテキスト基準）
    pub fn recipe_path(&self) -> PathBuf {
        self.context.join(&self.recipe.path)
    }

    /// リモート側のリポジトリ名
    pub fn remote_repository(&self) -> &str {
        self.registry
            .repository
            .as_deref()
            .unwrap_or(&self.image.name)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            image: ImageSpec::default(),
            context: PathBuf::from(DEFAULT_CONTEXT),
            recipe: RecipeSpec::default(),
            registry: RegistrySpec::default(),
            credential: PathBuf::from(DEFAULT_CREDENTIAL_FILE),
        }
    }
}
