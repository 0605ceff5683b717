//! ビルドレシピ（Dockerfile）定義

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_RECIPE_PATH: &str = "Dockerfile";
pub const DEFAULT_BASE_IMAGE: &str = "python:3.12-slim";
pub const DEFAULT_WORKDIR: &str = "/app";
pub const DEFAULT_INSTALL: &str = "pip install --no-cache-dir .";
pub const DEFAULT_COMMAND: &str = "mcp-azure-devops";

/// 実行時に上書きされる環境変数（値は空のまま宣言する）
pub const DEFAULT_RUNTIME_ENV: [&str; 2] = ["AZURE_DEVOPS_PAT", "AZURE_DEVOPS_ORGANIZATION_URL"];

/// レシピの供給方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeMode {
    /// テンプレートから生成して書き出す（既存ファイルは上書き）
    #[default]
    Generate,
    /// ソースツリーに同梱されたものをそのまま使う
    Provided,
}

impl RecipeMode {
    /// 文字列からパース
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "generate" | "generated" => Some(Self::Generate),
            "provided" | "existing" => Some(Self::Provided),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecipeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeMode::Generate => write!(f, "generate"),
            RecipeMode::Provided => write!(f, "provided"),
        }
    }
}

/// ビルドレシピ
///
/// KDL形式：
/// ```kdl
/// recipe "Dockerfile" mode="generate" {
///     base "python:3.12-slim"
///     workdir "/app"
///     install "pip install --no-cache-dir ."
///     command "mcp-azure-devops"
///     env "AZURE_DEVOPS_PAT" "AZURE_DEVOPS_ORGANIZATION_URL"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSpec {
    /// コンテキストディレクトリからの相対パス
    pub path: PathBuf,
    pub mode: RecipeMode,
    pub base: String,
    pub workdir: String,
    pub install: String,
    /// CMD に渡す引数列
    pub command: Vec<String>,
    /// 空の値で宣言する環境変数名
    pub env: Vec<String>,
}

impl Default for RecipeSpec {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RECIPE_PATH),
            mode: RecipeMode::default(),
            base: DEFAULT_BASE_IMAGE.to_string(),
            workdir: DEFAULT_WORKDIR.to_string(),
            install: DEFAULT_INSTALL.to_string(),
            command: vec![DEFAULT_COMMAND.to_string()],
            env: DEFAULT_RUNTIME_ENV.iter().map(|s| s.to_string()).collect(),
        }
    }
}
