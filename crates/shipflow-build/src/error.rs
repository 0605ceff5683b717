use std::path::PathBuf;
use thiserror::Error;

/// パイプライン中のエンジン呼び出し
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Build,
    Login,
    Tag,
    Push,
    Inspect,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Build => write!(f, "build"),
            Step::Login => write!(f, "login"),
            Step::Tag => write!(f, "tag"),
            Step::Push => write!(f, "push"),
            Step::Inspect => write!(f, "inspect"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Dockerfile not found: {0}")]
    RecipeNotFound(PathBuf),

    #[error("Build context directory not found: {0}")]
    ContextNotFound(PathBuf),

    #[error("Credential file not found: {0}")]
    CredentialNotFound(PathBuf),

    #[error("Failed to read credential file {path}: {source}")]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run container engine '{program}': {source}")]
    EngineUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {step} failed{}", exit_suffix(.code))]
    ToolFailed {
        step: Step,
        program: String,
        code: Option<i32>,
    },

    #[error("Invalid image reference: {0}")]
    InvalidReference(String),

    #[error("Invalid tag: {tag}")]
    InvalidTag { tag: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// エンジンの終了コード（そのまま呼び出し元に返す）
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            BuildError::ToolFailed { code, .. } => *code,
            _ => None,
        }
    }

    /// ユーザー向けの分かりやすいエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            BuildError::RecipeNotFound(path) => {
                format!(
                    "Dockerfileが見つかりません: {}\n\
                     \n\
                     解決方法:\n\
                     1. ソースツリーを clone 済みか確認してください\n\
                     2. ship.kdl で生成モードに切り替えてください:\n\
                        recipe \"Dockerfile\" mode=\"generate\"",
                    path.display()
                )
            }
            BuildError::CredentialNotFound(path) => {
                format!(
                    "認証トークンのファイルが見つかりません: {}\n\
                     \n\
                     レジストリのトークンをこのファイルに保存するか、\n\
                     --credential / SHIP_CREDENTIAL_FILE で場所を指定してください。",
                    path.display()
                )
            }
            BuildError::ContextNotFound(path) => {
                format!(
                    "ビルドコンテキストが見つかりません: {}\n\
                     \n\
                     ship.kdl の context パスを確認してください。",
                    path.display()
                )
            }
            BuildError::EngineUnavailable { program, .. } => {
                format!(
                    "コンテナエンジン '{}' を実行できません: {}\n\
                     \n\
                     インストール済みか、--engine / SHIP_ENGINE の指定を確認してください。",
                    program, self
                )
            }
            _ => format!("{}", self),
        }
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" (exit code {})", c))
        .unwrap_or_default()
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;
