//! レジストリ定義

use serde::{Deserialize, Serialize};

pub const DEFAULT_REGISTRY_HOST: &str = "ghcr.io";
pub const DEFAULT_REGISTRY_NAMESPACE: &str = "movesny";

/// プッシュ先のコンテナレジストリ
///
/// KDL形式：
/// ```kdl
/// registry "ghcr.io" namespace="movesny" username="movesny" repository="mcp-azure-devops"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySpec {
    /// レジストリホスト（例: ghcr.io, localhost:5000）
    pub host: String,
    /// 名前空間（ユーザー名や組織名）
    pub namespace: String,
    /// ログインユーザー名（省略時は namespace）
    pub username: Option<String>,
    /// リモートのリポジトリ名（省略時はローカルのイメージ名）
    pub repository: Option<String>,
}

impl RegistrySpec {
    pub fn login_user(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.namespace)
    }
}

impl Default for RegistrySpec {
    fn default() -> Self {
        Self {
            host: DEFAULT_REGISTRY_HOST.to_string(),
            namespace: DEFAULT_REGISTRY_NAMESPACE.to_string(),
            username: None,
            repository: None,
        }
    }
}
