//! ローカルイメージ定義

use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_NAME: &str = "mcp-azure-devops";
pub const DEFAULT_IMAGE_TAG: &str = "latest";

/// ビルドするローカルイメージ
///
/// KDL形式：
/// ```kdl
/// image "mcp-azure-devops" tag="latest"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub name: String,
    pub tag: String,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            name: DEFAULT_IMAGE_NAME.to_string(),
            tag: DEFAULT_IMAGE_TAG.to_string(),
        }
    }
}
