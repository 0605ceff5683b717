//! イメージ参照
//!
//! ローカルの `name:tag` とレジストリ修飾された
//! `{host}/{namespace}/{repository}:{tag}` を同じ型で扱います。

use crate::error::{BuildError, BuildResult};
use shipflow_core::Pipeline;

/// name + tag で識別されるイメージ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    name: String,
    tag: String,
}

impl ImageRef {
    /// 名前とタグを検証して作成
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> BuildResult<Self> {
        let name = name.into();
        let tag = tag.into();
        validate_name(&name)?;
        validate_tag(&tag)?;
        Ok(Self { name, tag })
    }

    /// レジストリ修飾された参照を組み立てる
    pub fn remote(host: &str, namespace: &str, repository: &str, tag: &str) -> BuildResult<Self> {
        let name = [host, namespace, repository]
            .iter()
            .map(|part| part.trim_matches('/'))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        Self::new(name, tag)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}

/// ビルドで付けるローカル参照（例: `mcp-azure-devops:latest`）
pub fn local_image(pipeline: &Pipeline) -> BuildResult<ImageRef> {
    ImageRef::new(pipeline.image.name.clone(), pipeline.image.tag.clone())
}

/// プッシュ先の参照（例: `ghcr.io/movesny/mcp-azure-devops:latest`）
pub fn remote_image(pipeline: &Pipeline) -> BuildResult<ImageRef> {
    ImageRef::remote(
        &pipeline.registry.host,
        &pipeline.registry.namespace,
        pipeline.remote_repository(),
        &pipeline.image.tag,
    )
}

fn validate_name(name: &str) -> BuildResult<()> {
    if name.is_empty() {
        return Err(BuildError::InvalidReference("(empty)".to_string()));
    }

    // リポジトリ部分は小文字のみ（ホスト部分のポートは許可）
    let repository = match name.split_once('/') {
        Some((host, rest)) if host.contains('.') || host.contains(':') => rest,
        _ => name,
    };

    if repository.is_empty() || repository.starts_with('/') || repository.ends_with('/') {
        return Err(BuildError::InvalidReference(name.to_string()));
    }

    let valid = repository.chars().all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_' | '/')
    });
    if !valid {
        return Err(BuildError::InvalidReference(name.to_string()));
    }

    Ok(())
}

/// タグのバリデーション
///
/// Docker タグの制約:
/// - 128文字以下
/// - 英数字、ピリオド、ハイフン、アンダースコアのみ
/// - 先頭はピリオドまたはハイフンではない
fn validate_tag(tag: &str) -> BuildResult<()> {
    if tag.is_empty() {
        return Err(BuildError::InvalidTag {
            tag: "(empty)".to_string(),
        });
    }

    if tag.len() > 128 {
        return Err(BuildError::InvalidTag {
            tag: format!("Tag too long ({} characters, max 128)", tag.len()),
        });
    }

    if tag.starts_with('.') || tag.starts_with('-') {
        return Err(BuildError::InvalidTag {
            tag: tag.to_string(),
        });
    }

    if let Some(c) = tag
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '.' | '-' | '_'))
    {
        return Err(BuildError::InvalidTag {
            tag: format!("Invalid character '{}' in tag: {}", c, tag),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_references() {
        let pipeline = Pipeline::default();
        assert_eq!(
            local_image(&pipeline).unwrap().to_string(),
            "mcp-azure-devops:latest"
        );
        assert_eq!(
            remote_image(&pipeline).unwrap().to_string(),
            "ghcr.io/movesny/mcp-azure-devops:latest"
        );
    }

    #[test]
    fn test_remote_trims_slashes() {
        let image = ImageRef::remote("ghcr.io/", "/movesny/", "mcp-azure-devops", "v2").unwrap();
        assert_eq!(image.to_string(), "ghcr.io/movesny/mcp-azure-devops:v2");
    }

    #[test]
    fn test_invalid_tags() {
        assert!(matches!(
            ImageRef::new("app", ""),
            Err(BuildError::InvalidTag { .. })
        ));
        assert!(ImageRef::new("app", "-dev").is_err());
        assert!(ImageRef::new("app", ".dev").is_err());
        assert!(ImageRef::new("app", "v1/2").is_err());
        assert!(ImageRef::new("app", "a".repeat(129)).is_err());
        assert!(ImageRef::new("app", "a".repeat(128)).is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(
            ImageRef::new("", "latest"),
            Err(BuildError::InvalidReference(_))
        ));
        assert!(ImageRef::new("MCP-Azure", "latest").is_err());
        assert!(ImageRef::new("ghcr.io/", "latest").is_err());
        assert!(ImageRef::new("my app", "latest").is_err());
        // ホスト部分のポートは許可
        assert!(ImageRef::new("localhost:5000/app", "latest").is_ok());
    }
}
