//! registry ノードのパース

use super::{property, required_arg};
use crate::error::Result;
use crate::model::RegistrySpec;
use kdl::KdlNode;

/// registry ノードをパース
///
/// 子ノード形式（`registry "ghcr.io" { namespace "movesny" }`）も受け付ける
pub fn parse_registry(node: &KdlNode, registry: &mut RegistrySpec) -> Result<()> {
    registry.host = required_arg(node)?.to_string();

    if let Some(namespace) = property(node, "namespace") {
        registry.namespace = namespace.to_string();
    }
    if let Some(username) = property(node, "username") {
        registry.username = Some(username.to_string());
    }
    if let Some(repository) = property(node, "repository") {
        registry.repository = Some(repository.to_string());
    }

    if let Some(children) = node.children() {
        for child in children.nodes() {
            let value = required_arg(child)?.to_string();
            match child.name().value() {
                "namespace" => registry.namespace = value,
                "username" => registry.username = Some(value),
                "repository" => registry.repository = Some(value),
                other => tracing::warn!("Unknown registry field: {}", other),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_registry_children() {
        let kdl = r#"
            registry "localhost:5000" {
                namespace "dev"
                username "ci"
            }
        "#;
        let doc: kdl::KdlDocument = kdl.parse().unwrap();
        let node = doc.nodes().first().unwrap();

        let mut registry = RegistrySpec::default();
        parse_registry(node, &mut registry).unwrap();

        assert_eq!(registry.host, "localhost:5000");
        assert_eq!(registry.namespace, "dev");
        assert_eq!(registry.login_user(), "ci");
        assert_eq!(registry.repository, None);
    }

    #[test]
    fn test_login_user_falls_back_to_namespace() {
        let doc: kdl::KdlDocument = r#"registry "ghcr.io" namespace="acme""#.parse().unwrap();
        let node = doc.nodes().first().unwrap();

        let mut registry = RegistrySpec::default();
        parse_registry(node, &mut registry).unwrap();

        assert_eq!(registry.login_user(), "acme");
    }
}
