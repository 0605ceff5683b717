//! レジストリ認証トークン
//!
//! ファイルの中身をそのまま秘密情報として扱います。末尾の改行や空白も
//! 含めて一切加工せず、ログや Debug 出力にも出しません。

use crate::error::{BuildError, BuildResult};
use std::path::Path;

/// ファイルから読み込んだ bearer トークン
pub struct Credential {
    secret: Vec<u8>,
}

impl Credential {
    /// ファイルを生のバイト列として読み込む
    pub async fn read_from(path: &Path) -> BuildResult<Self> {
        match tokio::fs::read(path).await {
            Ok(secret) => {
                tracing::debug!("Read credential file: {} ({} bytes)", path.display(), secret.len());
                Ok(Self { secret })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BuildError::CredentialNotFound(path.to_path_buf()))
            }
            Err(source) => Err(BuildError::CredentialRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_bytes(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// エンジンの stdin に渡すバイト列
    pub fn expose_secret(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
