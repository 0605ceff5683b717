//! ローカルイメージストアの状態確認

use crate::engine::ContainerEngine;
use crate::error::BuildResult;
use crate::reference::{ImageRef, local_image, remote_image};
use shipflow_core::Pipeline;

/// ローカル参照とリモート参照それぞれのイメージID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStatus {
    pub local: ImageRef,
    pub local_id: Option<String>,
    pub remote: ImageRef,
    pub remote_id: Option<String>,
}

impl ImageStatus {
    /// リモート参照がローカルイメージと同じものを指しているか
    pub fn is_tagged(&self) -> bool {
        matches!((&self.local_id, &self.remote_id), (Some(l), Some(r)) if l == r)
    }
}

/// 両方の参照をエンジンに問い合わせる
pub async fn inspect_images(
    engine: &dyn ContainerEngine,
    pipeline: &Pipeline,
) -> BuildResult<ImageStatus> {
    let local = local_image(pipeline)?;
    let remote = remote_image(pipeline)?;

    let local_id = engine.image_id(&local).await?;
    let remote_id = engine.image_id(&remote).await?;

    Ok(ImageStatus {
        local,
        local_id,
        remote,
        remote_id,
    })
}
