//! イメージのパブリッシュ
//!
//! ローカルイメージをレジストリ名で再タグ付けしてプッシュします。
//! 手順は login → tag → push の順に固定で、途中で失敗したらそこで止まります。
//! ロールバックはせず、再実行で回復する前提です。

use crate::credential::Credential;
use crate::engine::ContainerEngine;
use crate::error::BuildResult;
use crate::reference::{ImageRef, local_image, remote_image};
use shipflow_core::Pipeline;
use std::path::Path;

/// パブリッシュステージ
pub struct ImagePublisher<'a> {
    engine: &'a dyn ContainerEngine,
}

impl<'a> ImagePublisher<'a> {
    pub fn new(engine: &'a dyn ContainerEngine) -> Self {
        Self { engine }
    }

    /// イメージをレジストリにプッシュ
    ///
    /// # Returns
    /// プッシュしたリモート参照
    pub async fn publish(&self, pipeline: &Pipeline, root: &Path) -> BuildResult<ImageRef> {
        let local = local_image(pipeline)?;
        let remote = remote_image(pipeline)?;

        // 認証情報が読めなければエンジンは一切呼ばない
        let credential = Credential::read_from(&root.join(&pipeline.credential)).await?;

        let registry = &pipeline.registry.host;
        tracing::info!(
            engine = self.engine.name(),
            "Logging in to {} as {}",
            registry,
            pipeline.registry.login_user()
        );
        self.engine
            .login(registry, pipeline.registry.login_user(), &credential)
            .await?;
        drop(credential);

        tracing::info!("Tagging {} as {}", local, remote);
        self.engine.tag(&local, &remote).await?;

        tracing::info!("Pushing {}", remote);
        self.engine.push(&remote).await?;

        Ok(remote)
    }
}
