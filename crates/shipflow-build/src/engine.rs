//! Container engine abstraction

use crate::credential::Credential;
use crate::error::BuildResult;
use crate::reference::ImageRef;
use async_trait::async_trait;
use std::path::Path;

/// The container toolchain the pipeline drives.
///
/// Every call blocks until the underlying tool finishes. Failures surface as
/// `BuildError::ToolFailed` carrying the tool's own exit code; nothing is
/// retried here.
#[async_trait]
pub trait ContainerEngine: Send + Sync {
    /// Program name recorded in the stage logs
    fn name(&self) -> &str;

    /// Build `context` with the recipe at `recipe` and tag the result as `image`
    async fn build(&self, context: &Path, recipe: &Path, image: &ImageRef) -> BuildResult<()>;

    /// Log in to `registry`; the secret must travel over stdin only
    async fn login(&self, registry: &str, username: &str, credential: &Credential)
    -> BuildResult<()>;

    /// Create `target` as an alias of the local image `source`
    async fn tag(&self, source: &ImageRef, target: &ImageRef) -> BuildResult<()>;

    async fn push(&self, image: &ImageRef) -> BuildResult<()>;

    /// Image ID in the local store, or `None` if the reference does not exist
    async fn image_id(&self, image: &ImageRef) -> BuildResult<Option<String>>;
}
