use async_trait::async_trait;

use crate::project::ProjectDescriptor;

/// Best-effort prompt enrichment.
///
/// `enhance` cannot fail: an implementation that hits an error hands back
/// `base_prompt` unchanged.
#[async_trait]
pub trait Enhancer: Send + Sync {
    fn is_configured(&self) -> bool;

    async fn enhance(&self, descriptor: &ProjectDescriptor, base_prompt: &str) -> String;
}
