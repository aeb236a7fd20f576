//! Messaging provider seam

use async_trait::async_trait;

use crate::errors::ProviderError;

/// Sends a single SMS through an external provider
///
/// Implementations make exactly one attempt per call. Every rejection
/// (invalid number, bad credentials, quota, network) is reported as a
/// [`ProviderError`] carrying the provider's text.
#[async_trait]
pub trait MessageProviderClient: Send + Sync {
    /// Send `body` to an already normalized number
    ///
    /// # Returns
    /// * `Ok(message_id)` - Identifier assigned by the provider
    /// * `Err(ProviderError)` - The provider refused or could not be reached
    async fn send(&self, body: &str, to: &str) -> Result<String, ProviderError>;

    /// Name of the provider, for logs and health output
    fn provider_name(&self) -> &str;

    /// Whether the provider is expected to accept requests
    async fn is_available(&self) -> bool {
        true
    }
}
