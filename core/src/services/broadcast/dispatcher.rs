//! Sequential fan-out over the recipient list

use std::sync::Arc;

use sc_shared::phone::mask_phone_number;
use sc_shared::validation::not_empty;

use crate::domain::entities::dispatch::{BroadcastSummary, DispatchResult};
use crate::errors::{DomainResult, ValidationError};

use super::normalizer::PhoneNormalizer;
use super::provider::MessageProviderClient;

/// Sends one body to many recipients, one provider call at a time
///
/// Recipients are processed strictly in input order and each call is awaited
/// before the next starts, so the returned results line up index for index
/// with the input. A failing recipient is recorded and the loop moves on;
/// nothing is retried. There is no timeout here: a hung provider call stalls
/// the rest of the batch.
pub struct BroadcastDispatcher<P: MessageProviderClient + ?Sized> {
    provider: Arc<P>,
    normalizer: PhoneNormalizer,
}

impl<P: MessageProviderClient + ?Sized> BroadcastDispatcher<P> {
    pub fn new(provider: Arc<P>, normalizer: PhoneNormalizer) -> Self {
        Self { provider, normalizer }
    }

    pub fn normalizer(&self) -> &PhoneNormalizer {
        &self.normalizer
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// Reject an empty body or an empty recipient list
    pub fn validate(body: &str, recipients: &[String]) -> DomainResult<()> {
        if !not_empty(body) {
            return Err(ValidationError::RequiredField {
                field: "message".to_string(),
            }
            .into());
        }
        if recipients.is_empty() {
            return Err(ValidationError::EmptyRecipients.into());
        }
        Ok(())
    }

    /// Send `body` to every recipient
    ///
    /// # Returns
    /// * `Ok(results)` - One entry per recipient, in input order, whatever
    ///   the individual outcomes
    /// * `Err(DomainError::ValidationErr)` - Empty body or no recipients; no
    ///   provider call was made
    pub async fn dispatch(&self, body: &str, recipients: &[String]) -> DomainResult<Vec<DispatchResult>> {
        Self::validate(body, recipients)?;

        tracing::info!(
            provider = self.provider.provider_name(),
            recipients = recipients.len(),
            body_length = body.chars().count(),
            event = "broadcast_dispatch_started",
            "Dispatching broadcast"
        );

        let mut results = Vec::with_capacity(recipients.len());
        for recipient in recipients {
            let normalized = self.normalizer.normalize(recipient);
            match self.provider.send(body, &normalized).await {
                Ok(message_id) => {
                    tracing::debug!(
                        to = %mask_phone_number(&normalized),
                        message_id = %message_id,
                        "Message accepted by provider"
                    );
                    results.push(DispatchResult::sent(recipient.as_str(), normalized, message_id));
                }
                Err(e) => {
                    tracing::warn!(
                        to = %mask_phone_number(&normalized),
                        error = %e,
                        event = "broadcast_recipient_failed",
                        "Failed to send message to recipient"
                    );
                    results.push(DispatchResult::failed(recipient.as_str(), normalized, e.message));
                }
            }
        }

        let summary = BroadcastSummary::from_results(&results);
        tracing::info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            event = "broadcast_dispatch_finished",
            "Broadcast dispatch finished"
        );

        Ok(results)
    }
}
