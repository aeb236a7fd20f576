//! Broadcast use case: validate, dispatch, then record

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::dispatch::BroadcastReport;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{ContactRepository, MessageRepository};

use super::dispatcher::BroadcastDispatcher;
use super::provider::MessageProviderClient;
use super::recorder::BroadcastRecorder;

/// Broadcast service used by the HTTP layer
///
/// Both steps always run once validation passes: every recipient is
/// attempted, then the broadcast is recorded. A recording failure does not
/// undo sends; it is returned as [`DomainError::BroadcastNotRecorded`]
/// carrying the per-recipient results.
pub struct BroadcastService<P, M, C>
where
    P: MessageProviderClient + ?Sized,
    M: MessageRepository + ?Sized,
    C: ContactRepository + ?Sized,
{
    dispatcher: BroadcastDispatcher<P>,
    recorder: BroadcastRecorder<M>,
    contacts: Arc<C>,
}

impl<P, M, C> BroadcastService<P, M, C>
where
    P: MessageProviderClient + ?Sized,
    M: MessageRepository + ?Sized,
    C: ContactRepository + ?Sized,
{
    pub fn new(dispatcher: BroadcastDispatcher<P>, recorder: BroadcastRecorder<M>, contacts: Arc<C>) -> Self {
        Self {
            dispatcher,
            recorder,
            contacts,
        }
    }

    pub fn dispatcher(&self) -> &BroadcastDispatcher<P> {
        &self.dispatcher
    }

    /// Send `body` to an explicit recipient list and record the broadcast
    ///
    /// # Returns
    /// * `Ok(BroadcastReport)` - Record id, summary and per-recipient results
    /// * `Err(DomainError::ValidationErr)` - Empty body or recipients; nothing
    ///   was sent or recorded
    /// * `Err(DomainError::BroadcastNotRecorded)` - Sends happened but the
    ///   record could not be stored
    pub async fn send_broadcast(
        &self,
        body: &str,
        recipients: &[String],
        school_id: Uuid,
        sent_by: Option<Uuid>,
    ) -> DomainResult<BroadcastReport> {
        let results = self.dispatcher.dispatch(body, recipients).await?;

        match self.recorder.record(body, school_id, sent_by).await {
            Ok(message_id) => Ok(BroadcastReport::new(message_id, results)),
            Err(e) => {
                tracing::error!(
                    school_id = %school_id,
                    error = %e,
                    attempted = results.len(),
                    event = "broadcast_record_failed",
                    "Broadcast was dispatched but could not be recorded"
                );
                Err(DomainError::BroadcastNotRecorded {
                    reason: e.to_string(),
                    results,
                })
            }
        }
    }

    /// Send `body` to every contact of the school, in contact creation order
    pub async fn broadcast_to_contacts(
        &self,
        body: &str,
        school_id: Uuid,
        sent_by: Option<Uuid>,
    ) -> DomainResult<BroadcastReport> {
        let phones: Vec<String> = self
            .contacts
            .list_by_school(school_id)
            .await?
            .into_iter()
            .map(|c| c.phone)
            .collect();

        if phones.is_empty() {
            return Err(ValidationError::EmptyRecipients.into());
        }

        self.send_broadcast(body, &phones, school_id, sent_by).await
    }
}
