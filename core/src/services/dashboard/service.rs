//! Dashboard figures for a school

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::stats::DashboardStats;
use crate::errors::DomainResult;
use crate::repositories::{ContactRepository, MessageRepository};

pub struct DashboardService<C, M>
where
    C: ContactRepository + ?Sized,
    M: MessageRepository + ?Sized,
{
    contacts: Arc<C>,
    messages: Arc<M>,
}

impl<C, M> DashboardService<C, M>
where
    C: ContactRepository + ?Sized,
    M: MessageRepository + ?Sized,
{
    pub fn new(contacts: Arc<C>, messages: Arc<M>) -> Self {
        Self { contacts, messages }
    }

    /// Contact count, broadcast count and time of the latest broadcast
    pub async fn stats(&self, school_id: Uuid) -> DomainResult<DashboardStats> {
        let total_contacts = self.contacts.count_by_school(school_id).await?;
        let total_messages = self.messages.count_by_school(school_id).await?;
        let last_message_time = self.messages.latest(school_id).await?.map(|m| m.created_at);

        Ok(DashboardStats {
            total_contacts,
            total_messages,
            last_message_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::contact::{Contact, NewContact};
    use crate::domain::entities::message::Message;
    use crate::repositories::{InMemoryContactRepository, InMemoryMessageRepository};

    #[tokio::test]
    async fn test_stats_for_empty_school() {
        let svc = DashboardService::new(
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
        );

        let stats = svc.stats(Uuid::new_v4()).await.unwrap();
        assert_eq!(stats.total_contacts, 0);
        assert_eq!(stats.total_messages, 0);
        assert_eq!(stats.last_message_time, None);
    }

    #[tokio::test]
    async fn test_stats_reflect_counts_and_latest_broadcast() {
        let contacts = Arc::new(InMemoryContactRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        let svc = DashboardService::new(contacts.clone(), messages.clone());
        let school = Uuid::new_v4();

        for phone in ["5551", "5552", "5553"] {
            contacts
                .create(Contact::new(
                    school,
                    NewContact {
                        name: "Parent".to_string(),
                        phone: phone.to_string(),
                        ..Default::default()
                    },
                ))
                .await
                .unwrap();
        }
        messages.create(Message::new("first", school, None)).await.unwrap();
        let last = messages.create(Message::new("second", school, None)).await.unwrap();
        messages.create(Message::new("elsewhere", Uuid::new_v4(), None)).await.unwrap();

        let stats = svc.stats(school).await.unwrap();
        assert_eq!(stats.total_contacts, 3);
        assert_eq!(stats.total_messages, 2);
        assert_eq!(stats.last_message_time, Some(last.created_at));
    }
}
