//! Tests for the in-memory message repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::message::Message;
use crate::repositories::message::{InMemoryMessageRepository, MessageRepository};

#[tokio::test]
async fn test_create_and_find_scoped_by_school() {
    let repo = InMemoryMessageRepository::new();
    let school = Uuid::new_v4();
    let stored = repo.create(Message::new("PTA meeting at 5", school, None)).await.unwrap();

    assert_eq!(repo.find_by_id(school, stored.id).await.unwrap(), Some(stored.clone()));
    assert!(repo.find_by_id(Uuid::new_v4(), stored.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_recent_newest_first_with_limit() {
    let repo = InMemoryMessageRepository::new();
    let school = Uuid::new_v4();
    let base = Utc::now();

    for i in 0..5 {
        let mut message = Message::new(format!("notice {}", i), school, None);
        message.created_at = base + Duration::seconds(i);
        repo.create(message).await.unwrap();
    }
    repo.create(Message::new("elsewhere", Uuid::new_v4(), None)).await.unwrap();

    let recent = repo.list_recent(school, 3).await.unwrap();
    let texts: Vec<&str> = recent.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["notice 4", "notice 3", "notice 2"]);

    assert_eq!(repo.count_by_school(school).await.unwrap(), 5);
    assert_eq!(repo.latest(school).await.unwrap().unwrap().text, "notice 4");
    assert!(repo.latest(Uuid::new_v4()).await.unwrap().is_none());
}
