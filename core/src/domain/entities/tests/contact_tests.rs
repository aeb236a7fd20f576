//! Unit tests for contact entity

use uuid::Uuid;

use crate::domain::entities::contact::{Contact, ContactUpdate, NewContact};

fn new_contact(name: &str, phone: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        phone: phone.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_new_contact_creation() {
    let school_id = Uuid::new_v4();
    let contact = Contact::new(school_id, new_contact("Asha", "9876543210"));

    assert_eq!(contact.name, "Asha");
    assert_eq!(contact.phone, "9876543210");
    assert_eq!(contact.school_id, school_id);
    assert!(contact.email.is_none());
    assert_eq!(contact.created_at, contact.updated_at);
    assert!(contact.belongs_to(school_id));
    assert!(!contact.belongs_to(Uuid::new_v4()));
}

#[test]
fn test_apply_update_replaces_fields() {
    let mut contact = Contact::new(Uuid::new_v4(), NewContact {
        email: Some("old@school.edu".to_string()),
        ..new_contact("Asha", "9876543210")
    });
    let id = contact.id;
    let created_at = contact.created_at;

    contact.apply_update(ContactUpdate {
        grade: Some("7".to_string()),
        section: Some("B".to_string()),
        ..new_contact("Asha K", "+919876543210")
    });

    assert_eq!(contact.id, id);
    assert_eq!(contact.created_at, created_at);
    assert_eq!(contact.name, "Asha K");
    assert_eq!(contact.phone, "+919876543210");
    assert_eq!(contact.email, None);
    assert_eq!(contact.grade.as_deref(), Some("7"));
    assert!(contact.updated_at >= created_at);
}

#[test]
fn test_new_contact_deserializes_without_optional_fields() {
    let fields: NewContact = serde_json::from_str(r#"{"name":"Ravi","phone":"5551234"}"#).unwrap();
    assert_eq!(fields, new_contact("Ravi", "5551234"));
}
