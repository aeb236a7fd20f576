pub mod contact;
pub mod message;

pub use contact::{ContactRepository, InMemoryContactRepository};
pub use message::{InMemoryMessageRepository, MessageRepository};
