//! Request bodies accepted by the HTTP routes

pub mod contact;
pub mod sms;

pub use contact::ContactRequest;
pub use sms::{SendSmsRequest, MAX_MESSAGE_LENGTH};
