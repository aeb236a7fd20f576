//! Broadcast history

mod service;

pub use service::MessageHistoryService;
