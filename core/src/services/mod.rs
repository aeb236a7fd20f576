//! Business services containing domain logic and use cases.

pub mod broadcast;
pub mod contact;
pub mod dashboard;
pub mod history;

// Re-export commonly used types
pub use broadcast::{
    BroadcastDispatcher, BroadcastRecorder, BroadcastService, MessageProviderClient,
    PhoneNormalizer,
};
pub use contact::ContactService;
pub use dashboard::DashboardService;
pub use history::MessageHistoryService;
