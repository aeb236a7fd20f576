//! Broadcast dispatch: send one body to many recipients and log the attempt
//!
//! - [`PhoneNormalizer`] adds the default country calling code where missing
//! - [`MessageProviderClient`] sends one message to one number
//! - [`BroadcastDispatcher`] walks the recipients sequentially, in order
//! - [`BroadcastRecorder`] stores one record per broadcast
//! - [`BroadcastService`] ties the steps together for callers

mod dispatcher;
mod normalizer;
mod provider;
mod recorder;
mod service;

#[cfg(test)]
mod tests;

pub use dispatcher::BroadcastDispatcher;
pub use normalizer::PhoneNormalizer;
pub use provider::MessageProviderClient;
pub use recorder::BroadcastRecorder;
pub use service::BroadcastService;
