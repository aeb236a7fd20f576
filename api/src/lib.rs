//! HTTP surface of the SchoolCast portal
//!
//! Library exports are used by the binary and by the integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::{AppState, StoreBackend};
