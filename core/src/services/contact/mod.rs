//! Contact management for a school's messaging list

mod service;


pub use service::ContactService;
