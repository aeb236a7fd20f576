//! Unit tests for domain entities

mod contact_tests;
