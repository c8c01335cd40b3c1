//! API integration tests
//!
//! Integration tests for all REST endpoints

mod auth_test;
mod messages_test;
