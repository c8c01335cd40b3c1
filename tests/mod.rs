//! Test suite for Chatline
//!
//! This module organizes all integration and property tests

pub mod common;
pub mod integration;
