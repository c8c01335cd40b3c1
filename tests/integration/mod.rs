//! Integration tests against the assembled router

mod api;
mod realtime;
