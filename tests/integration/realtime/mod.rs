//! Real-time integration tests over a live socket
