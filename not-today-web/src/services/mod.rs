//! Browser-facing services: the alert-backed notification sink and scoped timers

pub mod notify;
pub mod timers;
