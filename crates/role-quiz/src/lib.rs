//! Role-affinity quiz library: a deterministic scoring engine with the
//! validation, persistence, and HTTP plumbing a quiz service needs around it.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
