//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into planner-level use cases.
//! - Hold caller policy (such as the minimum member count for analysis)
//!   outside the pure scoring core.

pub mod analysis_service;
pub mod group_service;
