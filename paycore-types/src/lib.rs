//! # Paycore Types
//!
//! Domain types and port traits for the payment core.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Payment, User)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Error types shared across all layers

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Payment, PaymentId, User, UserId, UserStatus};
pub use dto::*;
pub use error::PaymentError;
pub use ports::{PaymentRepository, UserRepository, ValidationService};
