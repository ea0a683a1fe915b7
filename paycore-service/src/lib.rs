//! # Paycore Service
//!
//! Application service layer for the payment core.
//!
//! ## Architecture
//!
//! - `validation/` - Stateless input and policy checks
//! - `service/` - Orchestrator composing validation, user lookup, and storage
//!
//! The service is generic over its three injected ports, allowing
//! different implementations (in-memory, mocked, future durable stores)
//! to be swapped without touching orchestration logic.

pub mod service;
pub mod validation;


pub use service::PaymentService;
pub use validation::BasicValidationService;
