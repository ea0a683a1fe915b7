//! # Paycore Repo
//!
//! Concrete repository implementations (adapters) for the payment core.
//! Today that is a single memory-resident adapter implementing the
//! `PaymentRepository` port; nothing here survives the process.

pub mod in_memory;


pub use in_memory::InMemPaymentRepository;
