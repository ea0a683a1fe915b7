//! Repository port traits.
//!
//! These are the primary ports in our hexagonal architecture.
//! Adapters (in-memory today, anything durable tomorrow) implement them.
//!
//! Identifiers and payloads that a caller can fail to supply arrive as
//! `Option`; each operation states how it treats absence. Note the
//! asymmetry between `find_by_id` (absent id is a precondition violation)
//! and `edit_message` (absent id is treated as a record that does not
//! exist) - both behaviors are part of the contract.

use crate::domain::{Payment, PaymentId, User, UserId};
use crate::error::PaymentError;

/// The storage port for payments, keyed by payment id.
///
/// The repository owns the authoritative copy of every stored payment.
/// At most one payment per id exists at all times; `save` is insert-only.
pub trait PaymentRepository: Send + Sync {
    /// Looks up a payment by id.
    ///
    /// Returns `Ok(None)` when no payment with that id exists. Fails with
    /// `InvalidArgument` when the id itself is absent - a precondition
    /// violation distinct from "not found".
    fn find_by_id(&self, id: Option<PaymentId>) -> Result<Option<Payment>, PaymentError>;

    /// Returns all stored payments, in repository iteration order.
    fn find_all(&self) -> Result<Vec<Payment>, PaymentError>;

    /// Stores a new payment and returns it.
    ///
    /// Fails with `InvalidArgument` when the payment is absent, or when a
    /// payment with the same id is already stored (no implicit upsert).
    fn save(&self, payment: Option<Payment>) -> Result<Payment, PaymentError>;

    /// Replaces the stored message for the payment with the given id and
    /// returns the updated payment.
    ///
    /// Fails with `NotFound` when no payment with that id exists -
    /// including when the id is absent, which this operation treats
    /// uniformly as "record absent" rather than as a precondition check.
    fn edit_message(
        &self,
        id: Option<PaymentId>,
        new_message: &str,
    ) -> Result<Payment, PaymentError>;
}

/// Read-only lookup into the external user store.
pub trait UserRepository: Send + Sync {
    /// Looks up a user by id; `Ok(None)` when no such user exists.
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, PaymentError>;
}
