//! Validation port.

use crate::domain::{PaymentId, User, UserId};
use crate::error::PaymentError;

/// Stateless precondition and policy checks, performed before any mutation.
///
/// Each operation inspects exactly the single argument it names and either
/// completes silently or fails with `InvalidArgument` carrying a reason.
pub trait ValidationService: Send + Sync {
    /// Passes iff the amount is present and greater than zero.
    fn validate_amount(&self, amount: Option<f64>) -> Result<(), PaymentError>;

    /// Passes iff the payment id is present.
    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<(), PaymentError>;

    /// Passes iff the user id is present.
    fn validate_user_id(&self, id: Option<UserId>) -> Result<(), PaymentError>;

    /// Passes iff the user is in ACTIVE status. Callers guarantee the user
    /// exists before invoking this check.
    fn validate_user(&self, user: &User) -> Result<(), PaymentError>;

    /// Passes iff the message is present; the empty string is valid.
    fn validate_message(&self, message: Option<&str>) -> Result<(), PaymentError>;
}
