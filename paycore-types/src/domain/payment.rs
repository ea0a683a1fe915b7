//! Payment domain model.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A payment attributed to a user.
///
/// The id and amount are fixed at creation. The message is the only
/// attribute that changes over a payment's life, and it changes by
/// replacement: [`Payment::with_message`] produces a new value with the
/// same identity, so a caller's retained copy never mutates underneath it.
///
/// Two payments are the same entity iff their `payment_id` values match;
/// equality and hashing deliberately ignore every other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier, generated at construction
    pub payment_id: PaymentId,
    /// Owning user (weak reference, not checked against the user store)
    pub user_id: UserId,
    /// Positive amount, fixed at creation
    pub amount: f64,
    /// Free-text message
    pub message: String,
}

impl Payment {
    /// Creates a new payment with a freshly generated id.
    pub fn new(user_id: UserId, amount: f64, message: impl Into<String>) -> Self {
        Self {
            payment_id: PaymentId::new(),
            user_id,
            amount,
            message: message.into(),
        }
    }

    /// Reconstructs a payment with all fields specified.
    pub fn from_parts(
        payment_id: PaymentId,
        user_id: UserId,
        amount: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            payment_id,
            user_id,
            amount,
            message: message.into(),
        }
    }

    /// Returns a copy of this payment carrying a replacement message.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            payment_id: self.payment_id,
            user_id: self.user_id,
            amount: self.amount,
            message: message.into(),
        }
    }
}

// Identity-only equality: the id alone decides whether two values are the
// same payment.
impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        self.payment_id == other.payment_id
    }
}

impl Eq for Payment {}

impl Hash for Payment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.payment_id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_creation() {
        let payment = Payment::new(UserId::new(1), 50.0, "Payment from user u1");

        assert_eq!(payment.user_id, UserId::new(1));
        assert_eq!(payment.amount, 50.0);
        assert_eq!(payment.message, "Payment from user u1");
    }

    #[test]
    fn test_fresh_ids_differ() {
        let a = Payment::new(UserId::new(1), 10.0, "a");
        let b = Payment::new(UserId::new(1), 10.0, "a");

        assert_ne!(a.payment_id, b.payment_id);
    }

    #[test]
    fn test_equality_ignores_amount_and_message() {
        let original = Payment::new(UserId::new(1), 96.0, "Thanks for the purse.");
        let twin = Payment::from_parts(
            original.payment_id,
            UserId::new(2),
            500.0,
            "Entirely different",
        );

        assert_eq!(original, twin);
    }

    #[test]
    fn test_equality_requires_matching_id() {
        let a = Payment::new(UserId::new(1), 96.0, "same");
        let b = Payment::new(UserId::new(1), 96.0, "same");

        assert_ne!(a, b);
    }

    #[test]
    fn test_with_message_keeps_identity() {
        let original = Payment::new(UserId::new(3), 85.0, "Thanks for nothing.");
        let edited = original.with_message("Never again.");

        assert_eq!(edited.payment_id, original.payment_id);
        assert_eq!(edited.user_id, original.user_id);
        assert_eq!(edited.amount, original.amount);
        assert_eq!(edited.message, "Never again.");
        assert_eq!(original.message, "Thanks for nothing.");
    }

    #[test]
    fn test_payment_id_serializes_transparently() {
        let id = PaymentId::new();
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, format!("\"{}\"", id));
    }
}
