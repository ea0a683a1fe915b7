//! Data Transfer Objects (DTOs) for requests.
//!
//! Fields a caller might omit are `Option`: a missing field in the payload
//! deserializes to `None` and is rejected by the validation layer, rather
//! than failing opaquely at the deserialization boundary.

use serde::{Deserialize, Serialize};

use crate::domain::{PaymentId, UserId};

/// Request to create a payment for a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Id of the owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Payment amount, must be positive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// Request to replace a payment's message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditMessageRequest {
    /// Id of the payment to edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    /// Replacement message; the empty string is a valid message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let req: CreatePaymentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.user_id.is_none());
        assert!(req.amount.is_none());

        let req: EditMessageRequest = serde_json::from_str("{\"message\":\"\"}").unwrap();
        assert!(req.payment_id.is_none());
        assert_eq!(req.message.as_deref(), Some(""));
    }

    #[test]
    fn test_create_request_round_trip() {
        let req: CreatePaymentRequest =
            serde_json::from_str("{\"user_id\":1,\"amount\":50.0}").unwrap();
        assert_eq!(req.user_id, Some(UserId::new(1)));
        assert_eq!(req.amount, Some(50.0));
    }
}
