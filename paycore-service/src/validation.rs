//! Basic validation rules.

use paycore_types::{PaymentError, PaymentId, User, UserId, ValidationService};

/// Default implementation of the `ValidationService` port.
///
/// Holds no state; every check is a pure predicate over its one argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicValidationService;

impl BasicValidationService {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationService for BasicValidationService {
    fn validate_amount(&self, amount: Option<f64>) -> Result<(), PaymentError> {
        match amount {
            None => Err(PaymentError::invalid_argument("Amount must be provided")),
            Some(amount) if amount <= 0.0 => Err(PaymentError::invalid_argument(
                "Amount must be greater than 0",
            )),
            Some(_) => Ok(()),
        }
    }

    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<(), PaymentError> {
        id.map(|_| ())
            .ok_or_else(|| PaymentError::invalid_argument("Payment id must be provided"))
    }

    fn validate_user_id(&self, id: Option<UserId>) -> Result<(), PaymentError> {
        id.map(|_| ())
            .ok_or_else(|| PaymentError::invalid_argument("User id must be provided"))
    }

    fn validate_user(&self, user: &User) -> Result<(), PaymentError> {
        if user.is_active() {
            Ok(())
        } else {
            Err(PaymentError::invalid_argument(format!(
                "User with id {} not in ACTIVE status",
                user.id
            )))
        }
    }

    fn validate_message(&self, message: Option<&str>) -> Result<(), PaymentError> {
        message
            .map(|_| ())
            .ok_or_else(|| PaymentError::invalid_argument("Payment message must be provided"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paycore_types::UserStatus;

    #[test]
    fn test_validate_amount_missing() {
        let validation = BasicValidationService::new();

        let result = validation.validate_amount(None);

        assert!(matches!(result, Err(PaymentError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_amount_not_positive() {
        let validation = BasicValidationService::new();

        for amount in [-1.0, 0.0] {
            let result = validation.validate_amount(Some(amount));
            match result {
                Err(PaymentError::InvalidArgument(reason)) => {
                    assert_eq!(reason, "Amount must be greater than 0");
                }
                other => panic!("expected InvalidArgument for {amount}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_amount_positive() {
        let validation = BasicValidationService::new();

        assert!(validation.validate_amount(Some(100.0)).is_ok());
        assert!(validation.validate_amount(Some(0.01)).is_ok());
    }

    #[test]
    fn test_validate_payment_id() {
        let validation = BasicValidationService::new();

        assert!(matches!(
            validation.validate_payment_id(None),
            Err(PaymentError::InvalidArgument(_))
        ));
        assert!(validation.validate_payment_id(Some(PaymentId::new())).is_ok());
    }

    #[test]
    fn test_validate_user_id() {
        let validation = BasicValidationService::new();

        assert!(matches!(
            validation.validate_user_id(None),
            Err(PaymentError::InvalidArgument(_))
        ));
        assert!(validation.validate_user_id(Some(UserId::new(10))).is_ok());
    }

    #[test]
    fn test_validate_user_inactive() {
        let validation = BasicValidationService::new();
        let user = User::new(UserId::new(1), "", UserStatus::Inactive);

        match validation.validate_user(&user) {
            Err(PaymentError::InvalidArgument(reason)) => {
                assert_eq!(reason, "User with id 1 not in ACTIVE status");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_user_active() {
        let validation = BasicValidationService::new();
        let user = User::new(UserId::new(1), "", UserStatus::Active);

        assert!(validation.validate_user(&user).is_ok());
    }

    #[test]
    fn test_validate_message_missing() {
        let validation = BasicValidationService::new();

        assert!(matches!(
            validation.validate_message(None),
            Err(PaymentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_message_empty_string_is_valid() {
        let validation = BasicValidationService::new();

        assert!(validation.validate_message(Some("")).is_ok());
    }
}
