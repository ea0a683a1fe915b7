//! Payment application service.
//!
//! Orchestrates the domain operations through the injected ports.
//! Contains NO storage or policy logic of its own - pure sequencing of
//! validation, user lookup, and persistence.

use tracing::debug;

use paycore_types::{
    CreatePaymentRequest, EditMessageRequest, Payment, PaymentError, PaymentRepository,
    UserRepository, ValidationService,
};

// Reachable only when the injected validator accepted an absent input;
// the validator owns the user-facing reason strings.
fn missing_after_validation(what: &str) -> PaymentError {
    PaymentError::invalid_argument(format!("{what} missing after validation"))
}

/// Orchestrator for the three payment operations.
///
/// Generic over its collaborators - a user lookup, a payment repository,
/// and a validation service - which are injected at construction. The
/// service holds no other state, and every operation is a synchronous
/// call/return: it either produces a result or fails with the first error
/// encountered, leaving the store untouched on failure.
pub struct PaymentService<U, R, V> {
    users: U,
    payments: R,
    validation: V,
}

impl<U, R, V> PaymentService<U, R, V>
where
    U: UserRepository,
    R: PaymentRepository,
    V: ValidationService,
{
    /// Creates a service from its three collaborators.
    pub fn new(users: U, payments: R, validation: V) -> Self {
        Self {
            users,
            payments,
            validation,
        }
    }

    /// Returns a reference to the underlying payment repository.
    pub fn payments(&self) -> &R {
        &self.payments
    }

    /// Creates and stores a payment for an existing, active user.
    ///
    /// Both input validations run before any lookup. The stored payment
    /// carries a fresh id and the message `"Payment from user {name}"`.
    #[tracing::instrument(skip(self))]
    pub fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, PaymentError> {
        self.validation.validate_user_id(req.user_id)?;
        self.validation.validate_amount(req.amount)?;

        // Validation passed, so both inputs are present.
        let user_id = req.user_id.ok_or_else(|| missing_after_validation("User id"))?;
        let amount = req.amount.ok_or_else(|| missing_after_validation("Amount"))?;

        let user = self
            .users
            .find_by_id(user_id)?
            .ok_or_else(|| PaymentError::not_found(format!("User with id {user_id} not found")))?;
        self.validation.validate_user(&user)?;

        let payment = Payment::new(user_id, amount, format!("Payment from user {}", user.name));
        let stored = self.payments.save(Some(payment))?;
        debug!(payment_id = %stored.payment_id, user_id = %user_id, "payment created");
        Ok(stored)
    }

    /// Replaces the message of a stored payment.
    ///
    /// Input checks fail with `InvalidArgument`; an unknown payment id is
    /// the repository's `NotFound`, propagated unchanged.
    #[tracing::instrument(skip(self))]
    pub fn edit_payment_message(&self, req: EditMessageRequest) -> Result<Payment, PaymentError> {
        self.validation.validate_payment_id(req.payment_id)?;
        self.validation.validate_message(req.message.as_deref())?;

        let message = req
            .message
            .ok_or_else(|| missing_after_validation("Payment message"))?;

        self.payments.edit_message(req.payment_id, &message)
    }

    /// Returns the stored payments whose amount strictly exceeds the
    /// threshold, in repository iteration order.
    #[tracing::instrument(skip(self))]
    pub fn get_all_by_amount_exceeding(
        &self,
        threshold: f64,
    ) -> Result<Vec<Payment>, PaymentError> {
        let payments = self.payments.find_all()?;
        Ok(payments
            .into_iter()
            .filter(|payment| payment.amount > threshold)
            .collect())
    }
}
