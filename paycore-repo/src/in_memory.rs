//! In-memory payment repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use paycore_types::{Payment, PaymentError, PaymentId, PaymentRepository};

/// Memory-resident implementation of the `PaymentRepository` port.
///
/// The store is instance-scoped: each repository owns its own map and two
/// instances never share state. Contents do not survive the process.
pub struct InMemPaymentRepository {
    payments: RwLock<HashMap<PaymentId, Payment>>,
}

impl InMemPaymentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            payments: RwLock::new(HashMap::new()),
        }
    }

    // A poisoned lock means a panic happened while a guard was held; the
    // map itself is still structurally valid, so recover it rather than
    // surfacing a third error category.
    fn read_store(&self) -> RwLockReadGuard<'_, HashMap<PaymentId, Payment>> {
        self.payments.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, HashMap<PaymentId, Payment>> {
        self.payments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemPaymentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentRepository for InMemPaymentRepository {
    fn find_by_id(&self, id: Option<PaymentId>) -> Result<Option<Payment>, PaymentError> {
        let id = id.ok_or_else(|| PaymentError::invalid_argument("Payment id must be provided"))?;
        Ok(self.read_store().get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Payment>, PaymentError> {
        Ok(self.read_store().values().cloned().collect())
    }

    fn save(&self, payment: Option<Payment>) -> Result<Payment, PaymentError> {
        let payment =
            payment.ok_or_else(|| PaymentError::invalid_argument("Payment must be provided"))?;

        let mut payments = self.write_store();
        if payments.contains_key(&payment.payment_id) {
            return Err(PaymentError::invalid_argument(format!(
                "Payment with id {} already saved",
                payment.payment_id
            )));
        }

        debug!(payment_id = %payment.payment_id, amount = payment.amount, "payment stored");
        payments.insert(payment.payment_id, payment.clone());
        Ok(payment)
    }

    fn edit_message(
        &self,
        id: Option<PaymentId>,
        new_message: &str,
    ) -> Result<Payment, PaymentError> {
        let mut payments = self.write_store();

        // An absent id falls through to the same "record absent" outcome
        // as an unknown one; this operation defines no separate
        // precondition check.
        let stored = id.and_then(|id| payments.get(&id)).cloned();
        let Some(stored) = stored else {
            let shown = id.map_or_else(|| "unset".to_string(), |id| id.to_string());
            return Err(PaymentError::not_found(format!(
                "Payment with id {shown} not found"
            )));
        };

        let updated = stored.with_message(new_message);
        debug!(payment_id = %updated.payment_id, "payment message replaced");
        payments.insert(updated.payment_id, updated.clone());
        Ok(updated)
    }
}
