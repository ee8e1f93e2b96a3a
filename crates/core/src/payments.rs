//! Checkout payment capability. Entirely simulated: no gateway integration,
//! no retries. The contract carries real failure modes so a genuine
//! processor can replace the simulation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::catalog_item::ProductId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    NequiPse,
    CreditCard,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NequiPse => "Nequi / PSE",
            Self::CreditCard => "Tarjeta de Crédito/Débito",
            Self::CashOnDelivery => "Pago Contra Entrega",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.unit_price * Decimal::from(line.quantity)).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub payment_id: String,
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment declined: {reason}")]
    Declined { reason: String },
    #[error("payment backend unavailable: {0}")]
    BackendUnavailable(String),
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn charge(
        &self,
        order: &Order,
        method: PaymentMethod,
    ) -> Result<PaymentReceipt, PaymentError>;
}

/// Settles every positive-total order after an artificial delay that keeps
/// the checkout spinner visible.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedPaymentProcessor {
    pub settlement_delay: Duration,
}

impl Default for SimulatedPaymentProcessor {
    fn default() -> Self {
        Self { settlement_delay: Duration::from_millis(1_500) }
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedPaymentProcessor {
    async fn charge(
        &self,
        order: &Order,
        method: PaymentMethod,
    ) -> Result<PaymentReceipt, PaymentError> {
        let amount = order.total();
        if amount <= Decimal::ZERO {
            return Err(PaymentError::Declined {
                reason: "order total must be positive".to_string(),
            });
        }

        tokio::time::sleep(self.settlement_delay).await;

        Ok(PaymentReceipt {
            payment_id: Uuid::new_v4().to_string(),
            method,
            amount,
            paid_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rust_decimal::Decimal;

    use crate::domain::catalog_item::ProductId;

    use super::{
        Order, OrderLine, PaymentError, PaymentMethod, PaymentProcessor,
        SimulatedPaymentProcessor,
    };

    fn processor() -> SimulatedPaymentProcessor {
        SimulatedPaymentProcessor { settlement_delay: Duration::ZERO }
    }

    fn order(quantity: u32, unit_price: i64) -> Order {
        Order {
            lines: vec![OrderLine {
                product_id: ProductId("prd-001".to_string()),
                quantity,
                unit_price: Decimal::new(unit_price, 0),
            }],
        }
    }

    #[tokio::test]
    async fn charges_the_order_total() {
        let receipt = processor()
            .charge(&order(3, 48_000), PaymentMethod::NequiPse)
            .await
            .expect("positive order should settle");

        assert_eq!(receipt.amount, Decimal::new(144_000, 0));
        assert_eq!(receipt.method, PaymentMethod::NequiPse);
        assert!(!receipt.payment_id.is_empty());
    }

    #[tokio::test]
    async fn declines_a_zero_total_order() {
        let error = processor()
            .charge(&order(0, 48_000), PaymentMethod::CreditCard)
            .await
            .expect_err("zero total should be declined");

        assert!(matches!(error, PaymentError::Declined { .. }));
    }

    #[test]
    fn payment_methods_have_display_names() {
        assert_eq!(PaymentMethod::CashOnDelivery.display_name(), "Pago Contra Entrega");
    }
}
