//! Appointment booking capability. Simulated scheduling with an explicit
//! failure contract, mirroring the registration and payment seams.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::appointment::{Appointment, AppointmentId, AppointmentStatus};
use crate::domain::catalog_item::ServiceId;
use crate::domain::professional::ProfessionalId;
use crate::domain::user::UserId;

#[derive(Clone, Debug, Deserialize)]
pub struct AppointmentRequest {
    pub user_id: UserId,
    pub user_name: String,
    pub professional_id: ProfessionalId,
    pub professional_name: String,
    pub service_id: ServiceId,
    pub service_name: String,
    pub appointment_date: DateTime<Utc>,
    pub price: Decimal,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("slot {requested} is unavailable: {reason}")]
    SlotUnavailable { requested: DateTime<Utc>, reason: String },
    #[error("booking backend unavailable: {0}")]
    BackendUnavailable(String),
}

#[async_trait]
pub trait BookingScheduler: Send + Sync {
    async fn schedule(&self, request: AppointmentRequest) -> Result<Appointment, BookingError>;
}

/// Accepts any future slot and books it immediately. No agenda behind it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedScheduler;

#[async_trait]
impl BookingScheduler for SimulatedScheduler {
    async fn schedule(&self, request: AppointmentRequest) -> Result<Appointment, BookingError> {
        let now = Utc::now();
        if request.appointment_date <= now {
            return Err(BookingError::SlotUnavailable {
                requested: request.appointment_date,
                reason: "appointments must be scheduled in the future".to_string(),
            });
        }

        Ok(Appointment {
            id: AppointmentId(Uuid::new_v4().to_string()),
            user_id: request.user_id,
            user_name: request.user_name,
            professional_id: request.professional_id,
            professional_name: request.professional_name,
            service_id: request.service_id,
            service_name: request.service_name,
            appointment_date: request.appointment_date,
            status: AppointmentStatus::Scheduled,
            price: request.price,
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use crate::domain::appointment::AppointmentStatus;
    use crate::domain::catalog_item::ServiceId;
    use crate::domain::professional::ProfessionalId;
    use crate::domain::user::UserId;

    use super::{AppointmentRequest, BookingError, BookingScheduler, SimulatedScheduler};

    fn request(offset: Duration) -> AppointmentRequest {
        AppointmentRequest {
            user_id: UserId("user-1".to_string()),
            user_name: "Ana".to_string(),
            professional_id: ProfessionalId("prof-1".to_string()),
            professional_name: "Laura".to_string(),
            service_id: ServiceId("srv-002".to_string()),
            service_name: "Clase de Yoga Restaurativo".to_string(),
            appointment_date: Utc::now() + offset,
            price: Decimal::new(45_000, 0),
        }
    }

    #[tokio::test]
    async fn schedules_future_appointments() {
        let appointment = SimulatedScheduler
            .schedule(request(Duration::days(2)))
            .await
            .expect("future slot should book");

        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.service_name, "Clase de Yoga Restaurativo");
        assert!(!appointment.id.0.is_empty());
    }

    #[tokio::test]
    async fn rejects_past_slots() {
        let error = SimulatedScheduler
            .schedule(request(Duration::hours(-1)))
            .await
            .expect_err("past slot should be rejected");

        assert!(matches!(error, BookingError::SlotUnavailable { .. }));
    }
}
