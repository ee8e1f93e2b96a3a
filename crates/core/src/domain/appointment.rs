use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog_item::ServiceId;
use crate::domain::professional::ProfessionalId;
use crate::domain::user::UserId;
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// An appointment booked by a user with a professional for a given service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub user_id: UserId,
    pub user_name: String,
    pub professional_id: ProfessionalId,
    pub professional_name: String,
    pub service_id: ServiceId,
    pub service_name: String,
    pub appointment_date: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self.status, next),
            (AppointmentStatus::Scheduled, AppointmentStatus::Completed)
                | (AppointmentStatus::Scheduled, AppointmentStatus::Cancelled)
        )
    }

    pub fn transition_to(&mut self, next: AppointmentStatus) -> Result<(), DomainError> {
        if self.can_transition_to(next) {
            self.status = next;
            return Ok(());
        }

        Err(DomainError::InvalidAppointmentTransition { from: self.status, to: next })
    }
}
