//! Account registration capability. The storefront used to assume
//! registration always succeeds; here the contract is explicit so a real
//! identity backend can be substituted without touching call sites.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::professional::{Professional, ProfessionalId};
use crate::domain::user::{UserId, UserProfile};

#[derive(Clone, Debug, Deserialize)]
pub struct UserRegistration {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfessionalRegistration {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub specialties: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisteredAccount {
    pub user_id: UserId,
    pub profile: UserProfile,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisteredProfessional {
    pub professional_id: ProfessionalId,
    pub profile: Professional,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("email `{0}` is already registered")]
    EmailAlreadyRegistered(String),
    #[error("invalid registration input: {0}")]
    InvalidInput(String),
    #[error("account backend unavailable: {0}")]
    BackendUnavailable(String),
}

#[async_trait]
pub trait AccountRegistrar: Send + Sync {
    async fn register_user(
        &self,
        registration: UserRegistration,
    ) -> Result<RegisteredAccount, RegistrationError>;

    async fn register_professional(
        &self,
        registration: ProfessionalRegistration,
    ) -> Result<RegisteredProfessional, RegistrationError>;
}

/// Stand-in registrar: validates the input shape, then succeeds with a
/// generated identity. No persistence behind it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedRegistrar;

fn validate_identity(name: &str, email: &str) -> Result<(), RegistrationError> {
    if name.trim().is_empty() {
        return Err(RegistrationError::InvalidInput("name must not be blank".to_string()));
    }
    if !email.contains('@') {
        return Err(RegistrationError::InvalidInput(format!("`{email}` is not an email address")));
    }
    Ok(())
}

#[async_trait]
impl AccountRegistrar for SimulatedRegistrar {
    async fn register_user(
        &self,
        registration: UserRegistration,
    ) -> Result<RegisteredAccount, RegistrationError> {
        validate_identity(&registration.name, &registration.email)?;

        let user_id = UserId(Uuid::new_v4().to_string());
        let profile = UserProfile {
            id: user_id.clone(),
            email: registration.email,
            name: registration.name,
            created_at: Utc::now(),
            loyalty_points: 0,
            is_admin: false,
            is_professional: false,
            phone: registration.phone,
            address: registration.address,
            membership_id: None,
        };

        Ok(RegisteredAccount { user_id, profile })
    }

    async fn register_professional(
        &self,
        registration: ProfessionalRegistration,
    ) -> Result<RegisteredProfessional, RegistrationError> {
        validate_identity(&registration.name, &registration.email)?;
        if registration.specialties.is_empty() {
            return Err(RegistrationError::InvalidInput(
                "at least one specialty is required".to_string(),
            ));
        }

        let professional_id = ProfessionalId(Uuid::new_v4().to_string());
        let profile = Professional {
            id: professional_id.clone(),
            email: registration.email,
            name: registration.name,
            bio: registration.bio,
            specialties: registration.specialties,
            rating: 0.0,
            review_count: 0,
            is_verified: false,
            created_at: Utc::now(),
        };

        Ok(RegisteredProfessional { professional_id, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AccountRegistrar, ProfessionalRegistration, RegistrationError, SimulatedRegistrar,
        UserRegistration,
    };

    fn user_registration() -> UserRegistration {
        UserRegistration {
            name: "Ana María".to_string(),
            email: "ana@example.com".to_string(),
            phone: Some("3001234567".to_string()),
            address: None,
        }
    }

    #[tokio::test]
    async fn registers_a_user_with_fresh_loyalty_state() {
        let account = SimulatedRegistrar
            .register_user(user_registration())
            .await
            .expect("registration should succeed");

        assert_eq!(account.profile.loyalty_points, 0);
        assert!(!account.profile.is_admin);
        assert!(!account.profile.is_professional);
        assert_eq!(account.user_id, account.profile.id);
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let error = SimulatedRegistrar
            .register_user(UserRegistration { email: "not-an-email".to_string(), ..user_registration() })
            .await
            .expect_err("malformed email should be rejected");

        assert!(matches!(error, RegistrationError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn professionals_start_unverified() {
        let professional = SimulatedRegistrar
            .register_professional(ProfessionalRegistration {
                name: "Laura Gómez".to_string(),
                email: "laura@example.com".to_string(),
                bio: "Instructora certificada de yoga y meditación.".to_string(),
                specialties: vec!["Yoga".to_string(), "Meditación".to_string()],
            })
            .await
            .expect("registration should succeed");

        assert!(!professional.profile.is_verified);
        assert_eq!(professional.profile.review_count, 0);
    }

    #[tokio::test]
    async fn professional_registration_requires_a_specialty() {
        let error = SimulatedRegistrar
            .register_professional(ProfessionalRegistration {
                name: "Laura Gómez".to_string(),
                email: "laura@example.com".to_string(),
                bio: String::new(),
                specialties: Vec::new(),
            })
            .await
            .expect_err("empty specialties should be rejected");

        assert!(matches!(error, RegistrationError::InvalidInput(_)));
    }
}
