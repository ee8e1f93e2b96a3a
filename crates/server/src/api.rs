//! Storefront JSON API. Thin handlers over the core engines and the
//! simulated capability seams; all real error handling happens at this
//! boundary via the layered error taxonomy.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use caliope_core::config::AppConfig;
use caliope_core::domain::review::ReviewTarget;
use caliope_core::loyalty::{loyalty_summary, LoyaltySummary};
use caliope_core::{
    recommend, AccountRegistrar, Appointment, AppointmentRequest, ApplicationError, BookingScheduler,
    Catalog, DomainError, InterfaceError, Membership, Order, PaymentMethod, PaymentProcessor,
    PaymentReceipt, Product, ProfessionalRegistration, RecommendationItem, RegisteredAccount,
    RegisteredProfessional, Review, SimulatedPaymentProcessor, SimulatedRegistrar,
    SimulatedScheduler, UserId, UserRegistration, WellnessService,
};

#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<Catalog>,
    pub registrar: Arc<dyn AccountRegistrar>,
    pub payments: Arc<dyn PaymentProcessor>,
    pub scheduler: Arc<dyn BookingScheduler>,
    /// Cosmetic delay before concierge responses (loading indicator).
    pub concierge_delay: Duration,
}

impl ApiContext {
    /// Wires the simulated capability implementations behind the API, the
    /// way the storefront currently ships.
    pub fn simulated(config: &AppConfig) -> Self {
        Self {
            catalog: Arc::new(Catalog::seeded()),
            registrar: Arc::new(SimulatedRegistrar),
            payments: Arc::new(SimulatedPaymentProcessor::default()),
            scheduler: Arc::new(SimulatedScheduler),
            concierge_delay: Duration::from_millis(config.concierge.response_delay_ms),
        }
    }
}

pub fn router(context: ApiContext) -> Router {
    Router::new()
        .route("/api/concierge/recommendations", post(recommendations))
        .route("/api/loyalty/summary", get(loyalty))
        .route("/api/catalog/services", get(list_services))
        .route("/api/catalog/products", get(list_products))
        .route("/api/memberships", get(list_memberships))
        .route("/api/accounts/register", post(register_user))
        .route("/api/accounts/register-professional", post(register_professional))
        .route("/api/checkout", post(checkout))
        .route("/api/bookings", post(create_booking))
        .route("/api/reviews", post(create_review))
        .with_state(context)
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub correlation_id: String,
}

type Rejection = (StatusCode, Json<ErrorBody>);

fn reject(error: ApplicationError) -> Rejection {
    let correlation_id = Uuid::new_v4().to_string();
    let interface = error.into_interface(correlation_id.clone());

    tracing::warn!(
        event_name = "api.request.rejected",
        correlation_id = %correlation_id,
        error = %interface,
        "request rejected"
    );

    let status = match &interface {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ErrorBody { message: interface.user_message().to_string(), correlation_id }))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub preferences: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub items: Vec<RecommendationItem>,
}

pub async fn recommendations(
    State(context): State<ApiContext>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    // Keeps the concierge loading indicator visible; carries no
    // cancellation semantics.
    tokio::time::sleep(context.concierge_delay).await;

    let items =
        recommend(&request.preferences, context.catalog.services(), context.catalog.products());

    tracing::info!(
        event_name = "concierge.recommendations",
        matched = items.len(),
        "concierge recommendations computed"
    );

    Json(RecommendationResponse { items })
}

#[derive(Debug, Deserialize)]
pub struct LoyaltyQuery {
    pub points: i64,
}

pub async fn loyalty(Query(query): Query<LoyaltyQuery>) -> Json<LoyaltySummary> {
    Json(loyalty_summary(query.points))
}

pub async fn list_services(State(context): State<ApiContext>) -> Json<Vec<WellnessService>> {
    Json(context.catalog.services().to_vec())
}

pub async fn list_products(State(context): State<ApiContext>) -> Json<Vec<Product>> {
    Json(context.catalog.products().to_vec())
}

pub async fn list_memberships(State(context): State<ApiContext>) -> Json<Vec<Membership>> {
    Json(context.catalog.memberships().to_vec())
}

pub async fn register_user(
    State(context): State<ApiContext>,
    Json(registration): Json<UserRegistration>,
) -> Result<(StatusCode, Json<RegisteredAccount>), Rejection> {
    let account = context
        .registrar
        .register_user(registration)
        .await
        .map_err(|error| reject(ApplicationError::from(error)))?;

    tracing::info!(
        event_name = "accounts.user_registered",
        user_id = %account.user_id.0,
        "user account registered"
    );

    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn register_professional(
    State(context): State<ApiContext>,
    Json(registration): Json<ProfessionalRegistration>,
) -> Result<(StatusCode, Json<RegisteredProfessional>), Rejection> {
    let professional = context
        .registrar
        .register_professional(registration)
        .await
        .map_err(|error| reject(ApplicationError::from(error)))?;

    tracing::info!(
        event_name = "accounts.professional_registered",
        professional_id = %professional.professional_id.0,
        "professional account registered"
    );

    Ok((StatusCode::CREATED, Json(professional)))
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub order: Order,
    pub method: PaymentMethod,
}

pub async fn checkout(
    State(context): State<ApiContext>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<PaymentReceipt>, Rejection> {
    if request.order.is_empty() {
        return Err(reject(ApplicationError::from(DomainError::InvariantViolation(
            "order must contain at least one line".to_string(),
        ))));
    }

    let receipt = context
        .payments
        .charge(&request.order, request.method)
        .await
        .map_err(|error| reject(ApplicationError::from(error)))?;

    tracing::info!(
        event_name = "checkout.settled",
        payment_id = %receipt.payment_id,
        amount = %receipt.amount,
        "checkout settled"
    );

    Ok(Json(receipt))
}

pub async fn create_booking(
    State(context): State<ApiContext>,
    Json(request): Json<AppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), Rejection> {
    let appointment = context
        .scheduler
        .schedule(request)
        .await
        .map_err(|error| reject(ApplicationError::from(error)))?;

    tracing::info!(
        event_name = "booking.scheduled",
        appointment_id = %appointment.id.0,
        "appointment scheduled"
    );

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub target_id: String,
    pub target_type: ReviewTarget,
}

pub async fn create_review(
    Json(request): Json<ReviewRequest>,
) -> Result<(StatusCode, Json<Review>), Rejection> {
    let review = Review::new(
        Uuid::new_v4().to_string(),
        UserId(request.user_id),
        request.user_name,
        request.rating,
        request.comment,
        request.target_id,
        request.target_type,
    )
    .map_err(|error| reject(ApplicationError::from(error)))?;

    Ok((StatusCode::CREATED, Json(review)))
}
