pub mod accounts;
pub mod booking;
pub mod catalog;
pub mod concierge;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loyalty;
pub mod payments;
pub mod session;

pub use accounts::{
    AccountRegistrar, ProfessionalRegistration, RegisteredAccount, RegisteredProfessional,
    RegistrationError, SimulatedRegistrar, UserRegistration,
};
pub use booking::{AppointmentRequest, BookingError, BookingScheduler, SimulatedScheduler};
pub use catalog::Catalog;
pub use concierge::{recommend, RecommendationItem, MAX_RECOMMENDATIONS};
pub use domain::appointment::{Appointment, AppointmentId, AppointmentStatus};
pub use domain::cart::{Cart, CartLine};
pub use domain::catalog_item::{Product, ProductId, ServiceId, WellnessService};
pub use domain::membership::{Membership, MembershipId};
pub use domain::professional::{Professional, ProfessionalId};
pub use domain::review::{Review, ReviewTarget};
pub use domain::user::{UserId, UserProfile};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use loyalty::{
    level_for_points, loyalty_summary, progress_to_next, unlocked_rewards, Level, LevelProgress,
    LoyaltySummary, Reward,
};
pub use payments::{
    Order, OrderLine, PaymentError, PaymentMethod, PaymentProcessor, PaymentReceipt,
    SimulatedPaymentProcessor,
};
pub use session::AppSession;
