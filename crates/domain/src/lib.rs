//! Domain entities and request DTOs for the SYSMEDIC client
//!
//! Client-side restatement of the shapes the clinic administration backend
//! exchanges over its JSON API.

pub mod entities;
pub mod requests;

pub use entities::{
    Company, Paginated, Subscription, SubscriptionPlan, SubscriptionStatus, User, UserRole,
};
pub use requests::{
    CreateCompanyRequest, CreateSubscriptionRequest, CreateUserRequest, UpdateCompanyRequest,
    UpdateSubscriptionRequest, UpdateUserRequest, validate_request,
};
