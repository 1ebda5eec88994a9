mod client;
mod plans;
mod token;

pub use client::{ApiClient, ApiResponse, DietRequest, PaymentOutcome};
pub use plans::PlanType;
pub use token::TokenStore;
