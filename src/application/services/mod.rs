//! Business logic services for the application layer.

pub mod check_service;
pub mod link_service;

pub use check_service::{CheckOutcome, CheckService};
pub use link_service::LinkService;
