//! Web layer for the bus agent.
//!
//! Provides the bus search API, registration forms and admin listings.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
