// Agenda Cultuel Library
// Recurring-schedule projection and filtering engine for a worship-places directory

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::AgendaError;
