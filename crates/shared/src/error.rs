use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presence-check failures surfaced inline next to the form that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Name is required")]
    NameRequired,
}
