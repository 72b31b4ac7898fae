//! Terminal view layer.

pub mod app;
pub mod password;
