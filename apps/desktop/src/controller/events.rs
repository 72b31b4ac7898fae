//! Terminal commands, form submissions, and the events they produce.

use client_core::ClientError;
use shared::{
    domain::{Product, ProductId, Username},
    error::ValidationError,
};

/// One control word typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SignIn,
    AddProduct,
    DeleteProduct { raw_id: String },
    LogOut,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl UiCommand {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let word = words.next()?;
        let command = match word.to_ascii_lowercase().as_str() {
            "sign-in" | "signin" | "login" => Self::SignIn,
            "add" => Self::AddProduct,
            "delete" | "rm" => Self::DeleteProduct {
                raw_id: words.next().unwrap_or_default().to_string(),
            },
            "log-out" | "logout" => Self::LogOut,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(word.to_string()),
        };
        Some(command)
    }

    pub fn word(&self) -> &str {
        match self {
            Self::SignIn => "sign-in",
            Self::AddProduct => "add",
            Self::DeleteProduct { .. } => "delete",
            Self::LogOut => "log-out",
            Self::Show => "show",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Unknown(word) => word.as_str(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct AddProductForm {
    pub name: String,
    pub description: String,
}

pub enum UiAction {
    SubmitSignIn(SignInForm),
    SubmitAddProduct(AddProductForm),
    DeleteProduct { raw_id: String },
    LogOut,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    SignedIn(Username),
    SignedOut,
    ProductAdded(Product),
    ProductDeleted(ProductId),
    NothingDeleted(ProductId),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    Validation,
    Input,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    SignIn,
    AddProduct,
    DeleteProduct,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_client(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::Validation(ValidationError::IncorrectPassword) => UiErrorCategory::Auth,
            ClientError::Validation(_) => UiErrorCategory::Validation,
            ClientError::NotSignedIn => UiErrorCategory::State,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn invalid_input(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Input,
            context,
            message: message.into(),
        }
    }

    pub fn requires_reauth(&self) -> bool {
        self.category == UiErrorCategory::State
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
