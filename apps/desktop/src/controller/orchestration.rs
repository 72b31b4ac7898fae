//! Translates submitted forms and controls 1:1 into app operations.

use client_core::{CredentialVerifier, ProductApp};
use shared::domain::ProductId;

use crate::controller::events::{UiAction, UiError, UiErrorContext, UiEvent};

pub fn dispatch<V: CredentialVerifier>(app: &mut ProductApp<V>, action: UiAction) -> UiEvent {
    let action_name = match &action {
        UiAction::SubmitSignIn(_) => "submit_sign_in",
        UiAction::SubmitAddProduct(_) => "submit_add_product",
        UiAction::DeleteProduct { .. } => "delete_product",
        UiAction::LogOut => "log_out",
    };
    tracing::debug!(action = action_name, "dispatching ui action");

    match action {
        UiAction::SubmitSignIn(form) => match app.sign_in(&form.username, &form.password) {
            Ok(user) => UiEvent::SignedIn(user),
            Err(err) => UiEvent::Error(UiError::from_client(UiErrorContext::SignIn, &err)),
        },
        UiAction::SubmitAddProduct(form) => {
            match app.add_product(&form.name, &form.description) {
                Ok(product) => UiEvent::ProductAdded(product),
                Err(err) => UiEvent::Error(UiError::from_client(UiErrorContext::AddProduct, &err)),
            }
        }
        UiAction::DeleteProduct { raw_id } => {
            let Ok(id) = raw_id.trim().parse::<u64>() else {
                return UiEvent::Error(UiError::invalid_input(
                    UiErrorContext::DeleteProduct,
                    format!("'{raw_id}' is not a product id"),
                ));
            };
            let id = ProductId(id);
            match app.delete_product(id) {
                Ok(true) => UiEvent::ProductDeleted(id),
                Ok(false) => UiEvent::NothingDeleted(id),
                Err(err) => {
                    UiEvent::Error(UiError::from_client(UiErrorContext::DeleteProduct, &err))
                }
            }
        }
        UiAction::LogOut => {
            app.log_out();
            UiEvent::SignedOut
        }
    }
}
