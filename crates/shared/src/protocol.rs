use serde::{Deserialize, Serialize};

use crate::domain::{Product, Screen, Username};

/// Read model handed to the view layer after every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSnapshot {
    pub screen: Screen,
    pub user: Option<Username>,
    pub greeting: String,
    pub products: Vec<Product>,
}

pub fn greeting_for(user: Option<&Username>) -> String {
    match user {
        Some(user) => format!("Hello {user}"),
        None => "Hello".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_names_the_user() {
        let alice = Username::parse("alice").expect("username");
        assert_eq!(greeting_for(Some(&alice)), "Hello alice");
        assert_eq!(greeting_for(None), "Hello");
    }

    #[test]
    fn snapshot_uses_snake_case_screen() {
        let snapshot = AppSnapshot {
            screen: Screen::SignIn,
            user: None,
            greeting: greeting_for(None),
            products: Vec::new(),
        };
        let json = serde_json::to_value(&snapshot).expect("json");
        assert_eq!(json["screen"], "sign_in");
        assert!(json["user"].is_null());
    }
}
