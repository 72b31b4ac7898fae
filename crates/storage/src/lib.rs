use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::domain::{Product, ProductId, ProductName, Username};
use thiserror::Error;

/// How long a user's product list lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreScope {
    /// Lists are keyed by username and survive log-out for the life of the process.
    #[default]
    PerUser,
    /// Every new session starts from an empty store.
    Session,
}

#[derive(Debug, Error)]
#[error("unknown store scope '{0}'; expected 'per_user' or 'session'")]
pub struct ParseStoreScopeError(String);

impl FromStr for StoreScope {
    type Err = ParseStoreScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "per_user" => Ok(Self::PerUser),
            "session" => Ok(Self::Session),
            _ => Err(ParseStoreScopeError(s.to_string())),
        }
    }
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerUser => f.write_str("per_user"),
            Self::Session => f.write_str("session"),
        }
    }
}

/// In-memory product lists keyed by owner.
///
/// Ids come from one counter shared by every owner, so an id names at most
/// one product for as long as the counter is not reset.
#[derive(Debug, Default)]
pub struct ProductStore {
    scope: StoreScope,
    products: HashMap<Username, Vec<Product>>,
    next_id: u64,
}

impl ProductStore {
    pub fn new(scope: StoreScope) -> Self {
        Self {
            scope,
            products: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn scope(&self) -> StoreScope {
        self.scope
    }

    pub fn next_id(&self) -> ProductId {
        ProductId(self.next_id)
    }

    /// Called whenever a user signs in. Only session-scoped stores forget anything.
    pub fn begin_session(&mut self) {
        if self.scope == StoreScope::Session {
            self.products.clear();
            self.next_id = 0;
            tracing::debug!("session-scoped product store reset");
        }
    }

    pub fn add_product(
        &mut self,
        owner: &Username,
        name: ProductName,
        description: impl Into<String>,
    ) -> Product {
        let product = Product::new(ProductId(self.next_id), name, description);
        self.next_id += 1;
        self.products
            .entry(owner.clone())
            .or_default()
            .push(product.clone());
        tracing::debug!(owner = %owner, product_id = %product.id, "product added");
        product
    }

    /// Returns `false` when nothing matched; a missing id is not an error.
    pub fn delete_product(&mut self, owner: &Username, product_id: ProductId) -> bool {
        let Some(products) = self.products.get_mut(owner) else {
            return false;
        };
        let before = products.len();
        products.retain(|product| product.id != product_id);
        let removed = products.len() != before;
        if removed {
            tracing::debug!(owner = %owner, product_id = %product_id, "product deleted");
        }
        removed
    }

    pub fn list_products(&self, owner: &Username) -> &[Product] {
        self.products
            .get(owner)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
