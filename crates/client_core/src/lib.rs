pub mod session;

use shared::{
    domain::{Product, ProductId, ProductName, Screen, Username},
    error::ValidationError,
    protocol::AppSnapshot,
};
use storage::{ProductStore, StoreScope};
use thiserror::Error;

pub use session::Session;

pub const DEFAULT_SECRET_PASSWORD: &str = "123";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no user is signed in")]
    NotSignedIn,
}

pub trait CredentialVerifier {
    fn verify(&self, username: &Username, password: &str) -> bool;
}

/// Accepts any username together with one shared plaintext secret.
///
/// Demo-grade only: no hashing, no lockout.
pub struct FixedPasswordVerifier {
    secret: String,
}

impl FixedPasswordVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for FixedPasswordVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_PASSWORD)
    }
}

impl CredentialVerifier for FixedPasswordVerifier {
    fn verify(&self, _username: &Username, password: &str) -> bool {
        password == self.secret
    }
}

/// Application root: the single session, its product store, and the
/// credential check guarding them.
pub struct ProductApp<V: CredentialVerifier> {
    session: Session,
    store: ProductStore,
    verifier: V,
}

impl<V: CredentialVerifier> ProductApp<V> {
    pub fn new(scope: StoreScope, verifier: V) -> Self {
        Self {
            session: Session::new(),
            store: ProductStore::new(scope),
            verifier,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn current_user(&self) -> Option<&Username> {
        self.session.current_user()
    }

    pub fn store_scope(&self) -> StoreScope {
        self.store.scope()
    }

    /// Returns the user now signed in.
    pub fn sign_in(
        &mut self,
        raw_username: &str,
        password: &str,
    ) -> Result<Username, ClientError> {
        let username = Username::parse(raw_username)?;
        if !self.verifier.verify(&username, password) {
            tracing::warn!(username = %username, "sign-in rejected");
            return Err(ValidationError::IncorrectPassword.into());
        }
        self.store.begin_session();
        tracing::info!(username = %username, "signed in");
        self.session.sign_in(username.clone());
        Ok(username)
    }

    pub fn log_out(&mut self) {
        if let Some(user) = self.session.current_user() {
            tracing::info!(username = %user, "logged out");
        }
        self.session.log_out();
    }

    pub fn add_product(
        &mut self,
        raw_name: &str,
        description: &str,
    ) -> Result<Product, ClientError> {
        let owner = self
            .session
            .current_user()
            .ok_or(ClientError::NotSignedIn)?;
        let name = ProductName::parse(raw_name)?;
        Ok(self.store.add_product(owner, name, description))
    }

    pub fn delete_product(&mut self, product_id: ProductId) -> Result<bool, ClientError> {
        let owner = self
            .session
            .current_user()
            .ok_or(ClientError::NotSignedIn)?;
        Ok(self.store.delete_product(owner, product_id))
    }

    /// The signed-in user's products; empty while signed out.
    pub fn products(&self) -> &[Product] {
        match self.session.current_user() {
            Some(owner) => self.store.list_products(owner),
            None => &[],
        }
    }

    pub fn products_for(&self, owner: &Username) -> &[Product] {
        self.store.list_products(owner)
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            screen: self.session.screen(),
            user: self.session.current_user().cloned(),
            greeting: self.session.greeting(),
            products: self.products().to_vec(),
        }
    }
}

impl Default for ProductApp<FixedPasswordVerifier> {
    fn default() -> Self {
        Self::new(StoreScope::default(), FixedPasswordVerifier::default())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
