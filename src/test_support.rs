//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{Address, ApiError, ApiResult, Catalog, Ingredient, Product, ResourceId};
use crate::core::navigation::{NavCommand, NavHandle};

/// A handle whose commands go nowhere.
pub fn detached_nav() -> NavHandle {
    NavHandle::channel().0
}

/// A handle plus the queue its commands land in.
pub fn nav_channel() -> (NavHandle, Receiver<NavCommand>) {
    NavHandle::channel()
}

pub fn id(raw: &str) -> ResourceId {
    ResourceId::parse(raw).expect("test ids are non-empty")
}

pub fn ingredient(name: &str, restricted: bool) -> Ingredient {
    Ingredient {
        id: Some(id(&format!("i-{name}"))),
        name: Some(name.to_string()),
        is_restricted: Some(restricted),
    }
}

/// Canned catalog with an optional delay per call.
#[derive(Clone, Default)]
pub struct StubCatalog {
    pub product: Option<ApiResult<Product>>,
    pub product_delay: Duration,
    pub ingredients: Option<ApiResult<Vec<Ingredient>>>,
    pub ingredients_delay: Duration,
    pub addresses: Option<ApiResult<Vec<Address>>>,
}

impl StubCatalog {
    pub fn shared(self) -> Arc<dyn Catalog> {
        Arc::new(self)
    }
}

fn canned<T: Clone>(value: &Option<ApiResult<T>>) -> ApiResult<T> {
    value
        .clone()
        .unwrap_or_else(|| Err(ApiError::Network("stub has no response".into())))
}

#[async_trait]
impl Catalog for StubCatalog {
    async fn product(&self, _id: &ResourceId) -> ApiResult<Product> {
        tokio::time::sleep(self.product_delay).await;
        canned(&self.product)
    }

    async fn ingredients_of(&self, _product_id: &ResourceId) -> ApiResult<Vec<Ingredient>> {
        tokio::time::sleep(self.ingredients_delay).await;
        canned(&self.ingredients)
    }

    async fn addresses(&self) -> ApiResult<Vec<Address>> {
        canned(&self.addresses)
    }
}
