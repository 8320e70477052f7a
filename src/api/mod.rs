//! # SafeEat REST API
//!
//! Typed access to the ordering backend. Nothing here knows about screens
//! or threads; every call is a plain `async fn` returning [`ApiResult`].

pub mod catalog;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;

pub use catalog::{Api, Catalog};
pub use client::ApiClient;
pub use endpoint::{Crud, NoContent, Resource, RestaurantLink};
pub use error::{ApiError, ApiResult};
pub use models::{
    Address, Ingredient, Product, ProductSection, ResourceId, Restaurant, RestaurantSection, User,
    require,
};
