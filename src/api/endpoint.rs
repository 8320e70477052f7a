//! # Endpoint Contracts
//!
//! One generic CRUD contract, [`Crud<R>`], shared by every resource. What
//! differs between resources is declared on the [`Resource`] trait:
//!
//! ```text
//! Resource
//! ├── PREFIX     path segment under the base URL ("product", "user", ...)
//! ├── Link       foreign-key query attached to create/create_many
//! └── Deleted    what DELETE answers with (nothing, or the removed record)
//! ```
//!
//! Operations that only one resource has (ingredients by product) are
//! inherent methods on that resource's `Crud` instantiation.

use std::marker::PhantomData;

use reqwest::Method;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::client::ApiClient;
use super::error::ApiResult;
use super::models::{
    Address, Ingredient, Product, ProductSection, ResourceId, RestaurantSection, User,
};

/// DELETE response for resources that answer with nothing worth reading.
pub type NoContent = IgnoredAny;

/// HTTP binding of one contract operation.
#[derive(Debug, Clone)]
pub struct Binding {
    pub name: &'static str,
    pub method: Method,
    /// Path below the resource prefix; `{name}` marks a path parameter.
    pub template: &'static str,
}

pub const FIND_ALL: Binding = Binding {
    name: "findAll",
    method: Method::GET,
    template: "/",
};

pub const FIND_BY_ID: Binding = Binding {
    name: "findById",
    method: Method::GET,
    template: "/{id}",
};

pub const CREATE: Binding = Binding {
    name: "create",
    method: Method::POST,
    template: "/",
};

pub const CREATE_MANY: Binding = Binding {
    name: "createMany",
    method: Method::POST,
    template: "/many",
};

pub const UPDATE: Binding = Binding {
    name: "update",
    method: Method::PUT,
    template: "/",
};

pub const DELETE: Binding = Binding {
    name: "delete",
    method: Method::DELETE,
    template: "/{id}",
};

pub const FIND_ALL_BY_PRODUCT: Binding = Binding {
    name: "findAllByProduct",
    method: Method::GET,
    template: "/product/{productId}",
};

/// Query parameters carried by a request.
pub trait QueryParams {
    fn pairs(&self) -> Vec<(&'static str, String)>;
}

impl QueryParams for () {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Associates a product section with the restaurant that owns it.
///
/// Only the server enforces that the restaurant exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantLink {
    pub restaurant_id: ResourceId,
}

impl QueryParams for RestaurantLink {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("restaurantId", self.restaurant_id.to_string())]
    }
}

/// A record type exposed over the REST surface.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    const PREFIX: &'static str;
    type Link: QueryParams + Send + Sync;
    type Deleted: DeserializeOwned + Send + 'static;
}

impl Resource for User {
    const PREFIX: &'static str = "user";
    type Link = ();
    type Deleted = User;
}

impl Resource for Address {
    const PREFIX: &'static str = "address";
    type Link = ();
    type Deleted = NoContent;
}

impl Resource for Product {
    const PREFIX: &'static str = "product";
    type Link = ();
    type Deleted = NoContent;
}

impl Resource for Ingredient {
    const PREFIX: &'static str = "ingredient";
    type Link = ();
    type Deleted = NoContent;
}

impl Resource for ProductSection {
    const PREFIX: &'static str = "product-section";
    type Link = RestaurantLink;
    type Deleted = NoContent;
}

impl Resource for RestaurantSection {
    const PREFIX: &'static str = "restaurant-section";
    type Link = ();
    type Deleted = NoContent;
}

/// The CRUD contract for resource `R`, bound to a live client.
pub struct Crud<R> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Crud<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Crud<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub async fn find_all(&self) -> ApiResult<Vec<R>> {
        self.client
            .invoke(&FIND_ALL, R::PREFIX, &[], &[], None::<&()>)
            .await
    }

    pub async fn find_by_id(&self, id: &ResourceId) -> ApiResult<R> {
        self.client
            .invoke(&FIND_BY_ID, R::PREFIX, &[("id", id.as_str())], &[], None::<&()>)
            .await
    }

    /// Creates one record. The body may leave its id unset.
    pub async fn create(&self, body: &R, link: &R::Link) -> ApiResult<R> {
        self.client
            .invoke(&CREATE, R::PREFIX, &[], &link.pairs(), Some(body))
            .await
    }

    pub async fn create_many(&self, bodies: &[R], link: &R::Link) -> ApiResult<Vec<R>> {
        self.client
            .invoke(&CREATE_MANY, R::PREFIX, &[], &link.pairs(), Some(bodies))
            .await
    }

    /// Replaces a record. The body is expected to carry its id.
    pub async fn update(&self, body: &R) -> ApiResult<R> {
        self.client
            .invoke(&UPDATE, R::PREFIX, &[], &[], Some(body))
            .await
    }

    pub async fn delete(&self, id: &ResourceId) -> ApiResult<R::Deleted> {
        self.client
            .invoke(&DELETE, R::PREFIX, &[("id", id.as_str())], &[], None::<&()>)
            .await
    }
}

impl Crud<Ingredient> {
    /// Lists the ingredients of one product.
    pub async fn find_all_by_product(&self, product_id: &ResourceId) -> ApiResult<Vec<Ingredient>> {
        self.client
            .invoke(
                &FIND_ALL_BY_PRODUCT,
                Ingredient::PREFIX,
                &[("productId", product_id.as_str())],
                &[],
                None::<&()>,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_match_rest_surface() {
        let table = [
            (&FIND_ALL, Method::GET, "/"),
            (&FIND_BY_ID, Method::GET, "/{id}"),
            (&CREATE, Method::POST, "/"),
            (&CREATE_MANY, Method::POST, "/many"),
            (&UPDATE, Method::PUT, "/"),
            (&DELETE, Method::DELETE, "/{id}"),
        ];
        for (binding, method, template) in table {
            assert_eq!(binding.method, method, "{}", binding.name);
            assert_eq!(binding.template, template, "{}", binding.name);
        }
    }

    #[test]
    fn test_restaurant_link_query() {
        let link = RestaurantLink {
            restaurant_id: ResourceId::parse("r1").unwrap(),
        };
        assert_eq!(link.pairs(), vec![("restaurantId", "r1".to_string())]);
        assert!(().pairs().is_empty());
    }

    #[test]
    fn test_prefixes_are_distinct() {
        let mut prefixes = vec![
            User::PREFIX,
            Address::PREFIX,
            Product::PREFIX,
            Ingredient::PREFIX,
            ProductSection::PREFIX,
            RestaurantSection::PREFIX,
        ];
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes.len(), 6);
    }
}
