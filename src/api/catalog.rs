use async_trait::async_trait;

use super::client::ApiClient;
use super::endpoint::Crud;
use super::error::ApiResult;
use super::models::{
    Address, Ingredient, Product, ProductSection, ResourceId, RestaurantSection, User,
};

/// Every endpoint contract, bound to one client.
#[derive(Clone)]
pub struct Api {
    pub users: Crud<User>,
    pub addresses: Crud<Address>,
    pub products: Crud<Product>,
    pub ingredients: Crud<Ingredient>,
    pub product_sections: Crud<ProductSection>,
    pub restaurant_sections: Crud<RestaurantSection>,
}

impl Api {
    pub fn new(client: ApiClient) -> Self {
        Self {
            users: Crud::new(client.clone()),
            addresses: Crud::new(client.clone()),
            products: Crud::new(client.clone()),
            ingredients: Crud::new(client.clone()),
            product_sections: Crud::new(client.clone()),
            restaurant_sections: Crud::new(client),
        }
    }
}

/// The reads screens perform.
///
/// Screens depend on this rather than on [`Api`] so tests can substitute
/// canned or delayed responses without an HTTP server.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn product(&self, id: &ResourceId) -> ApiResult<Product>;

    async fn ingredients_of(&self, product_id: &ResourceId) -> ApiResult<Vec<Ingredient>>;

    async fn addresses(&self) -> ApiResult<Vec<Address>>;
}

#[async_trait]
impl Catalog for Api {
    async fn product(&self, id: &ResourceId) -> ApiResult<Product> {
        self.products.find_by_id(id).await
    }

    async fn ingredients_of(&self, product_id: &ResourceId) -> ApiResult<Vec<Ingredient>> {
        self.ingredients.find_all_by_product(product_id).await
    }

    async fn addresses(&self) -> ApiResult<Vec<Address>> {
        self.addresses.find_all().await
    }
}
