//! Product details: name, price, ingredient list and the dietary warning.
//!
//! Two independent requests feed this screen (the product and its
//! ingredients). Each settles on its own; neither waits for the other.

use std::sync::Arc;

use log::debug;

use crate::api::{ApiError, ApiResult, Catalog, Ingredient, Product, ResourceId, require};
use crate::core::bridge::Pending;
use crate::core::diff::{Keyed, ListModel};
use crate::core::navigation::{NavHandle, Route};
use crate::core::overlay::Overlay;
use crate::core::report::{FailureReporter, Presentation};

use super::{Action, dismiss_overlay};

/// One row of the ingredient list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    key: String,
    pub name: String,
    pub is_restricted: bool,
}

impl ProductDetail {
    fn from_ingredient(ingredient: &Ingredient) -> ApiResult<Self> {
        let name = require(&ingredient.name, "name")?.clone();
        let is_restricted = *require(&ingredient.is_restricted, "isRestricted")?;
        let key = ingredient
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| name.clone());
        Ok(Self {
            key,
            name,
            is_restricted,
        })
    }
}

impl Keyed for ProductDetail {
    type Key = String;
    fn key(&self) -> &String {
        &self.key
    }
}

pub struct ProductDetailsScreen {
    product_id: ResourceId,
    catalog: Arc<dyn Catalog>,
    nav: NavHandle,
    reporter: FailureReporter,
    product: Option<Pending<Product>>,
    ingredients: Option<Pending<Vec<Ingredient>>>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    /// Shown when any ingredient is restricted for the user.
    pub show_restriction_alert: bool,
    pub details: ListModel<ProductDetail>,
    pub selected: usize,
    pub overlay: Option<Overlay>,
}

impl ProductDetailsScreen {
    pub fn new(product_id: ResourceId, catalog: Arc<dyn Catalog>, nav: NavHandle) -> Self {
        let mut screen = Self {
            product_id,
            catalog,
            nav,
            reporter: FailureReporter::new("product-details", Presentation::Alert),
            product: None,
            ingredients: None,
            name: None,
            price: None,
            description: None,
            show_restriction_alert: false,
            details: ListModel::new(),
            selected: 0,
            overlay: None,
        };
        screen.load();
        screen
    }

    /// Starts both requests. Any still in flight are cancelled first.
    pub fn load(&mut self) {
        let catalog = self.catalog.clone();
        let id = self.product_id.clone();
        self.product = Some(Pending::spawn("product.findById", async move {
            catalog.product(&id).await
        }));

        let catalog = self.catalog.clone();
        let id = self.product_id.clone();
        self.ingredients = Some(Pending::spawn("ingredient.findAllByProduct", async move {
            catalog.ingredients_of(&id).await
        }));
    }

    pub fn is_loading(&self) -> bool {
        self.product.is_some() || self.ingredients.is_some()
    }

    /// Applies whichever results have arrived. Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        if let Some(outcome) = self.product.as_mut().and_then(Pending::poll) {
            self.product = None;
            self.apply_product(outcome);
            changed = true;
        }

        if let Some(outcome) = self.ingredients.as_mut().and_then(Pending::poll) {
            self.ingredients = None;
            self.apply_ingredients(outcome);
            changed = true;
        }

        changed
    }

    fn apply_product(&mut self, outcome: ApiResult<Product>) {
        let summary = outcome.and_then(|product| {
            let name = require(&product.name, "name")?.clone();
            // Whole prices keep their decimal point: 12.0, not 12
            let price = format!("{:?}", require(&product.price, "price")?);
            Ok((name, price, product.description))
        });

        match summary {
            Ok((name, price, description)) => {
                self.name = Some(name);
                self.price = Some(price);
                self.description = description;
            }
            Err(e) => self.fail("findById", &e),
        }
    }

    fn apply_ingredients(&mut self, outcome: ApiResult<Vec<Ingredient>>) {
        let rows = outcome.and_then(|ingredients| {
            ingredients
                .iter()
                .map(ProductDetail::from_ingredient)
                .collect::<ApiResult<Vec<_>>>()
        });

        match rows {
            Ok(rows) => {
                let patches = self.details.apply(&rows);
                debug!("Ingredient list: {} patch(es)", patches.len());
                self.show_restriction_alert = rows.iter().any(|row| row.is_restricted);
                self.selected = self.selected.min(rows.len().saturating_sub(1));
            }
            Err(e) => self.fail("findAllByProduct", &e),
        }
    }

    fn fail(&mut self, operation: &str, error: &ApiError) {
        if let Some(alert) = self.reporter.report(&self.nav, operation, error)
            && self.overlay.is_none()
        {
            self.overlay = Some(alert);
        }
    }

    /// Opens the "added to cart" dialog; closing it moves on to the cart.
    fn add_to_cart(&mut self) {
        let name = self.name.as_deref().unwrap_or("Product");
        let overlay = Overlay::notice(
            &self.nav,
            "Product added",
            &format!("{name} was added to your cart."),
        );
        self.nav.navigate_on_close(&overlay, Route::Cart);
        self.overlay = Some(overlay);
    }

    pub fn handle(&mut self, action: Action) {
        if dismiss_overlay(&mut self.overlay, action) {
            return;
        }

        match action {
            Action::Back => self.nav.back(),
            Action::Confirm => self.add_to_cart(),
            Action::Reload => self.load(),
            Action::Up => self.selected = self.selected.saturating_sub(1),
            Action::Down => {
                if self.selected + 1 < self.details.len() {
                    self.selected += 1;
                }
            }
        }
    }
}
