//! Saved delivery addresses. Failures here are logged, not alerted.

use std::sync::Arc;

use crate::api::{Address, ApiError, ApiResult, Catalog, require};
use crate::core::bridge::Pending;
use crate::core::diff::{Keyed, ListModel};
use crate::core::navigation::NavHandle;
use crate::core::overlay::Overlay;
use crate::core::report::{FailureReporter, Presentation};

use super::{Action, dismiss_overlay};

#[derive(Debug, Clone, PartialEq)]
pub struct AddressLine {
    key: String,
    pub name: String,
    /// Street, number and city, whichever are present.
    pub detail: String,
}

impl AddressLine {
    fn from_address(address: &Address) -> ApiResult<Self> {
        let name = require(&address.name, "name")?.clone();
        let detail = [&address.street, &address.number, &address.city]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let key = address
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| name.clone());
        Ok(Self { key, name, detail })
    }
}

impl Keyed for AddressLine {
    type Key = String;
    fn key(&self) -> &String {
        &self.key
    }
}

pub struct AddressScreen {
    catalog: Arc<dyn Catalog>,
    nav: NavHandle,
    reporter: FailureReporter,
    request: Option<Pending<Vec<Address>>>,
    /// Name of the first saved address, once loaded.
    pub primary: Option<String>,
    pub addresses: ListModel<AddressLine>,
    pub loaded: bool,
    pub selected: usize,
    pub overlay: Option<Overlay>,
}

impl AddressScreen {
    pub fn new(catalog: Arc<dyn Catalog>, nav: NavHandle) -> Self {
        let mut screen = Self {
            catalog,
            nav,
            reporter: FailureReporter::new("address", Presentation::Silent),
            request: None,
            primary: None,
            addresses: ListModel::new(),
            loaded: false,
            selected: 0,
            overlay: None,
        };
        screen.load();
        screen
    }

    pub fn load(&mut self) {
        let catalog = self.catalog.clone();
        self.request = Some(Pending::spawn("address.findAll", async move {
            catalog.addresses().await
        }));
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_some()
    }

    pub fn poll(&mut self) -> bool {
        let Some(outcome) = self.request.as_mut().and_then(Pending::poll) else {
            return false;
        };
        self.request = None;

        let lines = outcome.and_then(|addresses| {
            addresses
                .iter()
                .map(AddressLine::from_address)
                .collect::<ApiResult<Vec<_>>>()
        });
        match lines {
            Ok(lines) => {
                self.addresses.apply(&lines);
                self.primary = lines.first().map(|line| line.name.clone());
                self.loaded = true;
                self.selected = self.selected.min(lines.len().saturating_sub(1));
            }
            Err(e) => self.fail("findAll", &e),
        }
        true
    }

    fn fail(&mut self, operation: &str, error: &ApiError) {
        if let Some(alert) = self.reporter.report(&self.nav, operation, error)
            && self.overlay.is_none()
        {
            self.overlay = Some(alert);
        }
    }

    pub fn handle(&mut self, action: Action) {
        if dismiss_overlay(&mut self.overlay, action) {
            return;
        }

        match action {
            Action::Back => self.nav.back(),
            Action::Reload => self.load(),
            Action::Up => self.selected = self.selected.saturating_sub(1),
            Action::Down => {
                if self.selected + 1 < self.addresses.len() {
                    self.selected += 1;
                }
            }
            Action::Confirm => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubCatalog, id, nav_channel};
    use std::time::Duration;

    async fn settle(screen: &mut AddressScreen) {
        while screen.is_loading() {
            screen.poll();
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    fn home() -> Address {
        Address {
            id: Some(id("a1")),
            name: Some("Home".into()),
            street: Some("Rua das Flores".into()),
            number: Some("42".into()),
            city: None,
        }
    }

    #[tokio::test]
    async fn test_first_address_becomes_primary() {
        let work = Address {
            id: Some(id("a2")),
            name: Some("Work".into()),
            ..Default::default()
        };
        let catalog = StubCatalog {
            addresses: Some(Ok(vec![home(), work])),
            ..Default::default()
        };
        let mut screen = AddressScreen::new(catalog.shared(), nav_channel().0);
        settle(&mut screen).await;

        assert_eq!(screen.primary.as_deref(), Some("Home"));
        assert_eq!(screen.addresses.len(), 2);
        assert_eq!(screen.addresses.items()[0].detail, "Rua das Flores, 42");
        assert_eq!(screen.addresses.items()[1].detail, "");
    }

    #[tokio::test]
    async fn test_empty_list_has_no_primary() {
        let catalog = StubCatalog {
            addresses: Some(Ok(vec![])),
            ..Default::default()
        };
        let mut screen = AddressScreen::new(catalog.shared(), nav_channel().0);
        settle(&mut screen).await;

        assert!(screen.loaded);
        assert!(screen.primary.is_none());
    }

    #[tokio::test]
    async fn test_failure_is_silent() {
        let catalog = StubCatalog {
            addresses: Some(Err(ApiError::Network("refused".into()))),
            ..Default::default()
        };
        let mut screen = AddressScreen::new(catalog.shared(), nav_channel().0);
        settle(&mut screen).await;

        assert!(!screen.loaded);
        assert!(screen.overlay.is_none());
        assert!(screen.primary.is_none());
    }
}
