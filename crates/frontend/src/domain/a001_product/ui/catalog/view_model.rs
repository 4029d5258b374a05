//! ViewModel for the product catalog page
//!
//! The controller from `contracts` owns all state and rules; this type only
//! exposes it as signals and forwards every outcome to the toast service.

use crate::shared::toast::ToastService;
use contracts::domain::a001_product::aggregate::{Product, ProductField};
use contracts::domain::a001_product::catalog::{CatalogError, CatalogEvent, ProductCatalog};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductCatalogVm {
    pub catalog: RwSignal<ProductCatalog>,
    toast: ToastService,
}

impl ProductCatalogVm {
    pub fn new(toast: ToastService) -> Self {
        Self {
            catalog: RwSignal::new(ProductCatalog::new()),
            toast,
        }
    }

    // === Derived signals ===

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let catalog = self.catalog;
        Signal::derive(move || catalog.with(|c| c.session().is_editing()))
    }

    pub fn products(&self) -> Signal<Vec<Product>> {
        let catalog = self.catalog;
        Signal::derive(move || catalog.with(|c| c.products().to_vec()))
    }

    pub fn field_value(&self, field: ProductField) -> Signal<String> {
        let catalog = self.catalog;
        Signal::derive(move || catalog.with(|c| c.form().get(field).to_string()))
    }

    /// Field-level error text, present once the field was touched
    pub fn field_error(&self, field: ProductField) -> Signal<Option<String>> {
        let catalog = self.catalog;
        Signal::derive(move || catalog.with(|c| c.form().visible_error(field)))
    }

    // === Commands ===

    pub fn set_field(&self, field: ProductField, text: String) {
        self.catalog.update(|c| c.form_mut().set(field, text));
    }

    pub fn submit_command(&self) {
        if let Some(event) = self.catalog.try_update(|c| c.submit()) {
            self.notify(event);
        }
    }

    pub fn edit_command(&self, index: usize) {
        let result = self.catalog.try_update(|c| c.start_edit(index));
        self.handle(result);
    }

    pub fn cancel_command(&self) {
        if let Some(event) = self.catalog.try_update(|c| c.cancel_edit()) {
            self.notify(event);
        }
    }

    pub fn remove_command(&self, index: usize) {
        let result = self.catalog.try_update(|c| c.remove_at(index));
        self.handle(result);
    }

    fn handle(&self, result: Option<Result<CatalogEvent, CatalogError>>) {
        match result {
            Some(Ok(event)) => self.notify(event),
            // Stale row index from a previous render; nothing was changed.
            Some(Err(e)) => log::error!("{}", e),
            None => {}
        }
    }

    fn notify(&self, event: CatalogEvent) {
        self.toast.show(event.message(), event.is_error());
    }
}
