//! Catalog controller: the product list, the form and the edit session
//!
//! All operations are synchronous. Every successful operation returns the
//! `CatalogEvent` whose message the presentation layer shows to the user.

use super::aggregate::Product;
use super::form::ProductForm;
use thiserror::Error;

/// Whether the form describes a new product or an existing catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        index: usize,
    },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn edit_index(&self) -> Option<usize> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { index } => Some(*index),
        }
    }
}

/// Outcome of a controller operation, reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    Added,
    Updated,
    Editing,
    EditCancelled,
    Removed,
    FormInvalid,
}

impl CatalogEvent {
    pub const fn message(self) -> &'static str {
        match self {
            CatalogEvent::Added => "Product added successfully",
            CatalogEvent::Updated => "Product updated successfully",
            CatalogEvent::Editing => "Editing product...",
            CatalogEvent::EditCancelled => "Edit cancelled",
            CatalogEvent::Removed => "Product removed successfully",
            CatalogEvent::FormInvalid => "Please correct the form errors",
        }
    }

    pub const fn is_error(self) -> bool {
        matches!(self, CatalogEvent::FormInvalid)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product index {index} is out of range (catalog has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    form: ProductForm,
    session: EditSession,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    /// Validate the form and add or replace the product it describes
    pub fn submit(&mut self) -> CatalogEvent {
        let product = match self.form.to_product() {
            Ok(product) => product,
            Err(errors) => {
                log::warn!(
                    "product form rejected: {}",
                    errors
                        .iter()
                        .map(|(field, failure)| format!("{}={}", field.key(), failure.key()))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                self.form.mark_all_touched();
                return CatalogEvent::FormInvalid;
            }
        };

        let event = match self.session {
            EditSession::Editing { index } if index < self.products.len() => {
                log::debug!("replacing product at {}: {}", index, product.code);
                self.products[index] = product;
                CatalogEvent::Updated
            }
            EditSession::Editing { index } => {
                // remove_at keeps the tracked index in range
                log::error!("edit index {} no longer exists, appending instead", index);
                self.products.push(product);
                CatalogEvent::Added
            }
            EditSession::Idle => {
                log::debug!("adding product {}", product.code);
                self.products.push(product);
                CatalogEvent::Added
            }
        };

        self.session = EditSession::Idle;
        self.form.reset();
        event
    }

    /// Load the product at `index` into the form and track it for replacement
    pub fn start_edit(&mut self, index: usize) -> Result<CatalogEvent, CatalogError> {
        let product = self.products.get(index).ok_or_else(|| self.out_of_range(index))?;

        log::debug!("editing product at {}: {}", index, product.code);
        let mut form = ProductForm::new();
        form.patch(product);
        self.form = form;
        self.session = EditSession::Editing { index };
        Ok(CatalogEvent::Editing)
    }

    /// Discard the form and leave the catalog untouched
    pub fn cancel_edit(&mut self) -> CatalogEvent {
        log::debug!("edit cancelled");
        self.form.reset();
        self.session = EditSession::Idle;
        CatalogEvent::EditCancelled
    }

    /// Remove the product at `index`; later products shift down by one.
    ///
    /// The edit session follows the removal: removing the edited product ends
    /// the session and clears the form, removing an earlier one shifts the
    /// tracked index so a later submit replaces the same product.
    pub fn remove_at(&mut self, index: usize) -> Result<CatalogEvent, CatalogError> {
        if index >= self.products.len() {
            return Err(self.out_of_range(index));
        }

        let removed = self.products.remove(index);
        log::debug!("removed product at {}: {}", index, removed.code);

        if let EditSession::Editing { index: editing } = self.session {
            if editing == index {
                self.session = EditSession::Idle;
                self.form.reset();
            } else if editing > index {
                self.session = EditSession::Editing { index: editing - 1 };
            }
        }

        Ok(CatalogEvent::Removed)
    }

    fn out_of_range(&self, index: usize) -> CatalogError {
        let err = CatalogError::IndexOutOfRange {
            index,
            len: self.products.len(),
        };
        log::warn!("{}", err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::ProductField;

    fn sample(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product::new(format!("P{}", i), format!("Product {}", i), 1.0 + i as f64, 20.0, 0.0))
            .collect()
    }

    fn fill(catalog: &mut ProductCatalog, code: &str, name: &str, cost: &str, price: &str, value: &str) {
        let form = catalog.form_mut();
        form.set(ProductField::Code, code);
        form.set(ProductField::Name, name);
        form.set(ProductField::Cost, cost);
        form.set(ProductField::Price, price);
        form.set(ProductField::Value, value);
    }

    #[test]
    fn test_session_starts_idle() {
        let catalog = ProductCatalog::new();
        assert!(catalog.is_empty());
        assert!(!catalog.session().is_editing());
        assert_eq!(catalog.session().edit_index(), None);
    }

    #[test]
    fn test_submit_valid_product_appends() {
        let mut catalog = ProductCatalog::with_products(sample(2));
        fill(&mut catalog, "A001", "Keyboard", "12.5", "40", "3");

        assert_eq!(catalog.submit(), CatalogEvent::Added);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[2], Product::new("A001", "Keyboard", 12.5, 40.0, 3.0));
        assert!(catalog.form().is_empty());
        assert!(!catalog.form().is_touched(ProductField::Code));
    }

    #[test]
    fn test_submit_invalid_form_leaves_catalog() {
        let mut catalog = ProductCatalog::with_products(sample(1));
        fill(&mut catalog, "1A01", "Keyboard", "12.5", "40", "3");

        let event = catalog.submit();
        assert_eq!(event, CatalogEvent::FormInvalid);
        assert!(event.is_error());
        assert_eq!(event.message(), "Please correct the form errors");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.form().get(ProductField::Code), "1A01");
        assert!(ProductField::ALL.iter().all(|f| catalog.form().is_touched(*f)));
    }

    #[test]
    fn test_submit_empty_form_marks_all_touched() {
        let mut catalog = ProductCatalog::new();
        assert_eq!(catalog.submit(), CatalogEvent::FormInvalid);
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.form().visible_error(ProductField::Value).as_deref(),
            Some("Value is required")
        );
    }

    #[test]
    fn test_edit_then_submit_replaces_in_place() {
        let mut catalog = ProductCatalog::with_products(sample(3));

        assert_eq!(catalog.start_edit(2), Ok(CatalogEvent::Editing));
        assert_eq!(catalog.session(), EditSession::Editing { index: 2 });
        assert_eq!(catalog.form().get(ProductField::Code), "P2");
        assert_eq!(catalog.len(), 3);

        catalog.form_mut().set(ProductField::Name, "Renamed product");
        catalog.form_mut().set(ProductField::Price, "55");
        assert_eq!(catalog.submit(), CatalogEvent::Updated);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[2].name, "Renamed product");
        assert_eq!(catalog.products()[2].price, 55.0);
        assert_eq!(catalog.products()[1], sample(3)[1]);
        assert_eq!(catalog.session(), EditSession::Idle);
        assert!(catalog.form().is_empty());
    }

    #[test]
    fn test_invalid_submit_keeps_edit_session() {
        let mut catalog = ProductCatalog::with_products(sample(2));
        catalog.start_edit(0).unwrap();
        catalog.form_mut().set(ProductField::Cost, "0");

        assert_eq!(catalog.submit(), CatalogEvent::FormInvalid);
        assert_eq!(catalog.session().edit_index(), Some(0));
        assert_eq!(catalog.products()[0], sample(2)[0]);
    }

    #[test]
    fn test_cancel_edit_discards_form() {
        let mut catalog = ProductCatalog::with_products(sample(2));
        catalog.start_edit(1).unwrap();
        catalog.form_mut().set(ProductField::Name, "Changed name");

        assert_eq!(catalog.cancel_edit(), CatalogEvent::EditCancelled);
        assert_eq!(catalog.session(), EditSession::Idle);
        assert!(catalog.form().is_empty());
        assert_eq!(catalog.products(), sample(2).as_slice());
    }

    #[test]
    fn test_remove_shifts_following_items() {
        let mut catalog = ProductCatalog::with_products(sample(3));
        assert_eq!(catalog.remove_at(1), Ok(CatalogEvent::Removed));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].code, "P2");
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut catalog = ProductCatalog::with_products(sample(2));
        assert_eq!(
            catalog.start_edit(2),
            Err(CatalogError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            catalog.remove_at(5),
            Err(CatalogError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.session(), EditSession::Idle);
    }

    #[test]
    fn test_removing_edited_item_ends_session() {
        let mut catalog = ProductCatalog::with_products(sample(3));
        catalog.start_edit(1).unwrap();
        catalog.remove_at(1).unwrap();

        assert_eq!(catalog.session(), EditSession::Idle);
        assert!(catalog.form().is_empty());
    }

    #[test]
    fn test_removing_earlier_item_shifts_edit_index() {
        let mut catalog = ProductCatalog::with_products(sample(3));
        catalog.start_edit(2).unwrap();
        catalog.remove_at(0).unwrap();
        assert_eq!(catalog.session().edit_index(), Some(1));

        catalog.form_mut().set(ProductField::Name, "Still the same item");
        assert_eq!(catalog.submit(), CatalogEvent::Updated);
        assert_eq!(catalog.products()[1].code, "P2");
        assert_eq!(catalog.products()[1].name, "Still the same item");
        assert_eq!(catalog.products()[0].code, "P1");
    }

    #[test]
    fn test_removing_later_item_keeps_edit_index() {
        let mut catalog = ProductCatalog::with_products(sample(3));
        catalog.start_edit(0).unwrap();
        catalog.remove_at(2).unwrap();
        assert_eq!(catalog.session().edit_index(), Some(0));
        assert_eq!(catalog.form().get(ProductField::Code), "P0");
    }

    #[test]
    fn test_dangling_edit_index_appends() {
        let mut catalog = ProductCatalog::with_products(sample(1));
        catalog.session = EditSession::Editing { index: 4 };
        fill(&mut catalog, "A001", "Keyboard", "12.5", "40", "3");

        assert_eq!(catalog.submit(), CatalogEvent::Added);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0], sample(1)[0]);
        assert_eq!(catalog.session(), EditSession::Idle);
    }
}
