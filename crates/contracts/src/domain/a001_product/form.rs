//! Editable form state for a single product

use super::aggregate::{Product, ProductField};
use super::validation::{parse_number, validate_field, FieldFailure};
use std::collections::{BTreeMap, BTreeSet};

/// Failing fields of a form, in form order
pub type FormErrors = BTreeMap<ProductField, FieldFailure>;

/// Raw text of every field plus which fields the user has touched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    code: String,
    name: String,
    cost: String,
    price: String,
    value: String,
    touched: BTreeSet<ProductField>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Code => &self.code,
            ProductField::Name => &self.name,
            ProductField::Cost => &self.cost,
            ProductField::Price => &self.price,
            ProductField::Value => &self.value,
        }
    }

    /// Set raw input; the field counts as touched from now on
    pub fn set(&mut self, field: ProductField, text: impl Into<String>) {
        *self.slot_mut(field) = text.into();
        self.touched.insert(field);
    }

    /// Load a product's values without touching the fields
    pub fn patch(&mut self, product: &Product) {
        for field in ProductField::ALL {
            *self.slot_mut(field) = product.field_text(field);
        }
    }

    /// Clear every value and the touched state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.extend(ProductField::ALL);
    }

    pub fn is_touched(&self, field: ProductField) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        ProductField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn field_error(&self, field: ProductField) -> Option<FieldFailure> {
        validate_field(field, self.get(field))
    }

    pub fn errors(&self) -> FormErrors {
        ProductField::ALL
            .iter()
            .filter_map(|f| self.field_error(*f).map(|failure| (*f, failure)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        ProductField::ALL.iter().all(|f| self.field_error(*f).is_none())
    }

    /// Error text to render under a field, shown only once it was touched
    pub fn visible_error(&self, field: ProductField) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.field_error(field).map(|failure| failure.message(field))
    }

    /// Build a product from the current values
    pub fn to_product(&self) -> Result<Product, FormErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        let number = |field: ProductField| parse_number(self.get(field)).unwrap_or_default();
        Ok(Product {
            code: self.code.clone(),
            name: self.name.clone(),
            cost: number(ProductField::Cost),
            price: number(ProductField::Price),
            value: number(ProductField::Value),
        })
    }

    fn slot_mut(&mut self, field: ProductField) -> &mut String {
        match field {
            ProductField::Code => &mut self.code,
            ProductField::Name => &mut self.name,
            ProductField::Cost => &mut self.cost,
            ProductField::Price => &mut self.price,
            ProductField::Value => &mut self.value,
        }
    }
}
