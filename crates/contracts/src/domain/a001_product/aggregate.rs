use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Product entry of the catalog.
///
/// Has no identity of its own: a product is addressed by its position in the
/// catalog, and `code` is not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "costo")]
    pub cost: f64,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "valor")]
    pub value: f64,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, cost: f64, price: f64, value: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            cost,
            price,
            value,
        }
    }

    /// Raw form text for a field, as it is loaded back into the editor
    pub fn field_text(&self, field: ProductField) -> String {
        match field {
            ProductField::Code => self.code.clone(),
            ProductField::Name => self.name.clone(),
            ProductField::Cost => self.cost.to_string(),
            ProductField::Price => self.price.to_string(),
            ProductField::Value => self.value.to_string(),
        }
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Editable fields of a product, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductField {
    Code,
    Name,
    Cost,
    Price,
    Value,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Code,
        ProductField::Name,
        ProductField::Cost,
        ProductField::Price,
        ProductField::Value,
    ];

    /// Wire name of the field
    pub const fn key(self) -> &'static str {
        match self {
            ProductField::Code => "codigo",
            ProductField::Name => "nombre",
            ProductField::Cost => "costo",
            ProductField::Price => "precio",
            ProductField::Value => "valor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProductField::Code => "Code",
            ProductField::Name => "Name",
            ProductField::Cost => "Cost",
            ProductField::Price => "Price",
            ProductField::Value => "Value",
        }
    }

    /// Numeric fields are entered as text and parsed on validation
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            ProductField::Cost | ProductField::Price | ProductField::Value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let product = Product::new("A001", "Widget", 5.0, 20.0, 3.0);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["codigo"], "A001");
        assert_eq!(json["nombre"], "Widget");
        assert_eq!(json["precio"], 20.0);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_field_text() {
        let product = Product::new("B12", "Gadget", 0.5, 10.0, 0.0);
        assert_eq!(product.field_text(ProductField::Code), "B12");
        assert_eq!(product.field_text(ProductField::Cost), "0.5");
        assert_eq!(product.field_text(ProductField::Price), "10");
    }
}
