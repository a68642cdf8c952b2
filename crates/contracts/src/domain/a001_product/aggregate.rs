use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Stock row
// ============================================================================
/// Одна строка склада: товар с кодом и остатками
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,

    /// Product code, e.g. "EUK042137"; blank codes are generated on add
    #[serde(rename = "productCode")]
    pub product_code: String,

    /// Display name of the item; unique within the stock list
    #[serde(rename = "itemName")]
    pub item_name: String,

    #[serde(rename = "quantity", default)]
    pub quantity: i64,

    #[serde(rename = "lowThreshold", default = "default_low_threshold")]
    pub low_threshold: i64,

    #[serde(rename = "onOrder", default)]
    pub on_order: bool,
}

fn default_low_threshold() -> i64 {
    5
}

impl Product {
    pub fn new(product_code: String, item_name: String, quantity: i64) -> Self {
        Self {
            id: ProductId::new_v4(),
            product_code,
            item_name,
            quantity,
            low_threshold: default_low_threshold(),
            on_order: false,
        }
    }

    /// Row is flagged when the quantity has fallen to the threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_includes_the_threshold_itself() {
        let mut product = Product::new("EUK000001".into(), "Widget".into(), 5);
        assert!(product.is_low_stock());

        product.quantity = 6;
        assert!(!product.is_low_stock());

        product.quantity = 0;
        assert!(product.is_low_stock());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let product = Product {
            id: ProductId::new(Uuid::nil()),
            product_code: "EUK000001".into(),
            item_name: "Widget".into(),
            quantity: 3,
            low_threshold: 5,
            on_order: true,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productCode"], "EUK000001");
        assert_eq!(json["itemName"], "Widget");
        assert_eq!(json["lowThreshold"], 5);
        assert_eq!(json["onOrder"], true);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "productCode": "EUK000001",
            "itemName": "Widget"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.quantity, 0);
        assert_eq!(product.low_threshold, 5);
        assert!(!product.on_order);
    }
}
