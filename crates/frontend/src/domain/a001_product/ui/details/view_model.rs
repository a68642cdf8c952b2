//! ViewModel for the product form.
//!
//! Holds every form field as an individual RwSignal for two-way binding
//! plus the submit command. The stock list itself is owned by the app
//! shell and shared with the list view.

use contracts::domain::a001_product::{CodeFormat, Product, PRODUCT_CODE_FORMAT};
use leptos::prelude::*;

/// Parse a count field. Blank means "use the default"; anything else must
/// be a whole number.
fn parse_count(raw: &str, default: i64) -> Result<i64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("`{}` is not a whole number", trimmed))
}

fn random_digit() -> u8 {
    (js_sys::Math::random() * 10.0) as u8
}

#[derive(Clone, Copy)]
pub struct ProductFormVm {
    // === Form fields (individual RwSignals) ===
    pub product_code: RwSignal<String>,
    pub item_name: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub low_threshold: RwSignal<String>,
    pub on_order: RwSignal<bool>,

    // === UI state ===
    pub error: RwSignal<Option<String>>,

    /// Session stock list, shared with the list view.
    pub stock: RwSignal<Vec<Product>>,
}

impl ProductFormVm {
    pub fn new(stock: RwSignal<Vec<Product>>) -> Self {
        Self {
            product_code: RwSignal::new(String::new()),
            item_name: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            low_threshold: RwSignal::new(String::new()),
            on_order: RwSignal::new(false),
            error: RwSignal::new(None),
            stock,
        }
    }

    /// Append the current form contents to the stock list. Runs after the
    /// submission gate has allowed the submit, so a blank code means the
    /// user already agreed to auto-generation.
    pub fn submit(&self) {
        self.error.set(None);

        let item_name = self.item_name.get().trim().to_string();
        if item_name.is_empty() {
            self.error.set(Some("Item name is required".to_string()));
            return;
        }

        // Item names are unique in the stock list; a duplicate is a
        // visible error, not a silent no-op.
        let duplicate = self
            .stock
            .with(|rows| rows.iter().any(|p| p.item_name == item_name));
        if duplicate {
            self.error
                .set(Some(format!("\"{}\" is already in the stock list", item_name)));
            return;
        }

        let quantity = match parse_count(&self.quantity.get(), 0) {
            Ok(value) => value,
            Err(e) => {
                self.error.set(Some(format!("Quantity: {}", e)));
                return;
            }
        };

        let low_threshold = match parse_count(&self.low_threshold.get(), 5) {
            Ok(value) => value,
            Err(e) => {
                self.error.set(Some(format!("Low threshold: {}", e)));
                return;
            }
        };

        let mut product_code = self.product_code.get().trim().to_string();
        if product_code.is_empty() {
            let format = CodeFormat::parse(PRODUCT_CODE_FORMAT);
            product_code = format.generate_unique_with(
                |candidate| {
                    self.stock
                        .with(|rows| rows.iter().any(|p| p.product_code == candidate))
                },
                random_digit,
            );
            log::debug!("generated product code {} for {}", product_code, item_name);
        }

        let mut product = Product::new(product_code, item_name, quantity);
        product.low_threshold = low_threshold;
        product.on_order = self.on_order.get();

        self.stock.update(|rows| rows.push(product));
        self.clear();
    }

    fn clear(&self) {
        self.product_code.set(String::new());
        self.item_name.set(String::new());
        self.quantity.set(String::new());
        self.low_threshold.set(String::new());
        self.on_order.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_counts_fall_back_to_defaults() {
        assert_eq!(parse_count("", 0), Ok(0));
        assert_eq!(parse_count("   ", 5), Ok(5));
    }

    #[test]
    fn counts_parse_with_surrounding_whitespace() {
        assert_eq!(parse_count(" 12 ", 0), Ok(12));
        assert_eq!(parse_count("-3", 0), Ok(-3));
    }

    #[test]
    fn non_numeric_counts_are_rejected() {
        assert!(parse_count("many", 0).is_err());
        assert!(parse_count("1.5", 0).is_err());
    }
}
