//! Inventory error types.
//!
//! # Error Categories
//!
//! - [`InventoryError::ProductNotFound`] / [`InventoryError::ProductExists`]: catalog membership
//! - [`InventoryError::SupplierNotFound`] / [`InventoryError::SupplierExists`]: supplier list membership
//! - [`InventoryError::InsufficientInventory`] / [`InventoryError::InventoryOverflow`]: stock arithmetic
//! - [`InventoryError::InvalidPrice`] / [`InventoryError::PriceOverflow`] / [`InventoryError::PriceNotSet`]: price arithmetic
//!
//! Every failing operation leaves the catalog unchanged.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by [`Product`](super::Product) and [`Inventory`](super::Inventory) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No product with this name exists.
    #[error("Product \"{0}\" does not exist")]
    ProductNotFound(String),

    /// A product with this name already exists.
    #[error("Product \"{0}\" already exists")]
    ProductExists(String),

    /// The product has no supplier with this name.
    #[error("Supplier \"{supplier}\" does not exist for product \"{product}\"")]
    SupplierNotFound {
        /// Name of the product that was searched.
        product: String,
        /// Name of the missing supplier.
        supplier: String,
    },

    /// The product already lists this supplier (compared ignoring case).
    #[error("Supplier \"{supplier}\" already exists for product \"{product}\"")]
    SupplierExists {
        /// Name of the product.
        product: String,
        /// Name of the duplicate supplier.
        supplier: String,
    },

    /// A decrease asked for more stock than is available.
    #[error("Product \"{product}\" does not have enough inventory: requested {requested}, available {available}")]
    InsufficientInventory {
        /// Name of the product.
        product: String,
        /// Amount that was requested.
        requested: u32,
        /// Amount currently in stock.
        available: u32,
    },

    /// An increase would exceed the representable stock amount.
    #[error("Inventory of product \"{product}\" cannot exceed {}", u32::MAX)]
    InventoryOverflow {
        /// Name of the product.
        product: String,
    },

    /// The resulting price would be negative.
    #[error("Invalid price for product \"{product}\": {price}")]
    InvalidPrice {
        /// Name of the product.
        product: String,
        /// The rejected price.
        price: Decimal,
    },

    /// A relative price change would exceed the representable price range.
    #[error("Price of product \"{product}\" cannot exceed {}", Decimal::MAX)]
    PriceOverflow {
        /// Name of the product.
        product: String,
    },

    /// A relative price change was requested before any price was set.
    #[error("Product \"{0}\" has no price set")]
    PriceNotSet(String),
}

impl InventoryError {
    /// Returns `true` if this error reports a missing product or supplier.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProductNotFound(_) | Self::SupplierNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn product_not_found_display() {
        let error = InventoryError::ProductNotFound("widget".to_string());
        assert_eq!(format!("{error}"), "Product \"widget\" does not exist");
    }

    #[rstest]
    fn insufficient_inventory_display() {
        let error = InventoryError::InsufficientInventory {
            product: "widget".to_string(),
            requested: 5,
            available: 2,
        };
        assert_eq!(
            format!("{error}"),
            "Product \"widget\" does not have enough inventory: requested 5, available 2"
        );
    }

    #[rstest]
    fn overflow_display_names_the_limit() {
        let error = InventoryError::InventoryOverflow {
            product: "widget".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "Inventory of product \"widget\" cannot exceed 4294967295"
        );
    }

    #[rstest]
    #[case(InventoryError::ProductNotFound("a".to_string()), true)]
    #[case(InventoryError::SupplierNotFound { product: "a".to_string(), supplier: "b".to_string() }, true)]
    #[case(InventoryError::ProductExists("a".to_string()), false)]
    #[case(InventoryError::PriceNotSet("a".to_string()), false)]
    fn is_not_found_classification(#[case] error: InventoryError, #[case] expected: bool) {
        assert_eq!(error.is_not_found(), expected);
    }
}
