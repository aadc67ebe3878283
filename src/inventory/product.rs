//! Inventory record stored in the catalog.

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::errors::InventoryError;
use super::suppliers::Suppliers;

/// A product tracked by the inventory: its name, stock amount, optional
/// unit price, and suppliers.
///
/// The name is the catalog key and never changes after construction.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use stockroom::inventory::Product;
///
/// let mut product = Product::new("widget")
///     .with_inventory(10)
///     .with_price(Decimal::new(1999, 2))
///     .with_supplier("Acme");
///
/// assert_eq!(product.decrease_inventory(4), Ok(6));
/// assert!(product.decrease_inventory(7).is_err());
/// assert_eq!(product.amount(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    name: String,
    inventory: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    price: Option<Decimal>,
    #[cfg_attr(feature = "serde", serde(default))]
    suppliers: Suppliers,
}

impl Product {
    /// Creates a product with no stock, no price, and no suppliers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: 0,
            price: None,
            suppliers: Suppliers::new(),
        }
    }

    /// Sets the initial stock amount.
    #[must_use]
    pub fn with_inventory(mut self, amount: u32) -> Self {
        self.inventory = amount;
        self
    }

    /// Sets the initial price.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Adds one supplier; duplicates are ignored.
    #[must_use]
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.suppliers.insert(supplier);
        self
    }

    /// Adds several suppliers; duplicates are ignored.
    #[must_use]
    pub fn with_suppliers<I, S>(mut self, suppliers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppliers.extend(suppliers);
        self
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the amount in stock.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.inventory
    }

    /// Returns the unit price, if one has been set.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Returns the supplier list.
    #[must_use]
    pub const fn suppliers(&self) -> &Suppliers {
        &self.suppliers
    }

    // -------------------------------------------------------------------------
    // Stock
    // -------------------------------------------------------------------------

    /// Replaces the stock amount and returns it.
    pub fn set_inventory(&mut self, amount: u32) -> u32 {
        self.inventory = amount;
        self.inventory
    }

    /// Adds `amount` to the stock and returns the new amount.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InventoryOverflow`] if the sum does not fit in a `u32`.
    pub fn increase_inventory(&mut self, amount: u32) -> Result<u32, InventoryError> {
        self.inventory = self.inventory.checked_add(amount).ok_or_else(|| {
            InventoryError::InventoryOverflow {
                product: self.name.clone(),
            }
        })?;
        Ok(self.inventory)
    }

    /// Removes `amount` from the stock and returns what is left.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InsufficientInventory`] if `amount` exceeds the stock.
    pub fn decrease_inventory(&mut self, amount: u32) -> Result<u32, InventoryError> {
        self.inventory = self.inventory.checked_sub(amount).ok_or_else(|| {
            InventoryError::InsufficientInventory {
                product: self.name.clone(),
                requested: amount,
                available: self.inventory,
            }
        })?;
        Ok(self.inventory)
    }

    // -------------------------------------------------------------------------
    // Price
    // -------------------------------------------------------------------------

    /// Replaces the price and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidPrice`] for a negative price.
    pub fn set_price(&mut self, price: Decimal) -> Result<Decimal, InventoryError> {
        if price < Decimal::ZERO {
            return Err(InventoryError::InvalidPrice {
                product: self.name.clone(),
                price,
            });
        }
        self.price = Some(price);
        Ok(price)
    }

    /// Raises the price by `delta` and returns the new price.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::PriceNotSet`] if no price exists yet,
    /// [`InventoryError::PriceOverflow`] if the result is out of range, or
    /// [`InventoryError::InvalidPrice`] if the result would be negative.
    pub fn increase_price(&mut self, delta: Decimal) -> Result<Decimal, InventoryError> {
        let price = self.current_price()?.checked_add(delta);
        self.set_adjusted_price(price)
    }

    /// Lowers the price by `delta` and returns the new price.
    ///
    /// # Errors
    ///
    /// Same as [`Product::increase_price`].
    pub fn decrease_price(&mut self, delta: Decimal) -> Result<Decimal, InventoryError> {
        let price = self.current_price()?.checked_sub(delta);
        self.set_adjusted_price(price)
    }

    fn current_price(&self) -> Result<Decimal, InventoryError> {
        self.price
            .ok_or_else(|| InventoryError::PriceNotSet(self.name.clone()))
    }

    fn set_adjusted_price(&mut self, price: Option<Decimal>) -> Result<Decimal, InventoryError> {
        let price = price.ok_or_else(|| InventoryError::PriceOverflow {
            product: self.name.clone(),
        })?;
        self.set_price(price)
    }

    // -------------------------------------------------------------------------
    // Suppliers
    // -------------------------------------------------------------------------

    /// Adds a supplier.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::SupplierExists`] if the name is already
    /// listed, ignoring case.
    pub fn add_supplier(&mut self, supplier: &str) -> Result<(), InventoryError> {
        if self.suppliers.insert(supplier) {
            Ok(())
        } else {
            Err(InventoryError::SupplierExists {
                product: self.name.clone(),
                supplier: supplier.to_string(),
            })
        }
    }

    /// Looks up a supplier, ignoring case, and returns its stored spelling.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::SupplierNotFound`] if it is not listed.
    pub fn supplier(&self, supplier: &str) -> Result<&str, InventoryError> {
        self.suppliers
            .get(supplier)
            .ok_or_else(|| self.supplier_not_found(supplier))
    }

    /// Removes a supplier and returns its stored spelling.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::SupplierNotFound`] if it is not listed.
    pub fn remove_supplier(&mut self, supplier: &str) -> Result<String, InventoryError> {
        self.suppliers
            .remove(supplier)
            .ok_or_else(|| self.supplier_not_found(supplier))
    }

    fn supplier_not_found(&self, supplier: &str) -> InventoryError {
        InventoryError::SupplierNotFound {
            product: self.name.clone(),
            supplier: supplier.to_string(),
        }
    }
}
