//! Catalog operations keyed by product name.

use rust_decimal::Decimal;

use super::errors::InventoryError;
use super::product::Product;
use crate::collections::BucketedSortedMap;

/// All products, keyed by name.
pub type Catalog = BucketedSortedMap<String, Product>;

/// The product catalog together with the operations the command layer needs.
///
/// Every operation reaches the catalog only through `get`, `put`, and
/// `remove`. Updates read a product, change a copy, and write the copy back,
/// so a failed update leaves the catalog as it was.
///
/// # Examples
///
/// ```rust
/// use stockroom::inventory::Inventory;
///
/// let mut inventory = Inventory::new();
/// inventory.add_product("widget").unwrap();
/// inventory.increase_inventory("widget", 5).unwrap();
///
/// assert_eq!(inventory.product("widget").unwrap().amount(), 5);
/// assert!(inventory.add_product("widget").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    catalog: Catalog,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing catalog, e.g. one loaded from storage.
    #[must_use]
    pub const fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the underlying catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the number of products.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns `true` if no products are tracked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Looks up a product by name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] if no such product exists.
    pub fn product(&self, name: &str) -> Result<&Product, InventoryError> {
        self.catalog
            .get(name)
            .map_err(|_| InventoryError::ProductNotFound(name.to_string()))
    }

    /// Returns a snapshot of all products in catalog traversal order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.catalog.values()
    }

    /// Returns every product name in ascending order.
    #[must_use]
    pub fn product_names_sorted(&self) -> Vec<String> {
        let mut names = self.catalog.keys();
        names.sort_unstable();
        names
    }

    /// Adds an empty product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductExists`] if the name is taken.
    pub fn add_product(&mut self, name: &str) -> Result<&Product, InventoryError> {
        if self.catalog.contains_key(name) {
            return Err(InventoryError::ProductExists(name.to_string()));
        }
        self.catalog.put(name.to_string(), Product::new(name));
        self.product(name)
    }

    /// Removes a product and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] if no such product exists.
    pub fn remove_product(&mut self, name: &str) -> Result<Product, InventoryError> {
        self.catalog
            .remove(name)
            .map_err(|_| InventoryError::ProductNotFound(name.to_string()))
    }

    /// Applies `change` to a copy of the named product and stores the copy
    /// only if `change` succeeds.
    fn update<T>(
        &mut self,
        name: &str,
        change: impl FnOnce(&mut Product) -> Result<T, InventoryError>,
    ) -> Result<T, InventoryError> {
        let mut product = self.product(name)?.clone();
        let output = change(&mut product)?;
        self.catalog.put(name.to_string(), product);
        Ok(output)
    }

    /// Adds a supplier to a product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] or [`InventoryError::SupplierExists`].
    pub fn add_supplier(&mut self, name: &str, supplier: &str) -> Result<(), InventoryError> {
        self.update(name, |product| product.add_supplier(supplier))
    }

    /// Removes a supplier from a product and returns its stored spelling.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] or [`InventoryError::SupplierNotFound`].
    pub fn remove_supplier(&mut self, name: &str, supplier: &str) -> Result<String, InventoryError> {
        self.update(name, |product| product.remove_supplier(supplier))
    }

    /// Replaces the stock amount of a product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`].
    pub fn set_inventory(&mut self, name: &str, amount: u32) -> Result<u32, InventoryError> {
        self.update(name, |product| Ok(product.set_inventory(amount)))
    }

    /// Adds to the stock amount of a product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] or [`InventoryError::InventoryOverflow`].
    pub fn increase_inventory(&mut self, name: &str, amount: u32) -> Result<u32, InventoryError> {
        self.update(name, |product| product.increase_inventory(amount))
    }

    /// Removes from the stock amount of a product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] or [`InventoryError::InsufficientInventory`].
    pub fn decrease_inventory(&mut self, name: &str, amount: u32) -> Result<u32, InventoryError> {
        self.update(name, |product| product.decrease_inventory(amount))
    }

    /// Replaces the price of a product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] or [`InventoryError::InvalidPrice`].
    pub fn set_price(&mut self, name: &str, price: Decimal) -> Result<Decimal, InventoryError> {
        self.update(name, |product| product.set_price(price))
    }

    /// Raises the price of a product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`], [`InventoryError::PriceNotSet`],
    /// or [`InventoryError::InvalidPrice`].
    pub fn increase_price(&mut self, name: &str, delta: Decimal) -> Result<Decimal, InventoryError> {
        self.update(name, |product| product.increase_price(delta))
    }

    /// Lowers the price of a product.
    ///
    /// # Errors
    ///
    /// Same as [`Inventory::increase_price`].
    pub fn decrease_price(&mut self, name: &str, delta: Decimal) -> Result<Decimal, InventoryError> {
        self.update(name, |product| product.decrease_price(delta))
    }
}

impl From<Catalog> for Inventory {
    fn from(catalog: Catalog) -> Self {
        Self::from_catalog(catalog)
    }
}
