//! Line commands accepted by the inventory tool.
//!
//! # Command Processing Pipeline
//!
//! 1. A raw input line is parsed into a [`Command`] by [`parse`]
//! 2. [`dispatch`] applies the command to an [`Inventory`](crate::inventory::Inventory)
//!    and returns a [`Reply`] with the lines to print
//!
//! # Examples
//!
//! ```rust
//! use stockroom::command::{dispatch, parse, Command};
//! use stockroom::inventory::Inventory;
//!
//! let mut inventory = Inventory::new();
//! let command = parse("addproduct widget").unwrap().unwrap();
//! assert_eq!(command, Command::AddProduct { name: "widget".to_string() });
//!
//! let reply = dispatch(&command, &mut inventory).unwrap();
//! assert!(reply.mutated);
//! assert_eq!(reply.lines, vec!["Added product \"widget\"".to_string()]);
//! ```

mod dispatcher;
mod errors;
mod parser;

use rust_decimal::Decimal;

pub use dispatcher::Reply;
pub use dispatcher::dispatch;
pub use dispatcher::help_lines;
pub use errors::Argument;
pub use errors::ParseError;
pub use parser::parse;

// =============================================================================
// Command
// =============================================================================

/// Every command the tool understands.
///
/// Verbs are matched ignoring case; product and supplier names are single
/// whitespace-free words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the command list.
    Help,
    /// Leave the session.
    Exit,
    /// Print one product.
    DisplayProduct {
        /// Product name.
        name: String,
    },
    /// Print the names of all products.
    DisplayAllProducts,
    /// Create an empty product.
    AddProduct {
        /// Product name.
        name: String,
    },
    /// Delete a product.
    RemoveProduct {
        /// Product name.
        name: String,
    },
    /// Add a supplier to a product.
    AddSupplier {
        /// Product name.
        product: String,
        /// Supplier name.
        supplier: String,
    },
    /// Remove a supplier from a product.
    RemoveSupplier {
        /// Product name.
        product: String,
        /// Supplier name.
        supplier: String,
    },
    /// Replace the stock amount.
    SetInventory {
        /// Product name.
        name: String,
        /// New amount.
        amount: u32,
    },
    /// Add to the stock amount.
    IncreaseInventory {
        /// Product name.
        name: String,
        /// Amount to add.
        amount: u32,
    },
    /// Remove from the stock amount.
    DecreaseInventory {
        /// Product name.
        name: String,
        /// Amount to remove.
        amount: u32,
    },
    /// Replace the price.
    SetPrice {
        /// Product name.
        name: String,
        /// New price.
        price: Decimal,
    },
    /// Raise the price.
    IncreasePrice {
        /// Product name.
        name: String,
        /// Amount to add to the price.
        delta: Decimal,
    },
    /// Lower the price.
    DecreasePrice {
        /// Product name.
        name: String,
        /// Amount to subtract from the price.
        delta: Decimal,
    },
}

impl Command {
    /// Returns `true` for commands that may change the catalog.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Self::Help | Self::Exit | Self::DisplayProduct { .. } | Self::DisplayAllProducts
        )
    }
}
