//! Errors produced while parsing a command line.

use std::fmt;

use thiserror::Error;

/// A positional argument a command can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// Name of a product.
    ProductName,
    /// Name of a supplier.
    SupplierName,
    /// Amount for `SETINVENTORY`.
    InventoryAmount,
    /// Amount for `INCREASEINVENTORY`.
    IncreaseAmount,
    /// Amount for `DECREASEINVENTORY`.
    DecreaseAmount,
    /// Price for `SETPRICE`.
    Price,
    /// Delta for `INCREASEPRICE` and `DECREASEPRICE`.
    PriceChange,
}

impl fmt::Display for Argument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ProductName => "product name",
            Self::SupplierName => "supplier name",
            Self::InventoryAmount => "inventory amount",
            Self::IncreaseAmount => "increase amount",
            Self::DecreaseAmount => "decrease amount",
            Self::Price => "price",
            Self::PriceChange => "price change",
        };
        formatter.write_str(text)
    }
}

/// Reasons a line cannot be turned into a [`Command`](super::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first word is not a known verb.
    #[error("Unknown command \"{0}\", type HELP for a list of commands")]
    UnknownCommand(String),

    /// One or more required arguments are absent, listed in order.
    #[error("{}", missing_lines(.0))]
    MissingArguments(Vec<Argument>),

    /// An amount is not a non-negative integer.
    #[error("Invalid amount \"{0}\"")]
    InvalidAmount(String),

    /// A price is not a decimal number, or a price change is negative.
    #[error("Invalid price \"{0}\"")]
    InvalidPrice(String),
}

fn missing_lines(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(|argument| format!("Missing {argument}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ParseError {
    /// Returns the message split into printable lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.to_string().lines().map(str::to_string).collect()
    }
}
