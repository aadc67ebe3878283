//! Applies parsed commands to an [`Inventory`].

use crate::inventory::{Inventory, InventoryError, Product};

use super::Command;

/// Output of a successfully dispatched command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Lines to show the user, without trailing newlines.
    pub lines: Vec<String>,
    /// Whether the catalog was changed and needs saving.
    pub mutated: bool,
}

impl Reply {
    fn read(lines: Vec<String>) -> Self {
        Self {
            lines,
            mutated: false,
        }
    }

    fn changed(line: String) -> Self {
        Self {
            lines: vec![line],
            mutated: true,
        }
    }
}

/// Runs `command` against `inventory`.
///
/// [`Command::Exit`] produces an empty reply; ending the session is the
/// caller's job.
///
/// # Errors
///
/// Returns the [`InventoryError`] of the underlying operation. The inventory
/// is unchanged whenever an error is returned.
pub fn dispatch(command: &Command, inventory: &mut Inventory) -> Result<Reply, InventoryError> {
    tracing::debug!(?command, "dispatching command");
    let reply = match command {
        Command::Help => Reply::read(help_lines()),
        Command::Exit => Reply::default(),
        Command::DisplayProduct { name } => Reply::read(describe(inventory.product(name)?)),
        Command::DisplayAllProducts => Reply::read(
            inventory
                .catalog()
                .iter()
                .map(|(name, _)| name.clone())
                .collect(),
        ),
        Command::AddProduct { name } => {
            inventory.add_product(name)?;
            Reply::changed(format!("Added product \"{name}\""))
        }
        Command::RemoveProduct { name } => {
            inventory.remove_product(name)?;
            Reply::changed(format!("Removed product \"{name}\""))
        }
        Command::AddSupplier { product, supplier } => {
            inventory.add_supplier(product, supplier)?;
            Reply::changed(format!(
                "Added supplier \"{supplier}\" to product \"{product}\""
            ))
        }
        Command::RemoveSupplier { product, supplier } => {
            let removed = inventory.remove_supplier(product, supplier)?;
            Reply::changed(format!(
                "Removed supplier \"{removed}\" from product \"{product}\""
            ))
        }
        Command::SetInventory { name, amount } => {
            let amount = inventory.set_inventory(name, *amount)?;
            Reply::changed(format!("Inventory of \"{name}\" set to {amount}"))
        }
        Command::IncreaseInventory { name, amount } => {
            let amount = inventory.increase_inventory(name, *amount)?;
            Reply::changed(format!("Inventory of \"{name}\" is now {amount}"))
        }
        Command::DecreaseInventory { name, amount } => {
            let amount = inventory.decrease_inventory(name, *amount)?;
            Reply::changed(format!("Inventory of \"{name}\" is now {amount}"))
        }
        Command::SetPrice { name, price } => {
            let price = inventory.set_price(name, *price)?;
            Reply::changed(format!("Price of \"{name}\" set to ${price}"))
        }
        Command::IncreasePrice { name, delta } => {
            let price = inventory.increase_price(name, *delta)?;
            Reply::changed(format!("Price of \"{name}\" is now ${price}"))
        }
        Command::DecreasePrice { name, delta } => {
            let price = inventory.decrease_price(name, *delta)?;
            Reply::changed(format!("Price of \"{name}\" is now ${price}"))
        }
    };
    Ok(reply)
}

fn describe(product: &Product) -> Vec<String> {
    let mut lines = vec![
        format!("name: {}", product.name()),
        format!("amount: {}", product.amount()),
    ];
    if !product.suppliers().is_empty() {
        lines.push("Suppliers:".to_string());
        lines.extend(product.suppliers().iter().map(|supplier| format!("   {supplier}")));
    }
    if let Some(price) = product.price() {
        lines.push(format!("Price: ${price}"));
    }
    lines
}

/// Usage summary printed by `HELP`.
#[must_use]
pub fn help_lines() -> Vec<String> {
    [
        "Commands (case-insensitive):",
        "  HELP",
        "  EXIT",
        "  DISPLAYPRODUCT <product>",
        "  DISPLAYALLPRODUCTS",
        "  ADDPRODUCT <product>",
        "  REMOVEPRODUCT <product>",
        "  ADDSUPPLIER <product> <supplier>",
        "  REMOVESUPPLIER <product> <supplier>",
        "  SETINVENTORY <product> <amount>",
        "  INCREASEINVENTORY <product> <amount>",
        "  DECREASEINVENTORY <product> <amount>",
        "  SETPRICE <product> <price>",
        "  INCREASEPRICE <product> <amount>",
        "  DECREASEPRICE <product> <amount>",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
