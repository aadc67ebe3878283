//! Line parser for [`Command`].

use rust_decimal::Decimal;

use super::Command;
use super::errors::{Argument, ParseError};

/// Parses one input line.
///
/// Words are separated by any run of whitespace and the verb is matched
/// ignoring case. Arguments beyond those a command needs are ignored.
/// A blank line yields `Ok(None)`.
///
/// # Errors
///
/// - [`ParseError::UnknownCommand`] for an unrecognised verb
/// - [`ParseError::MissingArguments`] listing every absent argument
/// - [`ParseError::InvalidAmount`] / [`ParseError::InvalidPrice`] for malformed numbers
///
/// # Examples
///
/// ```rust
/// use stockroom::command::{parse, Argument, Command, ParseError};
///
/// assert_eq!(parse("   "), Ok(None));
/// assert_eq!(
///     parse("SetInventory widget 12"),
///     Ok(Some(Command::SetInventory { name: "widget".to_string(), amount: 12 }))
/// );
/// assert_eq!(
///     parse("addsupplier"),
///     Err(ParseError::MissingArguments(vec![Argument::ProductName, Argument::SupplierName]))
/// );
/// ```
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arguments: Vec<&str> = words.collect();

    let command = match verb.to_ascii_uppercase().as_str() {
        "HELP" => Command::Help,
        "EXIT" => Command::Exit,
        "DISPLAYALLPRODUCTS" => Command::DisplayAllProducts,
        "DISPLAYPRODUCT" => {
            let [name] = require(&arguments, [Argument::ProductName])?;
            Command::DisplayProduct { name }
        }
        "ADDPRODUCT" => {
            let [name] = require(&arguments, [Argument::ProductName])?;
            Command::AddProduct { name }
        }
        "REMOVEPRODUCT" => {
            let [name] = require(&arguments, [Argument::ProductName])?;
            Command::RemoveProduct { name }
        }
        "ADDSUPPLIER" => {
            let [product, supplier] =
                require(&arguments, [Argument::ProductName, Argument::SupplierName])?;
            Command::AddSupplier { product, supplier }
        }
        "REMOVESUPPLIER" => {
            let [product, supplier] =
                require(&arguments, [Argument::ProductName, Argument::SupplierName])?;
            Command::RemoveSupplier { product, supplier }
        }
        "SETINVENTORY" => {
            let [name, amount] =
                require(&arguments, [Argument::ProductName, Argument::InventoryAmount])?;
            Command::SetInventory {
                name,
                amount: parse_amount(&amount)?,
            }
        }
        "INCREASEINVENTORY" => {
            let [name, amount] =
                require(&arguments, [Argument::ProductName, Argument::IncreaseAmount])?;
            Command::IncreaseInventory {
                name,
                amount: parse_amount(&amount)?,
            }
        }
        "DECREASEINVENTORY" => {
            let [name, amount] =
                require(&arguments, [Argument::ProductName, Argument::DecreaseAmount])?;
            Command::DecreaseInventory {
                name,
                amount: parse_amount(&amount)?,
            }
        }
        "SETPRICE" => {
            let [name, price] = require(&arguments, [Argument::ProductName, Argument::Price])?;
            Command::SetPrice {
                name,
                price: parse_price(&price)?,
            }
        }
        "INCREASEPRICE" => {
            let [name, delta] =
                require(&arguments, [Argument::ProductName, Argument::PriceChange])?;
            Command::IncreasePrice {
                name,
                delta: parse_price_change(&delta)?,
            }
        }
        "DECREASEPRICE" => {
            let [name, delta] =
                require(&arguments, [Argument::ProductName, Argument::PriceChange])?;
            Command::DecreasePrice {
                name,
                delta: parse_price_change(&delta)?,
            }
        }
        _ => return Err(ParseError::UnknownCommand(verb.to_string())),
    };
    Ok(Some(command))
}

/// Takes the first `N` arguments, or reports every expected argument past
/// the ones supplied.
fn require<const N: usize>(
    arguments: &[&str],
    expected: [Argument; N],
) -> Result<[String; N], ParseError> {
    if arguments.len() < N {
        return Err(ParseError::MissingArguments(
            expected[arguments.len()..].to_vec(),
        ));
    }
    Ok(std::array::from_fn(|index| arguments[index].to_string()))
}

fn parse_amount(text: &str) -> Result<u32, ParseError> {
    text.parse()
        .map_err(|_| ParseError::InvalidAmount(text.to_string()))
}

fn parse_price(text: &str) -> Result<Decimal, ParseError> {
    text.parse()
        .map_err(|_| ParseError::InvalidPrice(text.to_string()))
}

/// The verb carries the direction, so a change must not be negative.
fn parse_price_change(text: &str) -> Result<Decimal, ParseError> {
    parse_price(text).and_then(|delta| {
        if delta < Decimal::ZERO {
            Err(ParseError::InvalidPrice(text.to_string()))
        } else {
            Ok(delta)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   \t ")]
    fn blank_lines_parse_to_nothing(#[case] line: &str) {
        assert_eq!(parse(line), Ok(None));
    }

    #[rstest]
    #[case("help", Command::Help)]
    #[case("EXIT", Command::Exit)]
    #[case("DisplayAllProducts", Command::DisplayAllProducts)]
    #[case("displayproduct widget", Command::DisplayProduct { name: "widget".to_string() })]
    #[case("REMOVEPRODUCT widget extra words", Command::RemoveProduct { name: "widget".to_string() })]
    #[case(
        "addsupplier widget Acme",
        Command::AddSupplier { product: "widget".to_string(), supplier: "Acme".to_string() }
    )]
    #[case(
        "increaseinventory widget 3",
        Command::IncreaseInventory { name: "widget".to_string(), amount: 3 }
    )]
    #[case(
        "decreaseinventory  widget\t4",
        Command::DecreaseInventory { name: "widget".to_string(), amount: 4 }
    )]
    #[case(
        "setprice widget 19.99",
        Command::SetPrice { name: "widget".to_string(), price: Decimal::new(1999, 2) }
    )]
    #[case(
        "decreaseprice widget 0.5",
        Command::DecreasePrice { name: "widget".to_string(), delta: Decimal::new(5, 1) }
    )]
    fn parses_known_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(parse(line), Ok(Some(expected)));
    }

    #[rstest]
    #[case("removesupplier", vec![Argument::ProductName, Argument::SupplierName])]
    #[case("removesupplier widget", vec![Argument::SupplierName])]
    #[case("setinventory widget", vec![Argument::InventoryAmount])]
    #[case("increaseinventory", vec![Argument::ProductName, Argument::IncreaseAmount])]
    #[case("setprice widget", vec![Argument::Price])]
    #[case("addproduct", vec![Argument::ProductName])]
    fn reports_missing_arguments(#[case] line: &str, #[case] missing: Vec<Argument>) {
        assert_eq!(parse(line), Err(ParseError::MissingArguments(missing)));
    }

    #[rstest]
    #[case("setinventory widget -1", ParseError::InvalidAmount("-1".to_string()))]
    #[case("setinventory widget ten", ParseError::InvalidAmount("ten".to_string()))]
    #[case("setprice widget cheap", ParseError::InvalidPrice("cheap".to_string()))]
    #[case("increaseprice widget -5", ParseError::InvalidPrice("-5".to_string()))]
    #[case("decreaseprice widget -0.01", ParseError::InvalidPrice("-0.01".to_string()))]
    #[case("teleport widget", ParseError::UnknownCommand("teleport".to_string()))]
    fn rejects_malformed_lines(#[case] line: &str, #[case] expected: ParseError) {
        assert_eq!(parse(line), Err(expected));
    }

    #[rstest]
    fn zero_price_change_is_accepted() {
        assert_eq!(
            parse("increaseprice widget 0"),
            Ok(Some(Command::IncreasePrice {
                name: "widget".to_string(),
                delta: Decimal::ZERO,
            }))
        );
    }
}
