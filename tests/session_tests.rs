//! End-to-end tests for interactive sessions.
//!
//! Scripts are fed through `Session::run` the same way the binary feeds
//! standard input.

#![cfg(feature = "serde")]

use std::io::Cursor;

use rstest::rstest;
use rust_decimal::Decimal;
use stockroom::inventory::{Catalog, Product};
use stockroom::session::{Session, SessionError, Step};
use stockroom::storage::{CatalogStore, InMemoryStore, JsonFileStore, StorageError};
use tempfile::TempDir;

fn run_script<S: CatalogStore>(session: &mut Session<S>, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    session.run(Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Opening
// =============================================================================

#[rstest]
fn test_open_on_empty_store_saves_empty_catalog() {
    let session = Session::open(InMemoryStore::new()).unwrap();
    assert!(session.inventory().is_empty());
    assert_eq!(session.store().save_count(), 1);
    assert_eq!(session.store().load().unwrap(), Some(Catalog::new()));
}

#[rstest]
fn test_open_loads_existing_catalog() {
    let mut catalog = Catalog::new();
    catalog.put("widget".to_string(), Product::new("widget").with_inventory(3));
    let store = InMemoryStore::with_catalog(&catalog).unwrap();

    let session = Session::open(store).unwrap();

    assert_eq!(session.inventory().product("widget").unwrap().amount(), 3);
    assert_eq!(session.store().save_count(), 0);
}

#[rstest]
fn test_open_fails_when_key_and_product_name_differ() {
    let directory = TempDir::new().unwrap();
    let path = directory.path().join("inventory.json");
    std::fs::write(&path, r#"{"a": {"name": "b", "inventory": 1}}"#).unwrap();

    let error = Session::open(JsonFileStore::new(&path)).unwrap_err();

    assert!(matches!(
        error,
        SessionError::Storage(StorageError::NameMismatch { ref key, ref name })
            if key == "a" && name == "b"
    ));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        r#"{"a": {"name": "b", "inventory": 1}}"#
    );
}

#[rstest]
fn test_open_fails_on_corrupt_snapshot() {
    let directory = TempDir::new().unwrap();
    let path = directory.path().join("inventory.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(Session::open(JsonFileStore::new(&path)).is_err());
}

// =============================================================================
// Running scripts
// =============================================================================

#[rstest]
fn test_full_product_lifecycle() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    let output = run_script(
        &mut session,
        "addproduct widget\n\
         addsupplier widget Acme\n\
         setinventory widget 10\n\
         increaseinventory widget 5\n\
         decreaseinventory widget 3\n\
         setprice widget 2.50\n\
         increaseprice widget 0.25\n\
         displayproduct widget\n",
    );

    assert_eq!(
        output,
        vec![
            "Added product \"widget\"",
            "Added supplier \"Acme\" to product \"widget\"",
            "Inventory of \"widget\" set to 10",
            "Inventory of \"widget\" is now 15",
            "Inventory of \"widget\" is now 12",
            "Price of \"widget\" set to $2.50",
            "Price of \"widget\" is now $2.75",
            "name: widget",
            "amount: 12",
            "Suppliers:",
            "   Acme",
            "Price: $2.75",
        ]
    );
}

#[rstest]
fn test_exit_stops_reading() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    let output = run_script(&mut session, "addproduct a\nEXIT\naddproduct b\n");

    assert_eq!(output, vec!["Added product \"a\""]);
    assert_eq!(session.inventory().len(), 1);
}

#[rstest]
fn test_blank_lines_are_ignored() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    assert_eq!(session.handle_line("   ").unwrap(), Step::Continue(Vec::new()));
}

#[rstest]
#[case("addsupplier", &["Missing product name", "Missing supplier name"])]
#[case("setinventory widget", &["Missing inventory amount"])]
#[case("setinventory widget many", &["Invalid amount \"many\""])]
#[case("fly away", &["Unknown command \"fly\", type HELP for a list of commands"])]
fn test_parse_errors_become_output(#[case] line: &str, #[case] expected: &[&str]) {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    let step = session.handle_line(line).unwrap();
    let expected: Vec<String> = expected.iter().map(|text| (*text).to_string()).collect();
    assert_eq!(step, Step::Continue(expected));
}

#[rstest]
fn test_failed_operation_reports_error_and_changes_nothing() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    session.handle_line("addproduct widget").unwrap();
    session.handle_line("setinventory widget 2").unwrap();

    let step = session.handle_line("decreaseinventory widget 5").unwrap();

    assert_eq!(
        step,
        Step::Continue(vec![
            "Product \"widget\" does not have enough inventory: requested 5, available 2".to_string()
        ])
    );
    assert_eq!(session.inventory().product("widget").unwrap().amount(), 2);
}

#[rstest]
fn test_price_change_beyond_range_is_reported_and_session_continues() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    session.handle_line("addproduct widget").unwrap();
    session
        .handle_line("setprice widget 79228162514264337593543950335")
        .unwrap();
    let saves = session.store().save_count();

    let step = session.handle_line("increaseprice widget 1").unwrap();

    assert_eq!(
        step,
        Step::Continue(vec![format!(
            "Price of product \"widget\" cannot exceed {}",
            Decimal::MAX
        )])
    );
    assert_eq!(
        session.inventory().product("widget").unwrap().price(),
        Some(Decimal::MAX)
    );
    assert_eq!(session.store().save_count(), saves);
    assert!(session.handle_line("decreaseprice widget 1").is_ok());
}

#[rstest]
fn test_negative_price_change_is_rejected() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    session.handle_line("addproduct widget").unwrap();
    session.handle_line("setprice widget 10").unwrap();

    let step = session.handle_line("decreaseprice widget -1").unwrap();

    assert_eq!(
        step,
        Step::Continue(vec!["Invalid price \"-1\"".to_string()])
    );
    assert_eq!(
        session.inventory().product("widget").unwrap().price(),
        Some(Decimal::TEN)
    );
}

#[rstest]
fn test_unknown_product_is_reported() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    let step = session.handle_line("displayproduct ghost").unwrap();
    assert_eq!(
        step,
        Step::Continue(vec!["Product \"ghost\" does not exist".to_string()])
    );
}

// =============================================================================
// Persistence
// =============================================================================

#[rstest]
fn test_saves_only_after_mutation() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    assert_eq!(session.store().save_count(), 1);

    session.handle_line("addproduct widget").unwrap();
    assert_eq!(session.store().save_count(), 2);

    session.handle_line("displayproduct widget").unwrap();
    session.handle_line("displayallproducts").unwrap();
    session.handle_line("help").unwrap();
    session.handle_line("removeproduct ghost").unwrap();
    session.handle_line("bogus").unwrap();
    assert_eq!(session.store().save_count(), 2);

    session.handle_line("setprice widget 1.00").unwrap();
    assert_eq!(session.store().save_count(), 3);
}

#[rstest]
fn test_reopened_session_sees_saved_changes() {
    let directory = TempDir::new().unwrap();
    let path = directory.path().join("inventory.json");

    let mut first = Session::open(JsonFileStore::new(&path)).unwrap();
    run_script(&mut first, "addproduct widget\nsetprice widget 4.20\naddsupplier widget Acme\n");
    drop(first);

    let second = Session::open(JsonFileStore::new(&path)).unwrap();
    let widget = second.inventory().product("widget").unwrap();
    assert_eq!(widget.price(), Some(Decimal::new(420, 2)));
    assert!(widget.suppliers().contains("ACME"));
}

#[rstest]
fn test_sessions_are_independent() {
    let mut left = Session::open(InMemoryStore::new()).unwrap();
    let mut right = Session::open(InMemoryStore::new()).unwrap();

    left.handle_line("addproduct widget").unwrap();

    assert_eq!(left.inventory().len(), 1);
    assert!(right.inventory().is_empty());
    assert!(right.handle_line("displayproduct widget").is_ok());
    assert!(right.inventory().is_empty());
}

#[rstest]
fn test_into_parts_returns_final_state() {
    let mut session = Session::open(InMemoryStore::new()).unwrap();
    session.handle_line("addproduct widget").unwrap();

    let (inventory, store) = session.into_parts();
    assert_eq!(store.load().unwrap().as_ref(), Some(inventory.catalog()));
}
