//! Sorted supplier list of a single product.
//!
//! Supplier names are unique ignoring case and kept in ascending
//! case-insensitive order, so membership checks use binary search.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compares two names character by character after lowercasing.
fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

/// Ascending, case-insensitively unique list of supplier names.
///
/// The first spelling inserted is the one kept: inserting `"ACME"` after
/// `"Acme"` is rejected as a duplicate.
///
/// # Examples
///
/// ```rust
/// use stockroom::inventory::Suppliers;
///
/// let mut suppliers = Suppliers::new();
/// assert!(suppliers.insert("zeta"));
/// assert!(suppliers.insert("Acme"));
/// assert!(!suppliers.insert("ACME"));
///
/// let names: Vec<&str> = suppliers.iter().collect();
/// assert_eq!(names, vec!["Acme", "zeta"]);
/// assert_eq!(suppliers.get("acme"), Some("Acme"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
pub struct Suppliers {
    names: Vec<String>,
}

impl Suppliers {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    fn search(&self, name: &str) -> Result<usize, usize> {
        self.names
            .binary_search_by(|probe| compare_ignore_case(probe, name))
    }

    /// Inserts `name` at its sorted position.
    ///
    /// Returns `false`, leaving the list unchanged, when a name equal
    /// ignoring case is already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        match self.search(&name) {
            Ok(_) => false,
            Err(position) => {
                self.names.insert(position, name);
                true
            }
        }
    }

    /// Returns the stored spelling of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.search(name)
            .ok()
            .map(|index| self.names[index].as_str())
    }

    /// Returns `true` if `name` is present, ignoring case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.search(name).is_ok()
    }

    /// Removes `name` and returns the stored spelling.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.search(name).ok()?;
        Some(self.names.remove(index))
    }

    /// Returns the number of suppliers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no suppliers are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates supplier names in ascending case-insensitive order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Suppliers {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<Suppliers> for Vec<String> {
    fn from(suppliers: Suppliers) -> Self {
        suppliers.names
    }
}

impl<S: Into<String>> FromIterator<S> for Suppliers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut suppliers = Self::new();
        suppliers.extend(iter);
        suppliers
    }
}

impl<S: Into<String>> Extend<S> for Suppliers {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("apple", "Banana", Ordering::Less)]
    #[case("APPLE", "apple", Ordering::Equal)]
    #[case("b", "A", Ordering::Greater)]
    #[case("ab", "abc", Ordering::Less)]
    fn compare_ignore_case_orders_alphabetically(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_ignore_case(left, right), expected);
    }

    #[rstest]
    fn insert_keeps_names_sorted_ignoring_case() {
        let suppliers: Suppliers = ["delta", "Alpha", "charlie", "Bravo"].into_iter().collect();
        let names: Vec<&str> = suppliers.iter().collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "charlie", "delta"]);
    }

    #[rstest]
    fn insert_rejects_duplicate_in_other_case() {
        let mut suppliers = Suppliers::new();
        assert!(suppliers.insert("Acme"));
        assert!(!suppliers.insert("acme"));
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers.get("ACME"), Some("Acme"));
    }

    #[rstest]
    #[case(&[], "a")]
    #[case(&["a"], "b")]
    #[case(&["a", "c"], "b")]
    #[case(&["a", "c"], "d")]
    fn lookups_of_absent_names_terminate(#[case] names: &[&str], #[case] target: &str) {
        let mut suppliers: Suppliers = names.iter().copied().collect();
        assert_eq!(suppliers.get(target), None);
        assert_eq!(suppliers.remove(target), None);
        assert_eq!(suppliers.len(), names.len());
    }

    #[rstest]
    fn remove_returns_stored_spelling() {
        let mut suppliers: Suppliers = ["Acme", "Globex", "Initech"].into_iter().collect();
        assert_eq!(suppliers.remove("globex"), Some("Globex".to_string()));
        assert!(!suppliers.contains("Globex"));
        assert_eq!(suppliers.len(), 2);
    }

    #[rstest]
    fn from_unsorted_vec_restores_order() {
        let suppliers = Suppliers::from(vec!["b".to_string(), "a".to_string(), "B".to_string()]);
        assert_eq!(Vec::<String>::from(suppliers), vec!["a".to_string(), "b".to_string()]);
    }
}
