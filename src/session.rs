//! Interactive session: an [`Inventory`] bound to a [`CatalogStore`].
//!
//! A session loads the stored catalog when it opens (or saves an empty one
//! if none exists), runs commands line by line, and writes the whole
//! catalog back after every command that changed it. Sessions are plain
//! values; several can coexist without sharing state.
//!
//! # Examples
//!
//! ```rust
//! use stockroom::session::{Session, Step};
//! use stockroom::storage::InMemoryStore;
//!
//! let mut session = Session::open(InMemoryStore::new()).unwrap();
//! let step = session.handle_line("addproduct widget").unwrap();
//! assert_eq!(step, Step::Continue(vec!["Added product \"widget\"".to_string()]));
//! assert_eq!(session.handle_line("exit").unwrap(), Step::Exit);
//! ```

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::command::{Command, dispatch, parse};
use crate::inventory::Inventory;
use crate::storage::{CatalogStore, StorageError, verify_catalog};

/// Failures that end a session.
///
/// Bad input and failed inventory operations are reported to the user as
/// output lines instead.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Loading or saving the catalog failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading input or writing output failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print these lines and read the next one.
    Continue(Vec<String>),
    /// Stop reading input.
    Exit,
}

/// An inventory together with the store it is persisted to.
#[derive(Debug)]
pub struct Session<S: CatalogStore> {
    inventory: Inventory,
    store: S,
}

impl<S: CatalogStore> Session<S> {
    /// Opens a session on `store`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the existing snapshot cannot be
    /// read or keys a product under another name, or if the initial empty
    /// snapshot cannot be written.
    pub fn open(store: S) -> Result<Self, SessionError> {
        let inventory = if let Some(catalog) = store.load()? {
            verify_catalog(&catalog).inspect_err(|error| {
                tracing::error!(%error, "stored catalog is inconsistent");
            })?;
            tracing::info!(products = catalog.len(), "catalog loaded");
            Inventory::from_catalog(catalog)
        } else {
            tracing::info!("no stored catalog, starting empty");
            let inventory = Inventory::new();
            store.save(inventory.catalog())?;
            inventory
        };
        Ok(Self { inventory, store })
    }

    /// Returns the current inventory.
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Ends the session and returns its parts.
    pub fn into_parts(self) -> (Inventory, S) {
        (self.inventory, self.store)
    }

    /// Parses and runs one input line.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if saving after a change fails. The
    /// in-memory inventory keeps the change in that case.
    pub fn handle_line(&mut self, line: &str) -> Result<Step, SessionError> {
        let command = match parse(line) {
            Ok(None) => return Ok(Step::Continue(Vec::new())),
            Ok(Some(Command::Exit)) => return Ok(Step::Exit),
            Ok(Some(command)) => command,
            Err(error) => {
                tracing::warn!(%error, "rejected input line");
                return Ok(Step::Continue(error.lines()));
            }
        };

        match dispatch(&command, &mut self.inventory) {
            Ok(reply) => {
                if reply.mutated {
                    self.store.save(self.inventory.catalog()).inspect_err(|error| {
                        tracing::error!(%error, "failed to save catalog");
                    })?;
                }
                Ok(Step::Continue(reply.lines))
            }
            Err(error) => {
                tracing::warn!(%error, "command failed");
                Ok(Step::Continue(vec![error.to_string()]))
            }
        }
    }

    /// Reads commands from `input` until `EXIT` or end of input, writing
    /// replies to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on terminal I/O or storage failure.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), SessionError> {
        for line in input.lines() {
            match self.handle_line(&line?)? {
                Step::Exit => break,
                Step::Continue(lines) => {
                    for text in lines {
                        writeln!(output, "{text}")?;
                    }
                }
            }
        }
        output.flush()?;
        tracing::info!(products = self.inventory.len(), "session finished");
        Ok(())
    }
}
