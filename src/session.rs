//! Session
//!
//! Text menu for browsing the catalog and placing orders. The session borrows the store for
//! its lifetime and talks to any line-oriented reader and writer, so it runs equally well on
//! stdin/stdout and on in-memory buffers.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{Span, debug, info, warn};

use crate::{
    catalog::write_catalog,
    products::ProductKey,
    store::{LineItem, Store},
};

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("Session IO failed: {0}")]
    Io(#[from] io::Error),
}

/// Menu entries, numbered as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// List all active products
    ListProducts,

    /// Show the total stock across the store
    TotalQuantity,

    /// Place an order
    MakeOrder,

    /// Leave the session
    Quit,
}

impl MenuChoice {
    /// Parse a menu selection, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ListProducts),
            "2" => Some(Self::TotalQuantity),
            "3" => Some(Self::MakeOrder),
            "4" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Interactive store session
#[derive(Debug)]
pub struct Session<'s, R, W> {
    store: &'s mut Store,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Session<'s, R, W> {
    /// Create a new session over the given store and streams.
    pub fn new(store: &'s mut Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.write_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed, ending session");
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);

            debug!(?choice, "menu selection");

            match choice {
                Some(MenuChoice::ListProducts) => self.list_products()?,
                Some(MenuChoice::TotalQuantity) => self.show_total_quantity()?,
                Some(MenuChoice::MakeOrder) => self.make_order()?,
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice, try again.")?,
            }
        }
    }

    fn write_menu(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nStore Menu\n----------")?;
        writeln!(self.output, "1. List all products in store")?;
        writeln!(self.output, "2. Show total amount in store")?;
        writeln!(self.output, "3. Make an order")?;
        writeln!(self.output, "4. Quit")?;

        self.prompt("Please choose a number: ")
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        Ok(())
    }

    /// Read one line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn list_products(&mut self) -> Result<(), SessionError> {
        for (_, product) in self.store.active_products() {
            writeln!(self.output, "{product}")?;
        }

        Ok(())
    }

    fn show_total_quantity(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{}", self.store.total_quantity())?;

        Ok(())
    }

    #[tracing::instrument(
        name = "session.make_order",
        skip(self),
        fields(line_items = tracing::field::Empty)
    )]
    fn make_order(&mut self) -> Result<(), SessionError> {
        let listing = self.store.active_products();

        if listing.is_empty() {
            writeln!(self.output, "No active products available.")?;
            return Ok(());
        }

        writeln!(self.output, "\nAvailable products:")?;
        write_catalog(&mut self.output, &listing)?;

        let keys: Vec<ProductKey> = listing.iter().map(|(key, _)| *key).collect();

        let Some(line_items) = self.read_line_items(&keys)? else {
            return Ok(());
        };

        if line_items.is_empty() {
            writeln!(self.output, "No products selected.")?;
            return Ok(());
        }

        Span::current().record("line_items", line_items.len());

        match self.store.order(&line_items) {
            Ok(total) => {
                info!(%total, "order fulfilled");
                writeln!(self.output, "Order successful! Total price: {total}")?;
            }
            Err(error) => {
                warn!(%error, "order rejected");
                writeln!(self.output, "Order failed: {error}")?;
            }
        }

        Ok(())
    }

    /// Prompt for line items until a blank product number.
    ///
    /// Returns `None` if the order was abandoned, either on invalid input or end of input.
    fn read_line_items(
        &mut self,
        keys: &[ProductKey],
    ) -> Result<Option<Vec<LineItem>>, SessionError> {
        let mut line_items = Vec::new();

        loop {
            self.prompt("Select product number (blank to finish): ")?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            if line.trim().is_empty() {
                return Ok(Some(line_items));
            }

            let Some(product) = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| keys.get(index).copied())
            else {
                return self.abandon_order(&line);
            };

            self.prompt("Enter quantity: ")?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let Ok(quantity) = line.trim().parse::<i64>() else {
                return self.abandon_order(&line);
            };

            line_items.push(LineItem::new(product, quantity));
        }
    }

    fn abandon_order(&mut self, input: &str) -> Result<Option<Vec<LineItem>>, SessionError> {
        debug!(input, "invalid order input");
        writeln!(self.output, "Invalid selection.")?;

        Ok(None)
    }
}
