//! Catalog display

use std::{fmt, io};

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::products::{Product, ProductKey};

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Price: {} | Quantity: {} | Active: {}",
            self.name(),
            self.price(),
            self.quantity(),
            self.is_active()
        )
    }
}

/// Write a numbered catalog table, numbering rows from 1.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_catalog(
    mut out: impl io::Write,
    products: &[(ProductKey, &Product)],
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Product", "Price", "Quantity"]);

    for (number, (_, product)) in (1..).zip(products) {
        builder.push_record([
            number.to_string(),
            product.name().to_string(),
            product.price().to_string(),
            product.quantity().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}")
}
