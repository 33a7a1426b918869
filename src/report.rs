//! Plain-text and JSON output for the non-interactive subcommands.

use crate::catalog::{Catalog, Skip, SkipId};
use crate::error::{Result, SkipHireError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct PricedSkip<'a> {
    #[serde(flatten)]
    skip: &'a Skip,
    total_price: Decimal,
}

/// Catalog as an aligned text table.
pub fn catalog_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<7} {:<12} {:>6} {:>12} {:>10}  {}",
        "ID", "SKIP", "HIRE", "BEFORE VAT", "INC. VAT", "PLACEMENT"
    );
    for skip in catalog.skips() {
        let _ = writeln!(
            out,
            "{:<7} {:<12} {:>5}d {:>12} {:>10}  {}",
            skip.id,
            skip.title(),
            skip.hire_period_days,
            format!("£{}", skip.price_before_vat),
            format!("£{}", skip.total_price()),
            skip.placement_label()
        );
    }
    out
}

/// Catalog as pretty JSON, each entry carrying its computed total.
pub fn catalog_json(catalog: &Catalog) -> Result<String> {
    let rows: Vec<PricedSkip<'_>> = catalog
        .skips()
        .iter()
        .map(|skip| PricedSkip {
            skip,
            total_price: skip.total_price(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Price summary for one skip; unknown ids are an error.
pub fn quote(catalog: &Catalog, id: SkipId) -> Result<String> {
    let skip = catalog
        .find(id)
        .ok_or_else(|| SkipHireError::catalog(format!("No skip with id {}", id)))?;

    let mut out = String::new();
    let _ = writeln!(out, "{}", skip.title());
    let _ = writeln!(out, "  {}", skip.hire_period_label());
    let _ = writeln!(out, "  {}", skip.placement_label());
    if skip.allows_heavy_waste {
        let _ = writeln!(out, "  Heavy waste accepted");
    }
    let _ = writeln!(out, "  £{} before VAT", skip.price_before_vat);
    let _ = writeln!(out, "  £{} inc. VAT ({}%)", skip.total_price(), skip.vat);
    Ok(out)
}
