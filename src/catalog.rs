//! Skip catalog
//!
//! The catalog is a compiled-in table of skip offerings. It is never loaded
//! from disk and never mutated; the booking session refers to entries by id
//! only, and every lookup returns an `Option` so an id that is not in the
//! table simply renders nothing.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

/// Catalog identifier of a skip offering.
pub type SkipId = u32;

/// Marketing line printed on every skip card.
pub const CARD_TAGLINE: &str = "Perfect for medium-sized projects and home clearances";

/// A skip offered for hire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skip {
    pub id: SkipId,
    /// Capacity in cubic yards
    pub size: u32,
    pub hire_period_days: u32,
    pub price_before_vat: Decimal,
    /// VAT rate as a percentage (0-100)
    pub vat: u8,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

/// Coarse size bucket used to scale the card artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl Skip {
    /// Price including VAT, rounded half-up to whole currency units.
    ///
    /// Always recomputed so the card and the selection summary agree.
    pub fn total_price(&self) -> Decimal {
        let multiplier = Decimal::ONE + Decimal::from(self.vat) / Decimal::ONE_HUNDRED;
        (self.price_before_vat * multiplier)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Card heading, e.g. "6 Yard Skip".
    pub fn title(&self) -> String {
        format!("{} Yard Skip", self.size)
    }

    pub fn hire_period_label(&self) -> String {
        format!("{} day hire period", self.hire_period_days)
    }

    pub fn placement_label(&self) -> &'static str {
        if self.allowed_on_road {
            "Road placement allowed"
        } else {
            "Private land only"
        }
    }

    pub fn size_class(&self) -> SizeClass {
        match self.size {
            0..=6 => SizeClass::Small,
            7..=12 => SizeClass::Medium,
            _ => SizeClass::Large,
        }
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - £{} inc. VAT",
            self.title(),
            self.hire_period_label(),
            self.total_price()
        )
    }
}

/// Read-only list of skips in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    skips: Vec<Skip>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        // (id, size, price before VAT, allowed on road)
        const ROWS: [(SkipId, u32, i64, bool); 6] = [
            (17933, 4, 278, true),
            (17934, 6, 325, true),
            (17935, 8, 385, false),
            (17936, 12, 450, false),
            (17937, 16, 520, false),
            (17938, 20, 595, false),
        ];

        let skips = ROWS
            .iter()
            .map(|&(id, size, price, allowed_on_road)| Skip {
                id,
                size,
                hire_period_days: 14,
                price_before_vat: Decimal::from(price),
                vat: 20,
                allowed_on_road,
                allows_heavy_waste: true,
            })
            .collect();

        Self { skips }
    }

    /// Build a catalog from explicit entries (tests and alternate fixtures).
    pub fn from_skips(skips: Vec<Skip>) -> Self {
        Self { skips }
    }

    pub fn skips(&self) -> &[Skip] {
        &self.skips
    }

    pub fn len(&self) -> usize {
        self.skips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }

    /// Skip at a display position.
    pub fn get(&self, index: usize) -> Option<&Skip> {
        self.skips.get(index)
    }

    /// Look a skip up by id; unknown ids yield `None`.
    pub fn find(&self, id: SkipId) -> Option<&Skip> {
        self.skips.iter().find(|skip| skip.id == id)
    }

    /// Display position of a skip id.
    pub fn position(&self, id: SkipId) -> Option<usize> {
        self.skips.iter().position(|skip| skip.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn skip_with(price: Decimal, vat: u8) -> Skip {
        Skip {
            id: 1,
            size: 4,
            hire_period_days: 7,
            price_before_vat: price,
            vat,
            allowed_on_road: false,
            allows_heavy_waste: false,
        }
    }

    #[test]
    fn test_total_price_rounds_up_from_fraction() {
        // 278 * 1.2 = 333.6
        assert_eq!(skip_with(dec!(278), 20).total_price(), dec!(334));
    }

    #[test]
    fn test_total_price_midpoint_rounds_up() {
        // 2.5 * 1.0 = 2.5 -> 3
        assert_eq!(skip_with(dec!(2.5), 0).total_price(), dec!(3));
        // 12.5 * 1.2 = 15.0
        assert_eq!(skip_with(dec!(12.5), 20).total_price(), dec!(15));
    }

    #[test]
    fn test_total_price_rounds_down_below_midpoint() {
        // 101 * 1.05 = 106.05
        assert_eq!(skip_with(dec!(101), 5).total_price(), dec!(106));
    }

    #[test]
    fn test_zero_and_full_vat() {
        assert_eq!(skip_with(dec!(0), 20).total_price(), dec!(0));
        assert_eq!(skip_with(dec!(150), 100).total_price(), dec!(300));
    }

    #[test]
    fn test_builtin_totals() {
        let catalog = Catalog::builtin();
        let totals: Vec<Decimal> = catalog.skips().iter().map(Skip::total_price).collect();
        assert_eq!(
            totals,
            vec![dec!(334), dec!(390), dec!(462), dec!(540), dec!(624), dec!(714)]
        );
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<SkipId> = catalog.skips().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_unknown_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.find(17934).is_some());
        assert!(catalog.find(99999).is_none());
        assert_eq!(catalog.position(17935), Some(2));
    }

    #[test]
    fn test_labels() {
        let catalog = Catalog::builtin();
        let road = catalog.find(17933).map(Skip::placement_label);
        let private = catalog.find(17938).map(Skip::placement_label);
        assert_eq!(road, Some("Road placement allowed"));
        assert_eq!(private, Some("Private land only"));
        assert_eq!(
            catalog.find(17936).map(Skip::title).as_deref(),
            Some("12 Yard Skip")
        );
    }

    #[test]
    fn test_size_classes() {
        let catalog = Catalog::builtin();
        let classes: Vec<SizeClass> = catalog.skips().iter().map(Skip::size_class).collect();
        assert_eq!(
            classes,
            vec![
                SizeClass::Small,
                SizeClass::Small,
                SizeClass::Medium,
                SizeClass::Medium,
                SizeClass::Large,
                SizeClass::Large,
            ]
        );
    }
}
