//! Booking step sequence
//!
//! The wizard walks a fixed, ordered list of steps. The order lives in
//! [`Step::SEQUENCE`]; display metadata (name, icon, placeholder copy) is a
//! lookup table keyed by step rather than per-variant behaviour.
//!
//! ```text
//! Postcode -> WasteType -> SelectSkip -> PermitCheck -> ChooseDate -> Payment
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// A stage of the booking flow.
///
/// `Display`/`FromStr` use the kebab-case step id (`"select-skip"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Step {
    Postcode = 0,
    WasteType = 1,
    SelectSkip = 2,
    PermitCheck = 3,
    ChooseDate = 4,
    Payment = 5,
}

/// Display metadata for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMeta {
    pub step: Step,
    /// Short name shown in the progress header
    pub name: &'static str,
    /// Single-glyph icon shown in the step chip
    pub icon: &'static str,
    /// Heading for the step's screen
    pub title: &'static str,
    /// Body copy for steps that only have a placeholder screen
    pub blurb: &'static str,
}

const STEP_TABLE: [StepMeta; Step::COUNT] = [
    StepMeta {
        step: Step::Postcode,
        name: "Postcode",
        icon: "⌖",
        title: "Enter Your Postcode",
        blurb: "This step is already completed in this demo.",
    },
    StepMeta {
        step: Step::WasteType,
        name: "Waste Type",
        icon: "♻",
        title: "Select Waste Type",
        blurb: "This step is already completed in this demo.",
    },
    StepMeta {
        step: Step::SelectSkip,
        name: "Select Skip",
        icon: "⛟",
        title: "Choose Your Skip Size",
        blurb: "Select the perfect skip for your waste management needs. \
                All prices include delivery and collection within our service area.",
    },
    StepMeta {
        step: Step::PermitCheck,
        name: "Permit Check",
        icon: "✎",
        title: "Permit Check",
        blurb: "Checking if you need a permit for skip placement...",
    },
    StepMeta {
        step: Step::ChooseDate,
        name: "Choose Date",
        icon: "◷",
        title: "Choose Delivery Date",
        blurb: "Select your preferred delivery and collection dates...",
    },
    StepMeta {
        step: Step::Payment,
        name: "Payment",
        icon: "£",
        title: "Payment",
        blurb: "Complete your booking with secure payment...",
    },
];

impl Step {
    /// Number of steps in the sequence.
    pub const COUNT: usize = 6;

    /// All steps in booking order.
    pub const SEQUENCE: [Step; Step::COUNT] = [
        Step::Postcode,
        Step::WasteType,
        Step::SelectSkip,
        Step::PermitCheck,
        Step::ChooseDate,
        Step::Payment,
    ];

    /// Zero-based position in [`Step::SEQUENCE`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Step at a zero-based position, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::SEQUENCE.get(index).copied()
    }

    /// The following step, or `None` from the last step.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` from the first step.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Returns true for the final step of the sequence.
    #[inline]
    pub const fn is_last(self) -> bool {
        self.index() + 1 == Self::COUNT
    }

    /// Display metadata for this step.
    #[inline]
    pub fn meta(self) -> &'static StepMeta {
        &STEP_TABLE[self.index()]
    }

    /// Short display name ("Select Skip").
    pub fn name(self) -> &'static str {
        self.meta().name
    }

    /// 1-indexed step number for display.
    pub const fn number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for StepMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_sequence_matches_discriminants() {
        for (i, step) in Step::SEQUENCE.iter().enumerate() {
            assert_eq!(step.index(), i, "{:?} should sit at index {}", step, i);
        }
    }

    #[test]
    fn test_iter_order_matches_sequence() {
        let iterated: Vec<Step> = Step::iter().collect();
        assert_eq!(iterated, Step::SEQUENCE.to_vec());
    }

    #[test]
    fn test_table_is_keyed_by_step() {
        for step in Step::iter() {
            assert_eq!(step.meta().step, step);
        }
    }

    #[test]
    fn test_next_forms_chain() {
        let mut current = Step::Postcode;
        let mut count = 0;
        while let Some(next) = current.next() {
            current = next;
            count += 1;
            assert!(count < 10, "Infinite loop detected in step chain");
        }
        assert_eq!(current, Step::Payment);
        assert_eq!(count, 5);
        assert!(current.is_last());
    }

    #[test]
    fn test_previous_stops_at_first() {
        assert_eq!(Step::Postcode.previous(), None);
        assert_eq!(Step::SelectSkip.previous(), Some(Step::WasteType));
    }

    #[test]
    fn test_ids_are_kebab_case() {
        assert_eq!(Step::SelectSkip.to_string(), "select-skip");
        assert_eq!(Step::WasteType.to_string(), "waste-type");
        assert_eq!("permit-check".parse::<Step>().ok(), Some(Step::PermitCheck));
        assert!("select_skip".parse::<Step>().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(Step::ChooseDate.name(), "Choose Date");
        assert_eq!(Step::Payment.number(), 6);
        assert_eq!(Step::Postcode.meta().to_string(), "⌖ Postcode");
    }
}
