//! Skip Hire Library
//!
//! Booking state machine, skip catalog and the terminal wizard built on them.

pub mod app;
pub mod booking;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod error;
pub mod logging;
pub mod report;
pub mod settings;
pub mod step;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppState, Focus};
pub use booking::{BookingSession, SelectionChange, StepStatus, TransitionRejected};
pub use catalog::{Catalog, SizeClass, Skip, SkipId};
pub use error::SkipHireError;
pub use settings::Settings;
pub use step::{Step, StepMeta};
