//! Reusable TUI components
//!
//! - `keybindings` - context-aware key registry shared by dispatch and hints
//! - `nav_bar` - bottom key hint strip
//! - `floating_window` - centred popup
//! - `help_overlay` - keybinding help shown in a floating window

pub mod floating_window;
pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
