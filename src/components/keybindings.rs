//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the part of the screen
//! holding focus. The same registry drives key dispatch, the navigation bar
//! and the help overlay, so the hints can never drift from the behaviour.

use crate::step::Step;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputContext {
    /// Step progress header
    Header,
    /// Skip cards on the select-skip step
    SkipGrid,
    /// Content of a placeholder step
    Placeholder,
}

impl InputContext {
    /// Display name used by the help overlay
    pub fn label(self) -> &'static str {
        match self {
            Self::Header => "Step Header",
            Self::SkipGrid => "Skip Selection",
            Self::Placeholder => "Step Screen",
        }
    }
}

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateLeft,
    NavigateRight,
    NavigateUp,
    NavigateDown,
    /// Open the step under the header cursor
    OpenStep,
    /// Jump straight to a step by its 0-based position
    GoToStep(usize),
    /// Toggle the focused skip
    ToggleSkip,
    Continue,
    Back,
    SwitchFocus,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        // Shifted characters arrive with SHIFT set; only Ctrl/Alt must match exactly
        let significant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        (event.modifiers & significant) == (self.modifiers & significant)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Context-specific keybindings
    context_bindings: HashMap<InputContext, Vec<Keybinding>>,
    /// Global keybindings (available in all contexts)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            context_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all contexts
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::SwitchFocus, "Tab", "Switch focus"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];
        // Number keys jump to steps; one entry per step keeps dispatch table-driven
        for step in Step::SEQUENCE {
            let digit = char::from(b'1' + step.index() as u8);
            self.global_bindings.push(Keybinding::new(
                KeyCode::Char(digit),
                KeyAction::GoToStep(step.index()),
                "1-6",
                "Jump to step",
            ));
        }

        self.context_bindings.insert(
            InputContext::Header,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::NavigateLeft, "Left", "Previous step"),
                Keybinding::new(KeyCode::Right, KeyAction::NavigateRight, "Right", "Next step"),
                Keybinding::new(KeyCode::Enter, KeyAction::OpenStep, "Enter", "Open step"),
            ],
        );

        self.context_bindings.insert(
            InputContext::SkipGrid,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::NavigateLeft, "Left", "Previous skip"),
                Keybinding::new(KeyCode::Right, KeyAction::NavigateRight, "Right", "Next skip"),
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Row above"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Row below"),
                Keybinding::new(KeyCode::Enter, KeyAction::ToggleSkip, "Enter", "Select skip"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::ToggleSkip, "Space", "Select skip"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::Continue, "C", "Continue"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Back, "Bksp", "Back"),
            ],
        );

        self.context_bindings.insert(
            InputContext::Placeholder,
            vec![
                Keybinding::new(KeyCode::Char('c'), KeyAction::Continue, "C", "Continue"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Back, "Bksp", "Back"),
            ],
        );
    }

    /// Get keybindings for a specific context (includes global bindings)
    pub fn get_bindings(&self, context: InputContext) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(context_bindings) = self.context_bindings.get(&context) {
            bindings.extend(context_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Map a key event to an action in the given context.
    ///
    /// Context bindings shadow global ones. Key releases are ignored.
    pub fn resolve(&self, context: InputContext, event: &KeyEvent) -> Option<KeyAction> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        self.get_bindings(context)
            .into_iter()
            .find(|binding| binding.matches(event))
            .map(|binding| binding.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, context: InputContext) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(context);

        let priority_actions: &[KeyAction] = match context {
            InputContext::Header => &[
                KeyAction::NavigateLeft,
                KeyAction::OpenStep,
                KeyAction::SwitchFocus,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            InputContext::SkipGrid => &[
                KeyAction::NavigateLeft,
                KeyAction::ToggleSkip,
                KeyAction::Continue,
                KeyAction::SwitchFocus,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            InputContext::Placeholder => &[
                KeyAction::Continue,
                KeyAction::Back,
                KeyAction::SwitchFocus,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            // Arrow keys collapse into a single hint
            if *action == KeyAction::NavigateLeft {
                let arrows = if context == InputContext::SkipGrid {
                    "Arrows"
                } else {
                    "Left/Right"
                };
                items.push(NavBarItem {
                    key_display: arrows.to_string(),
                    action_label: "Move".to_string(),
                });
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == *action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a context (for help overlay)
    pub fn get_help_content(&self, context: InputContext) -> Vec<HelpSection> {
        let bindings = self.get_bindings(context);
        let mut sections = Vec::new();

        let mut push_section = |title: &str, filter: fn(&KeyAction) -> bool| {
            let mut items: Vec<(String, String)> = Vec::new();
            for binding in bindings.iter().filter(|b| filter(&b.action)) {
                let item = (binding.display.clone(), binding.description.clone());
                if !items.contains(&item) {
                    items.push(item);
                }
            }
            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        };

        push_section("Navigation", |action| {
            matches!(
                action,
                KeyAction::NavigateLeft
                    | KeyAction::NavigateRight
                    | KeyAction::NavigateUp
                    | KeyAction::NavigateDown
                    | KeyAction::GoToStep(_)
                    | KeyAction::SwitchFocus
            )
        });
        push_section("Actions", |action| {
            matches!(
                action,
                KeyAction::OpenStep | KeyAction::ToggleSkip | KeyAction::Continue
            )
        });
        push_section("General", |action| {
            matches!(action, KeyAction::Back | KeyAction::Help | KeyAction::Quit)
        });

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_depends_on_context() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(InputContext::Header, &key(KeyCode::Enter)),
            Some(KeyAction::OpenStep)
        );
        assert_eq!(
            ctx.resolve(InputContext::SkipGrid, &key(KeyCode::Enter)),
            Some(KeyAction::ToggleSkip)
        );
        assert_eq!(ctx.resolve(InputContext::Placeholder, &key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_number_keys_jump_to_steps() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(InputContext::Header, &key(KeyCode::Char('1'))),
            Some(KeyAction::GoToStep(0))
        );
        assert_eq!(
            ctx.resolve(InputContext::SkipGrid, &key(KeyCode::Char('6'))),
            Some(KeyAction::GoToStep(5))
        );
        assert_eq!(ctx.resolve(InputContext::SkipGrid, &key(KeyCode::Char('7'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_continues() {
        let ctx = KeybindingContext::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            ctx.resolve(InputContext::SkipGrid, &ctrl_c),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            ctx.resolve(InputContext::SkipGrid, &key(KeyCode::Char('c'))),
            Some(KeyAction::Continue)
        );
        assert_eq!(ctx.resolve(InputContext::Header, &key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_shifted_question_mark_opens_help() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.resolve(InputContext::Header, &event), Some(KeyAction::Help));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let ctx = KeybindingContext::new();
        let mut event = key(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(ctx.resolve(InputContext::Header, &event), None);
    }

    #[test]
    fn test_nav_items_include_help_and_quit() {
        let ctx = KeybindingContext::new();
        for context in [
            InputContext::Header,
            InputContext::SkipGrid,
            InputContext::Placeholder,
        ] {
            let items = ctx.get_nav_items(context);
            assert!(items.iter().any(|i| i.action_label == "Help"));
            assert!(items.iter().any(|i| i.action_label == "Quit"));
        }
    }

    #[test]
    fn test_help_sections_are_deduplicated() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(InputContext::SkipGrid);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "General"]);

        let navigation = &sections[0];
        let jumps = navigation
            .items
            .iter()
            .filter(|(key, _)| key == "1-6")
            .count();
        assert_eq!(jumps, 1);
    }
}
