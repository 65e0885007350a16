use catalog_core::action::Action;
use catalog_core::config::keymap::Keymap;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Quit the application.
    Quit,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Jump cursor to the first card (gg).
    CursorTop,
    /// Jump cursor to the last card (G).
    CursorBottom,
    /// Toggle selection of the focused card.
    ToggleSelect,
    /// Request deletion of the selected products.
    RequestDelete,
    /// User confirmed the pending action.
    ConfirmApproved,
    /// Restore everything and clear the search input.
    Reset,
    /// Advance the sort control.
    SortCycle,
    /// Enter a new AppMode.
    EnterMode(AppMode),
    /// Append a character to the search text.
    SearchChar(char),
    /// Remove the last character from the search text.
    SearchBackspace,
    /// Apply the search text now and leave the search bar.
    SearchSubmit,
    /// Leave the search bar; the text keeps debouncing.
    SearchCancel,
    /// No action for this key.
    None,
}

/// Tracks state for multi-key sequences like "gg".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    pending: Vec<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys typed so far of an unfinished multi-key binding.
    #[cfg(test)]
    pub fn pending(&self) -> &[String] {
        &self.pending
    }
}

/// Maps a key event to an InputAction based on the current mode.
/// Returns the action and a new InputState (immutable pattern).
///
/// In Normal mode, keys are resolved through the `Keymap`; Ctrl+C always
/// quits. Search, Confirm and Help keys are fixed.
pub fn handle_key(
    key: KeyEvent,
    mode: &AppMode,
    state: &InputState,
    keymap: &Keymap,
) -> (InputAction, InputState) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return (InputAction::Quit, InputState::new());
    }
    match mode {
        AppMode::Normal => handle_normal_key(key, state, keymap),
        AppMode::Search => handle_search_key(key),
        AppMode::Confirm(_) => handle_confirm_key(key),
        AppMode::Help => handle_help_key(key),
    }
}

/// Converts an `Action` enum variant to the corresponding `InputAction`.
pub fn resolve_action(action: Action) -> InputAction {
    match action {
        Action::CursorUp => InputAction::CursorUp,
        Action::CursorDown => InputAction::CursorDown,
        Action::CursorLeft => InputAction::CursorLeft,
        Action::CursorRight => InputAction::CursorRight,
        Action::CursorTop => InputAction::CursorTop,
        Action::CursorBottom => InputAction::CursorBottom,
        Action::ToggleSelect => InputAction::ToggleSelect,
        Action::DeleteSelected => InputAction::RequestDelete,
        Action::Reset => InputAction::Reset,
        Action::Search => InputAction::EnterMode(AppMode::Search),
        Action::SortCycle => InputAction::SortCycle,
        Action::Help => InputAction::EnterMode(AppMode::Help),
        Action::Quit => InputAction::Quit,
    }
}

/// Keymap name of a key press (`"j"`, `"G"`, `"Space"`, `"Enter"`, `"Up"`).
/// Keys held with Ctrl or Alt have no name and are never bound.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => return None,
    };
    Some(name)
}

fn handle_normal_key(
    key: KeyEvent,
    state: &InputState,
    keymap: &Keymap,
) -> (InputAction, InputState) {
    let Some(name) = key_name(&key) else {
        return (InputAction::None, InputState::new());
    };

    // Continue a multi-key sequence; an unmatched key cancels it.
    if !state.pending.is_empty() {
        let mut sequence = state.pending.clone();
        sequence.push(name);
        if let Some(action) = keymap.action_for_sequence(&sequence) {
            return (resolve_action(action), InputState::new());
        }
        if keymap.has_prefix(&sequence) {
            return (InputAction::None, InputState { pending: sequence });
        }
        return (InputAction::None, InputState::new());
    }

    let sequence = vec![name];
    if keymap.has_prefix(&sequence) {
        return (InputAction::None, InputState { pending: sequence });
    }
    let action = keymap
        .action_for_sequence(&sequence)
        .map(resolve_action)
        .unwrap_or(InputAction::None);
    (action, InputState::new())
}

fn handle_search_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc => InputAction::SearchCancel,
        KeyCode::Enter => InputAction::SearchSubmit,
        KeyCode::Backspace => InputAction::SearchBackspace,
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::None,
        KeyCode::Char(c) => InputAction::SearchChar(c),
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_confirm_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => InputAction::ConfirmApproved,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            InputAction::EnterMode(AppMode::Normal)
        }
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_help_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            InputAction::EnterMode(AppMode::Normal)
        }
        _ => InputAction::None,
    };
    (action, new_state)
}
