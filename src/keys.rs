//! Keyboard bindings for the player.
//!
//! Thin adapter from discrete input events to the four control operations,
//! matching the reference player's shortcuts.

/// A discrete player command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Space
    TogglePlay,
    /// L
    ToggleLanguage,
    /// ArrowLeft: seek back by the configured step
    SeekBack,
    /// ArrowRight: seek forward by the configured step
    SeekForward,
}

/// Map a DOM-style key code to a player command.
pub fn command_for_code(code: &str) -> Option<KeyCommand> {
    match code {
        "Space" => Some(KeyCommand::TogglePlay),
        "KeyL" => Some(KeyCommand::ToggleLanguage),
        "ArrowLeft" => Some(KeyCommand::SeekBack),
        "ArrowRight" => Some(KeyCommand::SeekForward),
        _ => None,
    }
}
