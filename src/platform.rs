//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut, accepted in
/// addition to Ctrl
/// - macOS: SUPER (Cmd key), when the terminal forwards it
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Whether `modifiers` trigger the submit shortcut
pub fn is_submit_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(SUBMIT_MODIFIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_always_submits() {
        assert!(is_submit_modifier(KeyModifiers::CONTROL));
        assert!(is_submit_modifier(SUBMIT_MODIFIER));
    }

    #[test]
    fn test_plain_keys_do_not_submit() {
        assert!(!is_submit_modifier(KeyModifiers::NONE));
        assert!(!is_submit_modifier(KeyModifiers::SHIFT));
    }
}
