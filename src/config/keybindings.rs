//! Keybinding configuration for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Key strings bound to each action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub close: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub next_focus: Vec<String>,
    pub prev_focus: Vec<String>,
    pub activate: Vec<String>,
    pub load: Vec<String>,
    pub open_hd: Vec<String>,
    pub open_source: Vec<String>,
    pub play_video: Vec<String>,
    pub next_fact: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            close: keys(&["Esc"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            move_left: keys(&["h", "Left"]),
            move_right: keys(&["l", "Right"]),
            next_focus: keys(&["Tab"]),
            prev_focus: keys(&["BackTab", "Shift+Tab"]),
            activate: keys(&["Enter", "Space"]),
            load: keys(&["g", "F5"]),
            open_hd: keys(&["H"]),
            open_source: keys(&["o"]),
            play_video: keys(&["p"]),
            next_fact: keys(&["f"]),
        }
    }
}

impl KeybindingConfig {
    /// Map a key event to an action; the first matching binding wins.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table: [(&[String], Action); 14] = [
            (&self.quit, Action::Quit),
            (&self.close, Action::Close),
            (&self.move_up, Action::MoveUp),
            (&self.move_down, Action::MoveDown),
            (&self.move_left, Action::MoveLeft),
            (&self.move_right, Action::MoveRight),
            (&self.next_focus, Action::NextFocus),
            (&self.prev_focus, Action::PrevFocus),
            (&self.activate, Action::Activate),
            (&self.load, Action::Load),
            (&self.open_hd, Action::OpenHd),
            (&self.open_source, Action::OpenSource),
            (&self.play_video, Action::PlayVideo),
            (&self.next_fact, Action::NextFact),
        ];

        table
            .iter()
            .find(|(bindings, _)| matches_any(key, bindings))
            .map(|(_, action)| *action)
            .unwrap_or(Action::None)
    }
}

fn matches_any(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings
        .iter()
        .filter_map(|b| parse_key_string(b).ok())
        .any(|binding| binding.matches(key))
}

/// A parsed key binding with code and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is ignored when the binding does not ask for it, since
    /// uppercase characters already arrive with the shift flag set.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

/// Parse strings such as `"j"`, `"Space"`, `"F5"` or `"Ctrl+c"`.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    let mut parts: Vec<&str> = s.split('+').collect();
    // "+" on its own is a key, not a separator
    let key_part = match parts.pop() {
        Some("") if s.ends_with('+') => {
            parts.pop();
            "+"
        }
        Some(part) => part,
        None => return Err("Empty key binding".to_string()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(KeyBinding {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lowered = s.to_lowercase();
    if let Some(n) = lowered.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lowered.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "space" => Ok(KeyCode::Char(' ')),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "backspace" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        _ => Err(format!("Unknown key: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(parse_key_string("g").unwrap().code, KeyCode::Char('g'));
        assert_eq!(parse_key_string("Space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("F5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("F13").is_err());
        assert!(parse_key_string("Hyper+x").is_err());
    }

    #[test]
    fn test_parse_modifiers() {
        let binding = parse_key_string("Ctrl+Shift+a").unwrap();
        assert_eq!(binding.code, KeyCode::Char('a'));
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);

        let plus = parse_key_string("Ctrl++").unwrap();
        assert_eq!(plus.code, KeyCode::Char('+'));
        assert_eq!(plus.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_enter_and_space_both_activate() {
        let config = KeybindingConfig::default();
        assert_eq!(
            config.get_action(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Action::Activate
        );
        assert_eq!(
            config.get_action(&press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Action::Activate
        );
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingConfig::default();
        let cases = [
            (press(KeyCode::Esc, KeyModifiers::NONE), Action::Close),
            (press(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit),
            (press(KeyCode::Char('g'), KeyModifiers::NONE), Action::Load),
            (press(KeyCode::Char('H'), KeyModifiers::SHIFT), Action::OpenHd),
            (press(KeyCode::Char('h'), KeyModifiers::NONE), Action::MoveLeft),
            (press(KeyCode::BackTab, KeyModifiers::SHIFT), Action::PrevFocus),
            (press(KeyCode::Char('z'), KeyModifiers::NONE), Action::None),
        ];
        for (key, action) in cases {
            assert_eq!(config.get_action(&key), action, "{:?}", key);
        }
    }
}
