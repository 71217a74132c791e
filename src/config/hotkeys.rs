//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the timer screen, including
//! action types, key bindings and their serialized form in the config file.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    ToggleRun,
    Reset,
    Dismiss,
    FocusNext,
    FocusPrev,
    Activate,
    ToggleLog,
    CycleTheme,
    Quit,
}

impl HotkeyAction {
    pub const ALL: [HotkeyAction; 9] = [
        HotkeyAction::ToggleRun,
        HotkeyAction::Reset,
        HotkeyAction::Dismiss,
        HotkeyAction::FocusNext,
        HotkeyAction::FocusPrev,
        HotkeyAction::Activate,
        HotkeyAction::ToggleLog,
        HotkeyAction::CycleTheme,
        HotkeyAction::Quit,
    ];
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn new(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn char(c: char) -> Self {
        Hotkey::new(KeyCode::Char(c))
    }

    /// The key as far as matching is concerned. Shift is dropped for
    /// character keys since the character already carries it.
    ///
    pub fn normalized(&self) -> Hotkey {
        match self.code {
            KeyCode::Char(_) => Hotkey {
                code: self.code,
                modifiers: self.modifiers.difference(KeyModifiers::SHIFT),
            },
            _ => self.clone(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hotkeys {
    bindings: HashMap<HotkeyAction, Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl Hotkeys {
    pub fn get(&self, action: HotkeyAction) -> Option<&Hotkey> {
        self.bindings.get(&action)
    }

    pub fn bind(&mut self, action: HotkeyAction, hotkey: Hotkey) {
        self.bindings.insert(action, hotkey);
    }

    /// Return these bindings with every action missing from them taken from
    /// the defaults.
    ///
    pub fn merged_with_defaults(mut self) -> Self {
        for (action, hotkey) in default_hotkeys().bindings {
            self.bindings.entry(action).or_insert(hotkey);
        }
        self
    }

    /// Return the first action bound to a preset digit, if any. Plain
    /// `1`..=`9` always tap presets, so such a binding would never fire.
    ///
    pub fn find_preset_digit(&self) -> Option<HotkeyAction> {
        HotkeyAction::ALL.iter().copied().find(|action| {
            self.get(*action).map_or(false, is_preset_digit)
        })
    }

    /// Return the first pair of actions sharing a key, if any.
    ///
    pub fn find_conflict(&self) -> Option<(HotkeyAction, HotkeyAction)> {
        for (i, a) in HotkeyAction::ALL.iter().enumerate() {
            for b in HotkeyAction::ALL.iter().skip(i + 1) {
                if let (Some(x), Some(y)) = (self.get(*a), self.get(*b)) {
                    if x.normalized() == y.normalized() {
                        return Some((*a, *b));
                    }
                }
            }
        }
        None
    }
}

/// Returns the default hotkey mappings.
///
pub fn default_hotkeys() -> Hotkeys {
    let mut bindings = HashMap::new();
    bindings.insert(HotkeyAction::ToggleRun, Hotkey::char(' '));
    bindings.insert(HotkeyAction::Reset, Hotkey::char('r'));
    bindings.insert(HotkeyAction::Dismiss, Hotkey::char('d'));
    bindings.insert(HotkeyAction::FocusNext, Hotkey::char('l'));
    bindings.insert(HotkeyAction::FocusPrev, Hotkey::char('h'));
    bindings.insert(HotkeyAction::Activate, Hotkey::new(KeyCode::Enter));
    bindings.insert(
        HotkeyAction::ToggleLog,
        Hotkey {
            code: KeyCode::Char('L'),
            modifiers: KeyModifiers::SHIFT,
        },
    );
    bindings.insert(HotkeyAction::CycleTheme, Hotkey::char('t'));
    bindings.insert(HotkeyAction::Quit, Hotkey::char('q'));
    Hotkeys { bindings }
}

/// Returns whether `hotkey` is a plain digit `1`..=`9`, the preset keys.
///
pub fn is_preset_digit(hotkey: &Hotkey) -> bool {
    matches!(hotkey.code, KeyCode::Char('1'..='9'))
        && !hotkey
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Checks if a KeyEvent matches a Hotkey. Shift is ignored for character
/// keys since the character already carries it.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    Hotkey {
        code: event.code,
        modifiers: event.modifiers,
    }
    .normalized()
        == hotkey.normalized()
}

/// Gets the action bound to a KeyEvent.
///
pub fn get_action_for_event(event: &KeyEvent, hotkeys: &Hotkeys) -> Option<HotkeyAction> {
    hotkeys
        .bindings
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &Hotkeys,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        if let Some(hotkey) = hotkeys.get(*action) {
            match paired_action.and_then(|paired| hotkeys.get(paired)) {
                Some(paired_hotkey) => parts.push(format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                )),
                None => parts.push(format!(
                    " {}: {}",
                    format_hotkey_display(hotkey),
                    description
                )),
            }
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    // Uppercase characters already show the shift
    let shifted_char = matches!(hotkey.code, KeyCode::Char(c) if c.is_uppercase());
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) && !shifted_char {
        parts.push("Shift");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::char('r');
        assert!(matches_hotkey(
            &key(KeyCode::Char('r'), KeyModifiers::empty()),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &key(KeyCode::Char('t'), KeyModifiers::empty()),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &key(KeyCode::Char('r'), KeyModifiers::CONTROL),
            &hotkey
        ));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let hotkeys = default_hotkeys();
        let with_shift = key(KeyCode::Char('L'), KeyModifiers::SHIFT);
        let without_shift = key(KeyCode::Char('L'), KeyModifiers::empty());
        assert_eq!(
            get_action_for_event(&with_shift, &hotkeys),
            Some(HotkeyAction::ToggleLog)
        );
        assert_eq!(
            get_action_for_event(&without_shift, &hotkeys),
            Some(HotkeyAction::ToggleLog)
        );
    }

    #[test]
    fn test_get_action_for_event() {
        let hotkeys = default_hotkeys();
        let space = key(KeyCode::Char(' '), KeyModifiers::empty());
        assert_eq!(
            get_action_for_event(&space, &hotkeys),
            Some(HotkeyAction::ToggleRun)
        );
        let enter = key(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(
            get_action_for_event(&enter, &hotkeys),
            Some(HotkeyAction::Activate)
        );
        let unbound = key(KeyCode::Char('z'), KeyModifiers::empty());
        assert_eq!(get_action_for_event(&unbound, &hotkeys), None);
    }

    #[test]
    fn test_default_hotkeys_cover_every_action() {
        let hotkeys = default_hotkeys();
        for action in HotkeyAction::ALL {
            assert!(hotkeys.get(action).is_some(), "{:?} unbound", action);
        }
        assert_eq!(hotkeys.find_conflict(), None);
    }

    #[test]
    fn test_find_conflict_ignores_shift_on_chars() {
        let mut hotkeys = default_hotkeys();
        hotkeys.bind(HotkeyAction::Quit, Hotkey::char('L'));
        assert_eq!(
            hotkeys.find_conflict(),
            Some((HotkeyAction::ToggleLog, HotkeyAction::Quit))
        );
    }

    #[test]
    fn test_shift_still_matters_for_other_keys() {
        let mut hotkeys = default_hotkeys();
        hotkeys.bind(
            HotkeyAction::FocusPrev,
            Hotkey {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::SHIFT,
            },
        );
        assert_eq!(hotkeys.find_conflict(), None);
        let shifted = key(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(
            get_action_for_event(&shifted, &hotkeys),
            Some(HotkeyAction::FocusPrev)
        );
    }

    #[test]
    fn test_find_preset_digit() {
        let mut hotkeys = default_hotkeys();
        assert_eq!(hotkeys.find_preset_digit(), None);
        hotkeys.bind(
            HotkeyAction::Reset,
            Hotkey {
                code: KeyCode::Char('1'),
                modifiers: KeyModifiers::CONTROL,
            },
        );
        assert_eq!(hotkeys.find_preset_digit(), None);
        hotkeys.bind(HotkeyAction::Reset, Hotkey::char('1'));
        assert_eq!(hotkeys.find_preset_digit(), Some(HotkeyAction::Reset));
        hotkeys.bind(HotkeyAction::Reset, Hotkey::char('0'));
        assert_eq!(hotkeys.find_preset_digit(), None);
    }

    #[test]
    fn test_find_conflict() {
        let mut hotkeys = default_hotkeys();
        hotkeys.bind(HotkeyAction::Reset, Hotkey::char('q'));
        assert_eq!(
            hotkeys.find_conflict(),
            Some((HotkeyAction::Reset, HotkeyAction::Quit))
        );
    }

    #[test]
    fn test_merge_keeps_overrides() {
        let overrides: Hotkeys = serde_yaml::from_str(
            "reset:\n  code: Char\n  char: x\n",
        )
        .unwrap();
        let merged = overrides.merged_with_defaults();
        assert_eq!(merged.get(HotkeyAction::Reset), Some(&Hotkey::char('x')));
        assert_eq!(merged.get(HotkeyAction::Quit), Some(&Hotkey::char('q')));
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::CONTROL,
        };
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("Tab"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);
    }

    #[test]
    fn test_char_without_char_field_is_rejected() {
        let result: Result<Hotkey, _> = serde_yaml::from_str("code: Char\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::char(' ')), "Space");
        assert_eq!(
            format_hotkey_display(&Hotkey {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            "Ctrl+c"
        );
        assert_eq!(
            format_hotkey_display(&Hotkey {
                code: KeyCode::Char('L'),
                modifiers: KeyModifiers::SHIFT,
            }),
            "L"
        );
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys,
            &[
                (HotkeyAction::ToggleRun, "start/pause", None),
                (HotkeyAction::FocusPrev, "focus", Some(HotkeyAction::FocusNext)),
            ],
        );
        assert_eq!(text, " Space: start/pause, h/l: focus");
    }
}
