//! Hotkey menus.
//!
//! A label marks its hotkey in brackets (`"Visit the [B]lacksmith"`); numbered
//! entries use their position instead.

use std::fmt::Write as _;

/// One selectable entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption<T> {
    pub label: String,
    pub hotkey: char,
    pub value: T,
}

/// Hotkey marked as `[X]` in `label`, lowercased.
pub fn hotkey_from_label(label: &str) -> Option<char> {
    let start = label.find('[')?;
    let mut chars = label[start + 1..].chars();
    let key = chars.next()?;
    (chars.next() == Some(']')).then(|| key.to_ascii_lowercase())
}

/// Ordered options behind a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu<T> {
    prompt: String,
    options: Vec<MenuOption<T>>,
}

impl<T> Menu<T> {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option whose hotkey is bracketed in its label.
    ///
    /// Labels without a marker fall back to their first character.
    pub fn option(mut self, label: impl Into<String>, value: T) -> Self {
        let label = label.into();
        let hotkey = hotkey_from_label(&label)
            .or_else(|| label.chars().next().map(|c| c.to_ascii_lowercase()))
            .unwrap_or(' ');
        self.options.push(MenuOption {
            label,
            hotkey,
            value,
        });
        self
    }

    /// Adds an option selected by the next free digit.
    ///
    /// Only nine numbered entries fit; further ones are ignored.
    pub fn numbered(mut self, label: impl Into<String>, value: T) -> Self {
        let position = self
            .options
            .iter()
            .filter(|option| option.hotkey.is_ascii_digit())
            .count();
        let Some(hotkey) = char::from_digit(position as u32 + 1, 10) else {
            tracing::warn!("menu has more than nine numbered entries");
            return self;
        };
        self.options.push(MenuOption {
            label: format!("{hotkey}. {}", label.into()),
            hotkey,
            value,
        });
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[MenuOption<T>] {
        &self.options
    }

    /// The option bound to `key`, ignoring case.
    pub fn find(&self, key: char) -> Option<&T> {
        let key = key.to_ascii_lowercase();
        self.options
            .iter()
            .find(|option| option.hotkey == key)
            .map(|option| &option.value)
    }

    /// Prompt followed by one indented line per option.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.prompt);
        for option in &self.options {
            let _ = writeln!(out, "  {}", option.label);
        }
        out
    }
}
