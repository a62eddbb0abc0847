//! Form field value objects

use serde::Serialize;
use std::fmt;

/// The three inputs of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    /// All fields in tab order
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your.email@example.com",
            Self::Message => "Your message (minimum 20 characters)...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.name.is_multiline()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Number of characters typed, counted as the user sees them
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Value with one more character appended
    pub fn with_char(&self, c: char) -> String {
        let mut value = self.value.clone();
        value.push(c);
        value
    }

    /// Value with the last character removed
    pub fn without_last_char(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            self.name.placeholder()
        } else {
            &self.value
        }
    }
}
