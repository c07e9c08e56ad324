/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Ordered CSS declaration blocks.

use std::fmt;

/// An ordered list of `property: value` pairs.
///
/// Later entries win over earlier ones for the same property, exactly like a
/// CSS declaration block, which is how conditional rules (inline width,
/// hidden label) override the base layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<(&'static str, String)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.entries.push((property, value.into()));
    }

    /// Effective value of `property`, i.e. the last one declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as the value of an HTML `style` attribute.
    pub fn to_inline_style(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.entries {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_style_rendering() {
        let decls = Declarations::new()
            .with("position", "relative")
            .with("width", "100%");
        assert_eq!(decls.to_inline_style(), "position: relative; width: 100%;");
    }

    #[test]
    fn test_last_declaration_wins() {
        let decls = Declarations::new()
            .with("width", "100%")
            .with("width", "auto");
        assert_eq!(decls.get("width"), Some("auto"));
        assert_eq!(decls.get("height"), None);
    }

    #[test]
    fn test_empty_block_renders_nothing() {
        assert!(Declarations::new().is_empty());
        assert_eq!(Declarations::new().to_inline_style(), "");
    }
}
