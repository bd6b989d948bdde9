//! Input assignments: signal name to boolean level.

use std::collections::BTreeMap;

use crate::error::{Result, SwitchError};

/// Values for the symbolic gate signals of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputAssignment {
    values: BTreeMap<String, bool>,
}

impl InputAssignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a signal, returning the assignment for chaining.
    pub fn with(mut self, signal: impl Into<String>, level: bool) -> Self {
        self.set(signal, level);
        self
    }

    /// Set a signal, replacing any earlier value.
    pub fn set(&mut self, signal: impl Into<String>, level: bool) {
        self.values.insert(signal.into(), level);
    }

    /// Look up a signal.
    pub fn get(&self, signal: &str) -> Option<bool> {
        self.values.get(signal).copied()
    }

    /// Whether the signal has a value.
    pub fn contains(&self, signal: &str) -> bool {
        self.values.contains_key(signal)
    }

    /// All signals in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of assigned signals.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a single `NAME=VALUE` pair and add it.
    pub fn set_pair(&mut self, text: &str) -> Result<()> {
        let (name, value) = text
            .split_once('=')
            .ok_or_else(|| SwitchError::invalid_assignment(text, "expected NAME=VALUE"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(SwitchError::invalid_assignment(text, "missing signal name"));
        }

        let level = parse_level(value.trim()).ok_or_else(|| {
            SwitchError::invalid_assignment(text, format!("'{}' is not a logic level", value.trim()))
        })?;

        self.set(name, level);
        Ok(())
    }

    /// Parse a list of pairs separated by commas or whitespace, e.g. `A=1, B=0`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut assignment = Self::new();
        for pair in text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
        {
            assignment.set_pair(pair)?;
        }
        Ok(assignment)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for InputAssignment {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        let mut assignment = Self::new();
        for (name, level) in iter {
            assignment.set(name, level);
        }
        assignment
    }
}

/// Parse a logic level literal.
pub fn parse_level(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "1" | "true" | "high" | "h" => Some(true),
        "0" | "false" | "low" | "l" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let a = InputAssignment::parse("A=1, B=false\tC=High").unwrap();
        assert_eq!(a.get("A"), Some(true));
        assert_eq!(a.get("B"), Some(false));
        assert_eq!(a.get("C"), Some(true));
        assert_eq!(a.get("D"), None);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_later_value_wins() {
        let a = InputAssignment::parse("A=1 A=0").unwrap();
        assert_eq!(a.get("A"), Some(false));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = InputAssignment::parse("A").unwrap_err();
        assert!(matches!(err, SwitchError::InvalidAssignment { .. }));
        let err = InputAssignment::parse("=1").unwrap_err();
        assert!(matches!(err, SwitchError::InvalidAssignment { .. }));
        let err = InputAssignment::parse("A=maybe").unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_from_iter() {
        let a: InputAssignment = [("A", true), ("B", false)].into_iter().collect();
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![("A", true), ("B", false)]);
    }
}
