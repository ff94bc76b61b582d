#![forbid(unsafe_code)]

//! Option lists for selectable-list inputs.

/// A `(value, label)` pair offered by a selectable-list input.
///
/// Labels may be empty; an empty label is valid and distinct from "no
/// option matches".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuOption {
    /// The committed value.
    pub value: String,
    /// The human-readable label shown for the value.
    pub label: String,
}

impl MenuOption {
    /// Create an option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Find the label of the first option whose value matches, in insertion
/// order.
#[must_use]
pub fn label_for_value<'a>(options: &'a [MenuOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.as_str())
}

/// Resolve the label to display for a value.
///
/// Precedence, highest first: an explicit caller-supplied override, the
/// label of the option whose value matches, the empty string. The
/// override wins even when an option matches with a different label, so
/// a value no longer present in the option list can still show a
/// human-readable label.
#[must_use]
pub fn display_label<'a>(
    options: &'a [MenuOption],
    value: &str,
    override_label: Option<&'a str>,
) -> &'a str {
    if let Some(label) = override_label {
        return label;
    }
    label_for_value(options, value).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<MenuOption> {
        vec![
            MenuOption::new("value1", "Value 1"),
            MenuOption::new("value2", "Value 2"),
            MenuOption::new("value3", "Value 3"),
        ]
    }

    #[test]
    fn finds_label_by_value() {
        assert_eq!(label_for_value(&options(), "value2"), Some("Value 2"));
    }

    #[test]
    fn missing_value_has_no_label() {
        assert_eq!(label_for_value(&options(), "value99"), None);
    }

    #[test]
    fn empty_label_is_found_not_skipped() {
        let options = vec![
            MenuOption::new("v1", "L1"),
            MenuOption::new("v2", ""),
        ];
        assert_eq!(label_for_value(&options, "v2"), Some(""));
    }

    #[test]
    fn first_match_wins_on_duplicate_values() {
        let options = vec![
            MenuOption::new("dup", "first"),
            MenuOption::new("dup", "second"),
        ];
        assert_eq!(label_for_value(&options, "dup"), Some("first"));
    }

    #[test]
    fn display_label_prefers_override() {
        let options = options();
        assert_eq!(
            display_label(&options, "value3", Some("Some other label")),
            "Some other label"
        );
    }

    #[test]
    fn display_label_falls_back_to_option_label() {
        let options = options();
        assert_eq!(display_label(&options, "value1", None), "Value 1");
    }

    #[test]
    fn display_label_defaults_to_empty() {
        let options = options();
        assert_eq!(display_label(&options, "value99", None), "");
    }
}
