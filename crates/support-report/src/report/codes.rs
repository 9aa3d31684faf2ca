//! Fixed lookup tables mapping the numeric scale values from the assessment
//! form to their short codes and picker labels.
//!
//! Lookups are total: every defined value maps to its code, everything else
//! (including the "not selected" zero) maps to an empty string.

/// One row of a scale table.
#[derive(Debug, Clone, Copy)]
pub struct ScaleEntry {
    pub value: f64,
    pub code: &'static str,
    pub label: &'static str,
}

/// Support level scale (rodzaj wsparcia).
pub const SUPPORT_LEVELS: [ScaleEntry; 4] = [
    ScaleEntry {
        value: 0.8,
        code: "WT",
        label: "Towarzyszące (0.8)",
    },
    ScaleEntry {
        value: 0.9,
        code: "WC",
        label: "Częściowe (0.9)",
    },
    ScaleEntry {
        value: 0.99,
        code: "WP",
        label: "Pełne (0.99)",
    },
    ScaleEntry {
        value: 1.0,
        code: "WS",
        label: "Szczególne (1.0)",
    },
];

/// Support frequency scale (częstotliwość wsparcia).
pub const FREQUENCIES: [ScaleEntry; 4] = [
    ScaleEntry {
        value: 0.5,
        code: "D",
        label: "Czasami (0.5)",
    },
    ScaleEntry {
        value: 0.75,
        code: "C",
        label: "Często (0.75)",
    },
    ScaleEntry {
        value: 0.95,
        code: "B",
        label: "Bardzo często (0.95)",
    },
    ScaleEntry {
        value: 1.0,
        code: "A",
        label: "Zawsze (1.0)",
    },
];

fn lookup(table: &[ScaleEntry], value: f64) -> Option<&'static str> {
    table
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.code)
}

fn lookup_label(table: &[ScaleEntry], value: f64) -> Option<&'static str> {
    table
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.label)
}

/// Short code for a support level value ("" when unselected or unknown).
pub fn support_code(value: f64) -> &'static str {
    lookup(&SUPPORT_LEVELS, value).unwrap_or("")
}

/// Short code for a frequency value ("" when unselected or unknown).
pub fn frequency_code(value: f64) -> &'static str {
    lookup(&FREQUENCIES, value).unwrap_or("")
}

/// Picker label for a support level value ("" when unselected or unknown).
pub fn support_label(value: f64) -> &'static str {
    lookup_label(&SUPPORT_LEVELS, value).unwrap_or("")
}

/// Picker label for a frequency value ("" when unselected or unknown).
pub fn frequency_label(value: f64) -> &'static str {
    lookup_label(&FREQUENCIES, value).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_defined_support_value_maps_to_its_code() {
        assert_eq!(support_code(0.8), "WT");
        assert_eq!(support_code(0.9), "WC");
        assert_eq!(support_code(0.99), "WP");
        assert_eq!(support_code(1.0), "WS");
    }

    #[test]
    fn every_defined_frequency_value_maps_to_its_code() {
        assert_eq!(frequency_code(0.5), "D");
        assert_eq!(frequency_code(0.75), "C");
        assert_eq!(frequency_code(0.95), "B");
        assert_eq!(frequency_code(1.0), "A");
    }

    #[test]
    fn undefined_values_map_to_empty_string_not_error() {
        assert_eq!(support_code(0.0), "");
        assert_eq!(support_code(0.85), "");
        assert_eq!(frequency_code(0.0), "");
        assert_eq!(frequency_code(0.51), "");
    }

    #[test]
    fn labels_follow_the_same_rules() {
        assert_eq!(support_label(0.8), "Towarzyszące (0.8)");
        assert_eq!(frequency_label(1.0), "Zawsze (1.0)");
        assert_eq!(support_label(0.1), "");
    }
}
