//! RAGFlow Admin Utils - Shared Helpers
//!
//! Search matching, sequential identifiers, slider snapping and display
//! formatting used by several console views.
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

// =============================================================================
// Search Matching
// =============================================================================

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// =============================================================================
// Identifiers
// =============================================================================

/// Build an identifier such as `ds-007` from a prefix and sequence number.
pub fn sequence_id(prefix: &str, seq: u32, width: usize) -> String {
    format!("{}-{:0width$}", prefix, seq, width = width)
}

/// Extract the sequence number from an identifier built by [`sequence_id`].
pub fn parse_sequence(id: &str, prefix: &str) -> Option<u32> {
    id.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()
}

// =============================================================================
// Slider Ranges
// =============================================================================

/// Bounds and step of a numeric slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into range and round to the nearest step above `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Rounding can push past max when the span is not a multiple of step.
        let snapped = snapped.min(self.max);
        // Trim float noise such as 0.30000000000000004.
        (snapped * 1e6).round() / 1e6
    }

    /// Number of decimals needed to display a value on this step.
    pub fn decimals(&self) -> usize {
        let mut step = self.step;
        let mut decimals = 0;
        while decimals < 6 && (step - step.round()).abs() > 1e-9 {
            step *= 10.0;
            decimals += 1;
        }
        decimals
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

// =============================================================================
// Select Options
// =============================================================================

/// One entry of a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Label for `value`, or the value itself when it is not one of `choices`.
pub fn choice_label<'a>(choices: &[Choice], value: &'a str) -> &'a str {
    choices
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label)
        .unwrap_or(value)
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Shorten text to at most `max_chars` characters, appending an ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}

/// Format an integer with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Religion", "relig"));
        assert!(contains_ignore_case("Phật học cơ bản", "PHẬT"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Science", "history"));
    }

    #[test]
    fn test_sequence_ids() {
        assert_eq!(sequence_id("ds", 6, 3), "ds-006");
        assert_eq!(sequence_id("ds", 1234, 3), "ds-1234");
        assert_eq!(parse_sequence("ds-042", "ds"), Some(42));
        assert_eq!(parse_sequence("bot-1", "ds"), None);
        assert_eq!(parse_sequence("ds-abc", "ds"), None);
    }

    #[test]
    fn test_slider_snap() {
        let chunk_size = SliderRange::new(128.0, 2048.0, 128.0);
        assert_eq!(chunk_size.snap(500.0), 512.0);
        assert_eq!(chunk_size.snap(10.0), 128.0);
        assert_eq!(chunk_size.snap(9000.0), 2048.0);

        let threshold = SliderRange::new(0.0, 1.0, 0.01);
        assert_eq!(threshold.snap(0.784), 0.78);
        assert_eq!(threshold.snap(f64::NAN), 0.0);

        let weight = SliderRange::new(0.0, 1.0, 0.1);
        assert_eq!(weight.snap(0.3), 0.3);
    }

    #[test]
    fn test_slider_format() {
        assert_eq!(SliderRange::new(0.0, 1.0, 0.01).format(0.7), "0.70");
        assert_eq!(SliderRange::new(0.0, 1.0, 0.1).format(0.5), "0.5");
        assert_eq!(SliderRange::new(0.0, 100.0, 1.0).format(50.0), "50");
    }

    #[test]
    fn test_choice_label() {
        const MEMORY: &[Choice] = &[Choice::new("none", "None"), Choice::new("short-term", "Short-term")];
        assert_eq!(choice_label(MEMORY, "short-term"), "Short-term");
        assert_eq!(choice_label(MEMORY, "custom"), "custom");
    }

    #[test]
    fn test_formatting() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc…");
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(12543), "12,543");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
