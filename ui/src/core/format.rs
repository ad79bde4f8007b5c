//! Formatting helpers for presenting metrics.
//!
//! Values are shown with exactly two decimals and grouped thousands. The
//! default style mirrors `en-GB` (`1,234.50`); other locales swap the marks.

/// Grouping and decimal marks for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub group: char,
    pub decimal: char,
    /// Integer digits required before the first group mark (CLDR minimum
    /// grouping digits plus three).
    pub min_group_digits: usize,
}

impl NumberStyle {
    pub const EN: Self = Self {
        group: ',',
        decimal: '.',
        min_group_digits: 4,
    };
    pub const ES: Self = Self {
        group: '.',
        decimal: ',',
        min_group_digits: 5,
    };
    pub const FR: Self = Self {
        group: '\u{202f}',
        decimal: ',',
        min_group_digits: 4,
    };

    /// Pick marks from a language tag such as `fr-FR`; unknown tags use `EN`.
    pub fn for_language(tag: &str) -> Self {
        match tag.split(['-', '_']).next().unwrap_or_default() {
            "es" => Self::ES,
            "fr" => Self::FR,
            _ => Self::EN,
        }
    }
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::EN
    }
}

/// Two-decimal, thousands-grouped rendering in the default style.
pub fn format_number(value: f64) -> String {
    format_number_with(value, NumberStyle::EN)
}

/// Absent input formats as zero.
pub fn format_optional(value: Option<f64>) -> String {
    format_number(value.unwrap_or_default())
}

pub fn format_number_with(value: f64, style: NumberStyle) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    // Ties round away from zero; `{:.2}` alone would round them to even.
    let fixed = format!("{:.2}", (value.abs() * 100.0).round() / 100.0);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let group = int_part.len() >= style.min_group_digits;

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if group && i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(style.group);
        }
        grouped.push(digit);
    }

    // -0.001 rounds to "0.00"; don't print a sign for it.
    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}{}{frac_part}", style.decimal)
}

/// Raw passthrough used when a tile has no transform and formatting is off.
pub fn format_raw(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_absent_render_as_zero() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_optional(None), "0.00");
        assert_eq!(format_number(f64::NAN), "0.00");
    }

    #[test]
    fn groups_thousands_with_two_decimals() {
        assert_eq!(format_number(1234.5), "1,234.50");
        assert_eq!(format_number(999.999), "1,000.00");
        assert_eq!(format_number(1_234_567.891), "1,234,567.89");
        assert_eq!(format_number(12.0), "12.00");
        assert_eq!(format_number(-4321.0), "-4,321.00");
        assert_eq!(format_number(-0.001), "0.00");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_number(0.125), "0.13");
        assert_eq!(format_number(0.375), "0.38");
        assert_eq!(format_number(-0.125), "-0.13");
        // 1.005 is stored just below the tie.
        assert_eq!(format_number(1.005), "1.00");
    }

    #[test]
    fn locale_marks() {
        assert_eq!(format_number_with(12_345.5, NumberStyle::ES), "12.345,50");
        assert_eq!(
            format_number_with(1234.5, NumberStyle::for_language("fr-FR")),
            "1\u{202f}234,50"
        );
        assert_eq!(NumberStyle::for_language("de-DE"), NumberStyle::EN);
    }

    #[test]
    fn spanish_skips_grouping_below_ten_thousand() {
        assert_eq!(format_number_with(1234.5, NumberStyle::ES), "1234,50");
        assert_eq!(format_number_with(9999.0, NumberStyle::ES), "9999,00");
        assert_eq!(format_number_with(1234.5, NumberStyle::EN), "1,234.50");
    }

    #[test]
    fn raw_passthrough() {
        assert_eq!(format_raw(5.0), "5");
        assert_eq!(format_raw(2.5), "2.5");
    }
}
