// Locale-aware number formatting for the display layer.
//
// The transform layer passes raw numbers everywhere; only the widgets call
// into this module. Mirrors the original dashboard's fr-FR display rules
// (space grouping, comma decimals, compact notation above one million),
// with an English variant for non-French alliances.

use serde::Deserialize;

/// Display locale. Only affects formatting, never the transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fr,
    En,
}

impl Locale {
    fn group_separator(&self) -> char {
        match self {
            Locale::Fr => ' ',
            Locale::En => ',',
        }
    }

    fn decimal_mark(&self) -> char {
        match self {
            Locale::Fr => ',',
            Locale::En => '.',
        }
    }

    fn millions_suffix(&self) -> &'static str {
        match self {
            Locale::Fr => " M",
            Locale::En => "M",
        }
    }

    /// Integer with thousands grouping: 48200 -> "48 200" (fr) / "48,200" (en).
    pub fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                out.push(self.group_separator());
            }
            out.push(c);
        }
        out
    }

    /// Standard notation with at most one fraction digit, trailing zero
    /// trimmed: 30792.9 -> "30 792,9" (fr); 44600.0 -> "44 600".
    pub fn standard(&self, value: f64) -> String {
        let rounded = (value * 10.0).round() / 10.0;
        let whole = rounded.trunc() as u64;
        let tenth = ((rounded - rounded.trunc()) * 10.0).round() as u64;
        if tenth == 0 {
            self.group(whole)
        } else {
            format!("{}{}{}", self.group(whole), self.decimal_mark(), tenth)
        }
    }

    /// Compact notation above one million, standard below: matches the
    /// original card formatting (`notation: compact` when value > 1e6).
    pub fn compact(&self, value: f64) -> String {
        if value > 1_000_000.0 {
            let millions = value / 1_000_000.0;
            let rounded = (millions * 10.0).round() / 10.0;
            let whole = rounded.trunc() as u64;
            let tenth = ((rounded - rounded.trunc()) * 10.0).round() as u64;
            let body = if tenth == 0 {
                self.group(whole)
            } else {
                format!("{}{}{}", self.group(whole), self.decimal_mark(), tenth)
            };
            format!("{}{}", body, self.millions_suffix())
        } else {
            self.standard(value)
        }
    }

    /// Final score with exactly two fraction digits: 195.25 -> "195,25" (fr).
    pub fn score(&self, value: f64) -> String {
        format!("{:.2}", value).replacen('.', &self.decimal_mark().to_string(), 1)
    }

    /// Percentage with one fraction digit: 54.73 -> "54,7%" (fr).
    pub fn percent(&self, value: f64) -> String {
        let text = format!("{:.1}", value).replacen('.', &self.decimal_mark().to_string(), 1);
        format!("{text}%")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
