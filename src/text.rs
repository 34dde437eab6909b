//! Text relationship engine.
//!
//! Character statistics, edit distance, and regex-backed format
//! classifiers over text payloads. Every entry point accepts either a
//! [`ContentElement`] or a raw string through the [`TextSource`] trait;
//! a non-text element fails with [`Error::NonTextContent`].
//!
//! The classifiers are heuristic pattern matchers, not semantic
//! validators: a date-shaped substring is accepted without checking
//! day/month ranges, and a currency amount is not checked for
//! plausibility.

use regex::Regex;

use crate::error::Result;
use crate::model::ContentElement;

/// The closed set of characters counted as "special" by
/// [`has_special_char`] and [`count_special_chars`].
const SPECIAL_CHARS: &str = "!@#$%^&*()_+{}[];:'\"<>,.?/\\|-";

/// A value the text engine can read a string out of.
///
/// Implemented for raw strings (always readable) and for content elements
/// (readable only when the element's content type is text).
pub trait TextSource {
    /// Borrow the text, or fail with a content-type error.
    fn as_text(&self) -> Result<&str>;
}

impl TextSource for str {
    fn as_text(&self) -> Result<&str> {
        Ok(self)
    }
}

impl TextSource for String {
    fn as_text(&self) -> Result<&str> {
        Ok(self)
    }
}

impl TextSource for ContentElement {
    fn as_text(&self) -> Result<&str> {
        self.text_content()
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn as_text(&self) -> Result<&str> {
        (**self).as_text()
    }
}

/// Number of characters in the text.
pub fn char_count<T: TextSource + ?Sized>(source: &T) -> Result<usize> {
    Ok(source.as_text()?.chars().count())
}

/// Whether the text contains at least one special character.
pub fn has_special_char<T: TextSource + ?Sized>(source: &T) -> Result<bool> {
    Ok(source.as_text()?.chars().any(|c| SPECIAL_CHARS.contains(c)))
}

/// Number of special characters in the text.
pub fn count_special_chars<T: TextSource + ?Sized>(source: &T) -> Result<usize> {
    Ok(source
        .as_text()?
        .chars()
        .filter(|c| SPECIAL_CHARS.contains(*c))
        .count())
}

/// Fraction of characters that are numeric, in `[0.0, 1.0]`. Empty text
/// yields `0.0`.
pub fn numeric_percentage<T: TextSource + ?Sized>(source: &T) -> Result<f64> {
    let text = source.as_text()?;
    let total = text.chars().count();
    if total == 0 {
        return Ok(0.0);
    }
    let numeric = text.chars().filter(|c| c.is_numeric()).count();
    Ok(numeric as f64 / total as f64)
}

/// Levenshtein edit distance between two texts with unit costs for
/// insertion, deletion and substitution.
///
/// Runs the classic dynamic program row-by-row with two rolling rows, the
/// shorter string as the inner dimension, so auxiliary space is
/// `O(min(|a|, |b|))`.
pub fn levenshtein_distance<A, B>(a: &A, b: &B) -> Result<usize>
where
    A: TextSource + ?Sized,
    B: TextSource + ?Sized,
{
    Ok(levenshtein(a.as_text()?, b.as_text()?))
}

fn levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return outer.len();
    }

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr: Vec<usize> = vec![0; inner.len() + 1];
    for (i, &oc) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &ic) in inner.iter().enumerate() {
            let cost = usize::from(oc != ic);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[inner.len()]
}

/// Regex-backed format classifiers, compiled once at construction.
///
/// Callers build one classifier up front and pass it where classification
/// is needed; there is no module-level cache behind these methods.
#[derive(Debug)]
pub struct TextClassifier {
    date_patterns: Vec<Regex>,
    zip_patterns: Vec<Regex>,
    real_number_patterns: Vec<Regex>,
    currency_patterns: Vec<Regex>,
    real_number_fragment: Regex,
    currency_marker: Regex,
}

/// English and French month names, abbreviated or full.
const MONTHS: &str = "jan(?:uary|vier)?|f[ée]vr(?:ier)?|feb(?:ruary)?|mar(?:ch|s)?|a[pv]r(?:il)?|may|mai|jui?n(?:e)?|jul(?:y)?|juil(?:let)?|aug(?:ust)?|ao[ûu]t|sep(?:t(?:ember|embre)?)?|oct(?:ober|obre)?|nov(?:ember|embre)?|d[ée]c(?:ember|embre)?";

/// English and French weekday names.
const WEEKDAYS: &str =
    "monday|tuesday|wednesday|thursday|friday|saturday|sunday|lundi|mardi|mercredi|jeudi|vendredi|samedi|dimanche";

/// Currency symbols and ISO codes recognized by the currency classifier.
const CURRENCY: &str = r"[$€£¥₹]|USD|EUR|GBP|JPY|CAD|AUD|CHF|TND";

impl TextClassifier {
    /// Compile all pattern families.
    pub fn new() -> Self {
        let amount = r"\d{1,3}(?:[ ,.]\d{3})*(?:[.,]\d+)?";
        Self {
            date_patterns: vec![
                // Numeric dates: slash, dash, pipe, underscore delimited
                Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap(),
                Regex::new(r"\b\d{1,2}-\d{1,2}-\d{2,4}\b").unwrap(),
                Regex::new(r"\b\d{1,2}\|\d{1,2}\|\d{2,4}\b").unwrap(),
                Regex::new(r"\b\d{1,2}_\d{1,2}_\d{2,4}\b").unwrap(),
                // "23 Avril 2020", "1st January 2024"
                Regex::new(&format!(
                    r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS})\.?\s+\d{{2,4}}\b"
                ))
                .unwrap(),
                // "January 1, 2024", "Avril 2020"
                Regex::new(&format!(
                    r"(?i)\b(?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{2,4}}\b"
                ))
                .unwrap(),
                // Weekday-prefixed: "Monday, January 1", "vendredi 13"
                Regex::new(&format!(
                    r"(?i)\b(?:{WEEKDAYS})\b,?\s+(?:\d{{1,2}}\b|(?:{MONTHS})\b)"
                ))
                .unwrap(),
            ],
            zip_patterns: vec![
                // Canadian A1A 1A1
                Regex::new(r"^[A-Za-z]\d[A-Za-z]\s?\d[A-Za-z]\d$").unwrap(),
                // US 5-digit and 9-digit
                Regex::new(r"^\d{5}$").unwrap(),
                Regex::new(r"^\d{5}-\d{4}$").unwrap(),
                // Plain 6-digit numeric
                Regex::new(r"^\d{6}$").unwrap(),
            ],
            real_number_patterns: vec![
                Regex::new(r"^[+-]?\d+$").unwrap(),
                Regex::new(r"^[+-]?\d+\.\d+$").unwrap(),
                Regex::new(r"^[+-]?\d+,\d+$").unwrap(),
                Regex::new(r"^[+-]?\d{1,3}(?:,\d{3})+(?:\.\d+)?$").unwrap(),
                Regex::new(r"^[+-]?\d+(?:\.\d+)?[eE][+-]?\d+$").unwrap(),
            ],
            currency_patterns: vec![
                Regex::new(&format!(r"^(?:{CURRENCY})\s?{amount}$")).unwrap(),
                Regex::new(&format!(r"^{amount}\s?(?:{CURRENCY})$")).unwrap(),
            ],
            real_number_fragment: Regex::new(r"[+-]?\d+(?:[.,]\d+)?").unwrap(),
            currency_marker: Regex::new(&format!(r"(?:{CURRENCY})")).unwrap(),
        }
    }

    /// Whether the text contains a date-shaped substring in any of the
    /// supported formats. Heuristic: day/month ranges are not validated.
    pub fn is_date<T: TextSource + ?Sized>(&self, source: &T) -> Result<bool> {
        let text = source.as_text()?;
        Ok(self.date_patterns.iter().any(|p| p.is_match(text)))
    }

    /// Whether the whole text is a postal code: Canadian `A1A 1A1`,
    /// US 5-digit, US 9-digit `12345-6789`, or plain 6-digit numeric.
    pub fn is_zip_code<T: TextSource + ?Sized>(&self, source: &T) -> Result<bool> {
        let text = source.as_text()?.trim();
        Ok(self.zip_patterns.iter().any(|p| p.is_match(text)))
    }

    /// Whether the whole text is a real number: signed integer, dot or
    /// comma decimal, thousands-separated, or scientific notation.
    pub fn is_real_number<T: TextSource + ?Sized>(&self, source: &T) -> Result<bool> {
        let text = source.as_text()?.trim();
        Ok(self.real_number_patterns.iter().any(|p| p.is_match(text)))
    }

    /// Whether the whole text is an amount with a currency symbol or ISO
    /// code prefix/suffix. The amount is not checked for plausibility.
    pub fn is_currency<T: TextSource + ?Sized>(&self, source: &T) -> Result<bool> {
        let text = source.as_text()?.trim();
        Ok(self.currency_patterns.iter().any(|p| p.is_match(text)))
    }

    /// Whether the text contains both a real-number substring and a
    /// currency marker anywhere (e.g. `"Total: 12,50 €"`).
    pub fn has_real_and_currency<T: TextSource + ?Sized>(&self, source: &T) -> Result<bool> {
        let text = source.as_text()?;
        Ok(self.real_number_fragment.is_match(text) && self.currency_marker.is_match(text))
    }
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Content};

    fn text_el(content: &str) -> ContentElement {
        ContentElement::text(1.0, 2.0, 3.0, 4.0, content)
    }

    #[test]
    fn test_char_count() {
        assert_eq!(char_count("Mock Content").unwrap(), 12);
        assert_eq!(char_count(&text_el("Mock Content")).unwrap(), 12);
        assert_eq!(char_count("").unwrap(), 0);
    }

    #[test]
    fn test_char_count_is_character_based() {
        assert_eq!(char_count("café").unwrap(), 4);
    }

    #[test]
    fn test_non_text_element_is_rejected() {
        let el = ContentElement::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), Content::Table);
        assert!(char_count(&el).is_err());
        assert!(numeric_percentage(&el).is_err());
        let classifier = TextClassifier::new();
        assert!(classifier.is_date(&el).is_err());
    }

    #[test]
    fn test_special_chars() {
        assert!(has_special_char("hello, world").unwrap());
        assert!(!has_special_char("hello world").unwrap());
        assert_eq!(count_special_chars("a,b.c!").unwrap(), 3);
        assert_eq!(count_special_chars("abc").unwrap(), 0);
    }

    #[test]
    fn test_numeric_percentage() {
        assert_eq!(numeric_percentage("12ab").unwrap(), 0.5);
        assert_eq!(numeric_percentage("1234").unwrap(), 1.0);
        assert_eq!(numeric_percentage("abcd").unwrap(), 0.0);
        assert_eq!(numeric_percentage("").unwrap(), 0.0);
    }

    #[test]
    fn test_levenshtein_known_distances() {
        assert_eq!(levenshtein_distance("kitten", "sitting").unwrap(), 3);
        assert_eq!(levenshtein_distance("", "").unwrap(), 0);
        assert_eq!(levenshtein_distance("", "abc").unwrap(), 3);
        assert_eq!(levenshtein_distance("abc", "").unwrap(), 3);
        assert_eq!(levenshtein_distance("same", "same").unwrap(), 0);
    }

    #[test]
    fn test_levenshtein_symmetry() {
        for (a, b) in [("flaw", "lawn"), ("gumbo", "gambol"), ("a", "xyz")] {
            assert_eq!(
                levenshtein_distance(a, b).unwrap(),
                levenshtein_distance(b, a).unwrap()
            );
        }
    }

    #[test]
    fn test_levenshtein_on_elements() {
        let a = text_el("kitten");
        let b = text_el("sitting");
        assert_eq!(levenshtein_distance(&a, &b).unwrap(), 3);
    }

    #[test]
    fn test_is_date_corpus() {
        let classifier = TextClassifier::new();
        for date in [
            "Monastir le 23 Avril 2020",
            "20/06/2023",
            "12/24/1998",
            "10-10-2020",
            "Grenade 02/01/1492",
            "3|12|2021",
            "7_04_1999",
            "January 1, 2024",
            "Monday, January 1, 2024",
            "vendredi 13 mai 2022",
        ] {
            assert!(classifier.is_date(date).unwrap(), "failed on: {date}");
        }
    }

    #[test]
    fn test_is_date_rejects_plain_text() {
        let classifier = TextClassifier::new();
        for text in ["hello world", "123456", "12.34", ""] {
            assert!(!classifier.is_date(text).unwrap(), "false positive: {text}");
        }
    }

    #[test]
    fn test_is_zip_code() {
        let classifier = TextClassifier::new();
        for zip in ["K1A 0B1", "k1a0b1", "90210", "12345-6789", "560001"] {
            assert!(classifier.is_zip_code(zip).unwrap(), "failed on: {zip}");
        }
        for not_zip in ["1234", "12345-678", "ABC 123", "90210x"] {
            assert!(!classifier.is_zip_code(not_zip).unwrap(), "false positive: {not_zip}");
        }
    }

    #[test]
    fn test_is_real_number() {
        let classifier = TextClassifier::new();
        for n in ["42", "-17", "+3", "3.14", "12,5", "1,234,567.89", "6.02e23"] {
            assert!(classifier.is_real_number(n).unwrap(), "failed on: {n}");
        }
        for not_n in ["abc", "1.2.3", "12a", ""] {
            assert!(!classifier.is_real_number(not_n).unwrap(), "false positive: {not_n}");
        }
    }

    #[test]
    fn test_is_currency() {
        let classifier = TextClassifier::new();
        for c in ["$12.34", "$ 100", "12,50 €", "EUR 99", "45 TND", "£1,200.00"] {
            assert!(classifier.is_currency(c).unwrap(), "failed on: {c}");
        }
        for not_c in ["12.34", "$", "dollars", "100 percent"] {
            assert!(!classifier.is_currency(not_c).unwrap(), "false positive: {not_c}");
        }
    }

    #[test]
    fn test_has_real_and_currency() {
        let classifier = TextClassifier::new();
        assert!(classifier.has_real_and_currency("Total: 12,50 €").unwrap());
        assert!(classifier.has_real_and_currency("$12.34").unwrap());
        assert!(!classifier.has_real_and_currency("12.34").unwrap());
        assert!(!classifier.has_real_and_currency("pay in USD").unwrap());
    }
}
