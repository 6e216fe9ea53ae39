//! Display formatting shared by the view models and notifications.
//!
//! Amounts are whole rupees and use Indian digit grouping (`1,34,900`), which is
//! what the storefront has always shown. The currency is fixed; there is no
//! currency code anywhere in the API.

use num_format::{Locale, ToFormattedString};

/// Symbol prefixed to every displayed price.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats a whole-rupee amount with en-IN thousands grouping and no symbol.
///
/// ```
/// use storefront::core::format::format_amount;
/// assert_eq!(format_amount(134900), "1,34,900");
/// assert_eq!(format_amount(0), "0");
/// ```
#[must_use]
pub fn format_amount(amount: i64) -> String {
    amount.to_formatted_string(&Locale::en_IN)
}

/// Formats a whole-rupee amount as a price, e.g. `₹27,990`.
#[must_use]
pub fn format_price(amount: i64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_amount(amount))
}

/// Returns at most the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so multi-byte titles are never split mid-character.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_indian_grouping() {
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1,000");
        assert_eq!(format_amount(27990), "27,990");
        assert_eq!(format_amount(134900), "1,34,900");
        assert_eq!(format_amount(12345678), "1,23,45,678");
    }

    #[test]
    fn test_format_price_adds_symbol() {
        assert_eq!(format_price(24900), "₹24,900");
    }

    #[test]
    fn test_truncate_chars_short_text_unchanged() {
        assert_eq!(truncate_chars("AirPods", 30), "AirPods");
    }

    #[test]
    fn test_truncate_chars_cuts_at_limit() {
        let title = "Apple iPhone 15 Pro Max (256 GB) - Natural Titanium";
        assert_eq!(truncate_chars(title, 30), "Apple iPhone 15 Pro Max (256 G");
    }

    #[test]
    fn test_truncate_chars_respects_multibyte() {
        assert_eq!(truncate_chars("★★★☆☆", 3), "★★★");
    }
}
