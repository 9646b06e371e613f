//! Display price handling.
//!
//! Catalog prices are display strings such as `"Rs. 8,499"`. The only
//! numeric fact derived from them is the integer left after every non-digit
//! character is stripped.

/// Currency prefix used by every catalog price.
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Parse a display price into whole rupees.
///
/// Strips every character that is not an ASCII digit and parses the rest.
/// Returns `None` when nothing numeric remains or the value overflows.
///
/// ```
/// use suture_core::price::parse_price;
///
/// assert_eq!(parse_price("Rs. 8,499"), Some(8499));
/// assert_eq!(parse_price("sold out"), None);
/// ```
pub fn parse_price(display: &str) -> Option<u64> {
    let digits: String = display.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Format whole rupees as a display price with comma thousands grouping.
///
/// ```
/// use suture_core::price::format_price;
///
/// assert_eq!(format_price(18797), "Rs. 18,797");
/// ```
pub fn format_price(amount: u64) -> String {
    format!("{} {}", CURRENCY_PREFIX, group_thousands(amount))
}

fn group_thousands(amount: u64) -> String {
    let raw = amount.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
