#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a price in Mexican pesos with thousands separators and no
/// decimals, e.g. `$4,500,000`.
#[must_use]
pub fn format_price(price: f64) -> String {
    let negative = price < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = price.abs().round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Price label for a listing: rentals are monthly.
#[must_use]
pub fn price_label(price: f64, monthly: bool) -> String {
    let base = format_price(price);
    if monthly { format!("{base}/mes") } else { base }
}
