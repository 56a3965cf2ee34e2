//! Text formatting contracts shared by slice labels and tooltips.

/// Formats a USD amount with zero fraction digits: `$76,472`.
///
/// Rounds half away from zero and groups thousands with commas, matching
/// `en-US` currency output.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.abs().round();
    let grouped = group_thousands(rounded as u64);
    if amount < 0.0 && rounded > 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Percent rendered for a hovered slice: nearest integer, half away from zero.
#[must_use]
pub fn rounded_percent(share: f64) -> i64 {
    share.round() as i64
}

/// Loan count with its unit: `1` is singular, zero and everything else plural.
#[must_use]
pub fn loan_count_label(count: u32) -> String {
    if count == 1 {
        "1 loan".to_owned()
    } else {
        format!("{count} loans")
    }
}
