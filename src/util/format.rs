//! Display formatting for amounts and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::DateTime;

/// Format an IDR amount (minor units) the Indonesian way: `Rp1.000.000`.
/// IDR has no fraction digits.
pub fn format_rupiah(amount_idr: u64) -> String {
    let digits = amount_idr.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp{grouped}")
}

/// Format an RFC 3339 timestamp as `d/M/yyyy HH:mm`.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%-d/%-m/%Y %H:%M").to_string(),
        Err(_) => "Invalid date".to_owned(),
    }
}
