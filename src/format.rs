//! Display Formatting

use chrono::{DateTime, Local, TimeZone};

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// "men's clothing" -> "Men's Clothing"
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rupee amount with en-IN digit grouping, e.g. `₹1,23,456.50`
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if price < 0.0 { "-" } else { "" };
    format!("₹{}{}.{}", sign, group_indian(whole), cents)
}

// Last three digits, then groups of two
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub fn format_viewed_at(ts: i64) -> String {
    format_timestamp(ts, &Local)
}

pub fn format_timestamp<Tz: TimeZone>(ts: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(ts) {
        Some(utc) => utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => String::from("unknown time"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("men's clothing"), "Men's Clothing");
        assert_eq!(title_case("electronics"), "Electronics");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(109.95), "₹109.95");
        assert_eq!(format_price(695.0), "₹695.00");
        assert_eq!(format_price(1234.5), "₹1,234.50");
        assert_eq!(format_price(123456.5), "₹1,23,456.50");
        assert_eq!(format_price(12345678.0), "₹1,23,45,678.00");
    }

    #[test]
    fn test_format_timestamp_utc() {
        assert_eq!(format_timestamp(1_700_000_000_000, &Utc), "14/11/2023, 22:13:20");
    }
}
