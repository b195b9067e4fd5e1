//! Display formatting: money, countdowns, trend glyphs.

use rust_decimal::Decimal;

use crate::state::Trend;

/// USD with thousands separators and at most two decimals, trailing zeros
/// dropped ("$1,234", "$12.5").
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(2).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = format!("{}${}", sign, group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Milliseconds as "m:ss".
pub fn format_time(ms: i64) -> String {
    let ms = ms.max(0);
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{}:{:02}", minutes, seconds)
}

pub fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "−",
    }
}

/// Shown when the host sends no image link template.
pub const DEFAULT_IMAGE: &str = "nui://inventory/web/dist/assets/items/default.png";

/// Fill the item id into the host's image link template.
pub fn image_url(template: &str, id: &str) -> String {
    template.replacen("%s", id, 1)
}
