// src/domain/format.rs

/// Default PEN→USD rate when the catalog file doesn't carry one.
pub const DEFAULT_USD_RATE: f64 = 3.75;

/// `1250000` → `"S/ 1,250,000"`.
pub fn format_pen(amount: i64) -> String {
    format!("S/ {}", group_thousands(amount))
}

/// Soles converted at `rate` and rounded to whole dollars: `"$ 333,333"`.
pub fn format_usd(amount_pen: i64, rate: f64) -> String {
    let rate = if rate.is_finite() && rate > 0.0 {
        rate
    } else {
        DEFAULT_USD_RATE
    };
    let usd = (amount_pen as f64 / rate).round() as i64;
    format!("$ {}", group_thousands(usd))
}

/// Area as stored, without a trailing `.0` for whole numbers.
pub fn format_area(area: f64) -> String {
    format!("{area} m²")
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
