use crate::error::{AppError, AppResult};

/// Parses a display amount like `"$1,299.99"` into minor units (cents).
///
/// Seed data and upstream payloads carry amounts as formatted strings; they
/// are converted once at ingestion and held as integers internally. A missing
/// `$` prefix or a non-numeric remainder is rejected.
pub fn parse_usd(s: &str) -> AppResult<i64> {
    let rest = s
        .strip_prefix('$')
        .ok_or_else(|| AppError::BadRequest(format!("Amount missing '$' prefix: {}", s)))?;

    let digits: String = rest.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Err(AppError::BadRequest(format!("Empty amount: {}", s)));
    }

    let (dollars, cents) = match digits.split_once('.') {
        Some((d, c)) => (d, c),
        None => (digits.as_str(), ""),
    };

    if cents.len() > 2 {
        return Err(AppError::BadRequest(format!("Too many decimal places: {}", s)));
    }

    let dollars: i64 = dollars
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid amount: {}", s)))?;

    let cents: i64 = if cents.is_empty() {
        0
    } else {
        let padded = format!("{:0<2}", cents);
        padded
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid amount: {}", s)))?
    };

    Ok(dollars * 100 + cents)
}

/// Formats minor units back into the display form, e.g. `129999` -> `"$1,299.99"`.
pub fn format_usd(cents: i64) -> String {
    let dollars = cents / 100;
    let minor = (cents % 100).abs();

    let raw = dollars.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, minor)
}
