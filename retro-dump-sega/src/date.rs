//! Date normalization for Sega header fields.

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Two-digit month for a three-letter abbreviation; `"00"` if unknown.
pub fn month_number(abbr: &str) -> &'static str {
    const NUMBERS: [&str; 12] = [
        "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
    ];
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbr.trim()))
        .map_or("00", |i| NUMBERS[i])
}

/// `19941122` -> `1994-11-22`.
pub fn from_yyyymmdd(s: &str) -> Option<String> {
    let s = s.trim();
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}-{}-{}", &s[..4], &s[4..6], &s[6..8]))
}

/// `1993.SEP` -> `1993-09`.
pub fn from_year_month(s: &str) -> Option<String> {
    let (year, month) = s.trim().split_once('.')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) || month.len() != 3 {
        return None;
    }
    Some(format!("{}-{}", year, month_number(month)))
}

/// `24.SEP12` -> `2012-09-24`. Two-digit years below 70 are 20xx.
pub fn from_day_month_year(s: &str) -> Option<String> {
    let (day, rest) = s.trim().split_once('.')?;
    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if rest.len() != 5 || !rest.is_char_boundary(3) {
        return None;
    }
    let (month, year) = rest.split_at(3);
    let year: u32 = year.parse().ok()?;
    let year = if year < 70 { 2000 + year } else { 1900 + year };
    Some(format!(
        "{:04}-{}-{:0>2}",
        year,
        month_number(month),
        day
    ))
}

/// Try every known header date layout.
pub fn normalize(s: &str) -> Option<String> {
    from_yyyymmdd(s)
        .or_else(|| from_year_month(s))
        .or_else(|| from_day_month_year(s))
}
