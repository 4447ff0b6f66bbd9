//! Read error count from `.img_EdcEcc.txt`.

use std::sync::LazyLock;

use regex::Regex;

static TOTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Total (errors|warnings)\s*:\s*(\d+)").expect("static pattern")
});

/// Errors plus warnings reported by the EDC/ECC check.
///
/// `[NO ERROR]` means zero. Without that marker or any totals the count is
/// unknown, which is reported as `None` rather than zero.
pub fn parse_error_count(edc_txt: &str) -> Option<u64> {
    if edc_txt.contains("[NO ERROR]") {
        return Some(0);
    }

    let mut found = false;
    let mut total: u64 = 0;
    for caps in TOTAL_RE.captures_iter(edc_txt) {
        if let Some(n) = caps.get(2).and_then(|m| m.as_str().parse::<u64>().ok()) {
            found = true;
            total += n;
        }
    }
    found.then_some(total)
}
