//! Copy-protection summary.
//!
//! Scanning is left to an implementation of [`ProtectionScanner`]; this
//! module only merges what it reports.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::ExtractError;

/// Protection labels found per file.
pub type ProtectionMap = BTreeMap<String, Vec<String>>;

/// Something that can look for copy protection in a dumped image or the
/// mounted disc.
pub trait ProtectionScanner {
    /// Labels found under `path`, keyed by the file they were found in.
    fn scan(&self, path: &Path) -> Result<ProtectionMap, ExtractError>;
}

/// All labels in `found`, deduplicated, sorted and comma separated.
pub fn summarize(found: &ProtectionMap) -> String {
    found
        .values()
        .flatten()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text for `!protectionInfo.txt`: one block per file with its labels.
pub fn format_full_protections(found: &ProtectionMap) -> String {
    let mut out = String::new();
    for (file, labels) in found {
        if labels.is_empty() {
            continue;
        }
        out.push_str(&format!("{}: {}\n", file, labels.join(", ")));
    }
    out
}
