//! Matching a submission against the redump.org catalog.
//!
//! Each track's SHA-1 is searched separately. IDs returned for every track
//! form the full-match candidates; anything returned for some track is a
//! partial match. When per-track matching is inconclusive the universal
//! hash gets one more search.

use retro_dump_core::SubmissionInfo;
use retro_dump_dat::extract_sha1;

use crate::client::RedumpClient;
use crate::credentials::Credentials;
use crate::error::ScrapeError;
use crate::page::DiscPage;

/// A disc catalog that can be searched by hash.
#[allow(async_fn_in_trait)]
pub trait DiscCatalog {
    /// Returns `Ok(false)` when the credentials are rejected.
    async fn login(&mut self, creds: &Credentials) -> Result<bool, ScrapeError>;

    /// IDs of discs containing a track with this hash.
    async fn search(&mut self, hash: &str) -> Result<Vec<u32>, ScrapeError>;

    async fn disc(&mut self, id: u32) -> Result<DiscPage, ScrapeError>;
}

impl DiscCatalog for RedumpClient {
    async fn login(&mut self, creds: &Credentials) -> Result<bool, ScrapeError> {
        RedumpClient::login(self, creds).await
    }

    async fn search(&mut self, hash: &str) -> Result<Vec<u32>, ScrapeError> {
        self.quicksearch(hash).await
    }

    async fn disc(&mut self, id: u32) -> Result<DiscPage, ScrapeError> {
        self.disc_page(id).await
    }
}

/// Outcome of a reconciliation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Nothing was looked up; the record is untouched.
    NotApplied,
    Applied {
        fully_matched: Option<u32>,
        partially_matched: Vec<u32>,
    },
}

const EXTRA_TRACKS: &[&str] = &["(Track 0)", "(Track 00)", "(Track A)", "(Track AA)"];

/// Lead-in and hidden tracks DiscImageCreator writes that redump.org does
/// not list.
pub fn is_extra_track(line: &str) -> bool {
    EXTRA_TRACKS.iter().any(|marker| line.contains(marker))
}

/// Match `info` against `catalog` and fill it from the fully matching disc.
///
/// Without credentials, or if the login fails, nothing is changed and
/// [`Reconciliation::NotApplied`] is returned. A failed search for one
/// track counts as no candidates for that track.
pub async fn reconcile<C: DiscCatalog>(
    catalog: &mut C,
    credentials: Option<&Credentials>,
    info: &mut SubmissionInfo,
) -> Reconciliation {
    let Some(creds) = credentials else {
        log::info!("No redump.org credentials, skipping catalog lookup");
        return Reconciliation::NotApplied;
    };
    match catalog.login(creds).await {
        Ok(true) => {}
        Ok(false) => {
            log::warn!("redump.org login failed, skipping catalog lookup");
            return Reconciliation::NotApplied;
        }
        Err(e) => {
            log::warn!("redump.org login failed: {}", e);
            return Reconciliation::NotApplied;
        }
    }

    let tracks: Vec<String> = info
        .tracks
        .track_lines()
        .filter(|line| !is_extra_track(line))
        .map(str::to_string)
        .collect();

    let mut all_found = !tracks.is_empty();
    let mut intersection: Option<Vec<u32>> = None;

    for line in &tracks {
        let ids = match extract_sha1(line) {
            Some(sha1) => search_or_empty(catalog, &sha1).await,
            None => {
                log::warn!("No SHA-1 in track line: {}", line);
                Vec::new()
            }
        };
        if ids.is_empty() {
            all_found = false;
            continue;
        }

        info.add_partial_matches(ids.iter().copied());
        intersection = Some(match intersection {
            None => ids,
            Some(prev) if prev.is_empty() => prev,
            Some(prev) => prev.into_iter().filter(|id| ids.contains(id)).collect(),
        });
    }

    let mut full_matches = intersection.filter(|ids| all_found && !ids.is_empty());

    if full_matches.is_none()
        && let Some(hash) = info.sizes.universal_hash.clone()
    {
        let ids = search_or_empty(catalog, &hash).await;
        info.add_partial_matches(ids.iter().copied());
        if let [id] = ids[..] {
            log::info!("Universal hash found redump.org disc {}", id);
            full_matches = Some(vec![id]);
        }
    }

    if let Some(candidates) = full_matches {
        fill_from_first_match(catalog, &candidates, tracks.len(), info).await;
    }

    Reconciliation::Applied {
        fully_matched: info.fully_matched_id(),
        partially_matched: info.partially_matched_ids().to_vec(),
    }
}

async fn search_or_empty<C: DiscCatalog>(catalog: &mut C, hash: &str) -> Vec<u32> {
    match catalog.search(hash).await {
        Ok(ids) => ids,
        Err(e) => {
            log::warn!("Search for {} failed: {}", hash, e);
            Vec::new()
        }
    }
}

/// Fill `info` from the first candidate, in catalog order, whose track count
/// matches the local one.
async fn fill_from_first_match<C: DiscCatalog>(
    catalog: &mut C,
    candidates: &[u32],
    track_count: usize,
    info: &mut SubmissionInfo,
) {
    for &id in candidates {
        let page = match catalog.disc(id).await {
            Ok(page) => page,
            Err(e) => {
                log::warn!("Could not fetch disc {}: {}", id, e);
                continue;
            }
        };
        if page.track_count != Some(track_count) {
            log::debug!(
                "Disc {} lists {:?} tracks, dump has {}",
                id,
                page.track_count,
                track_count
            );
            continue;
        }

        log::info!("Matched redump.org disc {}", id);
        page.apply(info);
        info.set_fully_matched(id);
        return;
    }
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
