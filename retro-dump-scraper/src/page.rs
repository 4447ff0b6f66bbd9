//! HTML scraping of redump.org pages.
//!
//! redump.org has no API, so everything here is pattern matching against
//! the markup of the disc page, the quicksearch listing and the forum
//! login form.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use retro_dump_core::{DiscCategory, Language, Region, SubmissionInfo};

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h1>(.*?)</h1>").expect("static pattern"));
static FOREIGN_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h2>(.*?)</h2>").expect("static pattern"));
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<tr><th>([^<]+)</th><td>(.*?)</td></tr>").expect("static pattern")
});
static REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"/discs/region/([^/"]+)/"#).expect("static pattern"));
static LANGUAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img src="/images/languages/[^"]*" alt="([^"]*)""#).expect("static pattern")
});
static DISC_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="/disc/(\d+)/""#).expect("static pattern"));
static DISC_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/disc/(\d+)/?$").expect("static pattern"));
static CSRF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name="csrf_token" value="([^"]+)""#).expect("static pattern")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static pattern"));

const LOGIN_FAILED_MARKER: &str = "Incorrect username and/or password";

/// Fields recovered from a `disc/<id>/` page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscPage {
    pub id: u32,
    pub title: Option<String>,
    pub foreign_title: Option<String>,
    pub system: Option<String>,
    pub media: Option<String>,
    pub category: Option<DiscCategory>,
    pub region: Option<Region>,
    pub languages: Vec<Language>,
    pub serial: Option<String>,
    pub exe_date: Option<String>,
    pub version: Option<String>,
    pub edition: Option<String>,
    pub barcode: Option<String>,
    pub track_count: Option<usize>,
}

impl DiscPage {
    /// Parse the page of disc `id`.
    pub fn parse(id: u32, html: &str) -> Self {
        let rows: BTreeMap<String, &str> = ROW_RE
            .captures_iter(html)
            .filter_map(|c| Some((c.get(1)?.as_str().trim().to_string(), c.get(2)?.as_str())))
            .collect();
        let text = |label: &str| rows.get(label).map(|v| clean_text(v)).filter(|v| !v.is_empty());

        let region = rows
            .get("Region")
            .and_then(|v| REGION_RE.captures(v))
            .and_then(|c| Region::from_name(&c[1]));
        let languages = rows
            .get("Languages")
            .map(|v| {
                LANGUAGE_RE
                    .captures_iter(v)
                    .filter_map(|c| Language::from_name(&decode_entities(&c[1])))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id,
            title: first_capture(&TITLE_RE, html),
            foreign_title: first_capture(&FOREIGN_TITLE_RE, html),
            system: text("System"),
            media: text("Media"),
            category: text("Category").and_then(|c| DiscCategory::from_name(&c)),
            region,
            languages,
            serial: text("Serial"),
            exe_date: text("EXE date"),
            version: text("Version"),
            edition: text("Edition"),
            barcode: text("Barcode"),
            track_count: text("Number of tracks").and_then(|n| n.parse().ok()),
        }
    }

    /// Copy every field the page carries into `info`. Fields the page does
    /// not show leave the local value alone.
    pub fn apply(&self, info: &mut SubmissionInfo) {
        set_if(&mut info.common.title, &self.title);
        set_if(&mut info.common.foreign_title, &self.foreign_title);
        set_if(&mut info.common.serial, &self.serial);
        set_if(&mut info.common.exe_date, &self.exe_date);
        set_if(&mut info.common.barcode, &self.barcode);
        set_if(&mut info.versions.version, &self.version);
        set_if(&mut info.versions.edition, &self.edition);
        if self.category.is_some() {
            info.common.category = self.category;
        }
        if self.region.is_some() {
            info.common.region = self.region;
        }
        if !self.languages.is_empty() {
            info.common.languages = self.languages.clone();
        }
    }
}

fn set_if(dst: &mut String, src: &Option<String>) {
    if let Some(value) = src {
        *dst = value.clone();
    }
}

fn first_capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .map(|c| clean_text(&c[1]))
        .filter(|s| !s.is_empty())
}

/// Strip tags and decode the handful of entities redump.org emits.
fn clean_text(fragment: &str) -> String {
    let stripped = TAG_RE.replace_all(fragment, " ");
    let collapsed: Vec<&str> = stripped.split_whitespace().collect();
    decode_entities(&collapsed.join(" "))
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Disc IDs linked from a quicksearch result page, in page order.
pub fn search_results(html: &str) -> Vec<u32> {
    let mut ids = Vec::new();
    for caps in DISC_LINK_RE.captures_iter(html) {
        if let Ok(id) = caps[1].parse::<u32>()
            && !ids.contains(&id)
        {
            ids.push(id);
        }
    }
    ids
}

/// The disc ID in a `/disc/<id>/` URL. A quicksearch with a single hit
/// redirects straight to the disc page.
pub fn disc_id_from_url(url: &str) -> Option<u32> {
    DISC_URL_RE.captures(url).and_then(|c| c[1].parse().ok())
}

/// CSRF token embedded in the forum login form.
pub fn csrf_token(html: &str) -> Option<String> {
    CSRF_RE.captures(html).map(|c| c[1].to_string())
}

/// Whether a login response reports bad credentials.
pub fn login_rejected(html: &str) -> bool {
    html.contains(LOGIN_FAILED_MARKER)
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
