use super::*;
use retro_dump_core::{MediaType, System};

const DISC_PAGE: &str = r#"<div class="game">
<h1>Example Game: Director&#039;s Cut</h1>
<h2>エグザンプル</h2>
<table class="gameinfo">
<tr><th>System</th><td><a href="/discs/system/psx/">Sony PlayStation</a></td></tr>
<tr><th>Media</th><td>CD</td></tr>
<tr><th>Category</th><td>Games</td></tr>
<tr><th>Region</th><td><a href="/discs/region/U/"><img src="/images/flags/us.png" alt="USA" title="USA" /></a></td></tr>
<tr><th>Languages</th><td><img src="/images/languages/En.png" alt="English" title="English" /><img src="/images/languages/Fr.png" alt="French" title="French" /></td></tr>
<tr><th>Serial</th><td>SLUS-00594</td></tr>
<tr><th>EXE date</th><td>1998-01-30</td></tr>
<tr><th>Version</th><td>1.1</td></tr>
<tr><th>Edition</th><td>Original</td></tr>
<tr><th>Number of tracks</th><td>2</td></tr>
</table>
</div>"#;

// -- Disc page --

#[test]
fn test_parse_disc_page() {
    let page = DiscPage::parse(4242, DISC_PAGE);
    assert_eq!(page.id, 4242);
    assert_eq!(page.title.as_deref(), Some("Example Game: Director's Cut"));
    assert_eq!(page.foreign_title.as_deref(), Some("エグザンプル"));
    assert_eq!(page.system.as_deref(), Some("Sony PlayStation"));
    assert_eq!(page.category, Some(DiscCategory::Games));
    assert_eq!(page.region, Some(Region::Usa));
    assert_eq!(page.languages, vec![Language::English, Language::French]);
    assert_eq!(page.serial.as_deref(), Some("SLUS-00594"));
    assert_eq!(page.version.as_deref(), Some("1.1"));
    assert_eq!(page.track_count, Some(2));
    assert_eq!(page.barcode, None);
}

#[test]
fn test_parse_sparse_page() {
    let page = DiscPage::parse(1, "<h1>Bare</h1>");
    assert_eq!(page.title.as_deref(), Some("Bare"));
    assert_eq!(page.region, None);
    assert!(page.languages.is_empty());
    assert_eq!(page.track_count, None);
}

#[test]
fn test_apply_keeps_fields_the_page_lacks() {
    let mut info = SubmissionInfo::new(System::Ps1, MediaType::CdRom);
    info.common.barcode = "0 12345 67890 1".to_string();
    DiscPage::parse(4242, DISC_PAGE).apply(&mut info);

    assert_eq!(info.common.title, "Example Game: Director's Cut");
    assert_eq!(info.common.serial, "SLUS-00594");
    assert_eq!(info.common.region, Some(Region::Usa));
    assert_eq!(info.versions.edition, "Original");
    assert_eq!(info.common.barcode, "0 12345 67890 1");
}

// -- Search and login pages --

#[test]
fn test_search_results_dedup_in_order() {
    let html = r#"<a href="/disc/30/">A</a> <a href="/disc/10/">B</a> <a href="/disc/30/">A again</a>"#;
    assert_eq!(search_results(html), vec![30, 10]);
    assert!(search_results("<p>No discs found.</p>").is_empty());
}

#[test]
fn test_disc_id_from_redirect_url() {
    assert_eq!(disc_id_from_url("http://redump.org/disc/1777/"), Some(1777));
    assert_eq!(disc_id_from_url("http://redump.org/discs/quicksearch/abc/"), None);
}

#[test]
fn test_csrf_token_and_rejection() {
    let form = r#"<input type="hidden" name="csrf_token" value="a1b2c3" />"#;
    assert_eq!(csrf_token(form).as_deref(), Some("a1b2c3"));
    assert_eq!(csrf_token("<form></form>"), None);
    assert!(login_rejected("<p>Incorrect username and/or password.</p>"));
    assert!(!login_rejected("<p>Logged in successfully.</p>"));
}
