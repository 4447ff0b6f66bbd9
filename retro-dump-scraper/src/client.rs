use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use crate::credentials::Credentials;
use crate::error::ScrapeError;
use crate::page::{self, DiscPage};

const SITE_URL: &str = "http://redump.org";
const LOGIN_URL: &str = "https://forum.redump.org/login/";
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);
/// Upper bound on quicksearch result pages to walk for one query.
const MAX_SEARCH_PAGES: u32 = 10;

/// HTTP client for redump.org with a cookie session and rate limiting.
pub struct RedumpClient {
    http: reqwest::Client,
    last_request: Arc<Mutex<Instant>>,
    logged_in: bool,
}

impl RedumpClient {
    pub fn new() -> Result<Self, ScrapeError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("retro-dump/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            last_request: Arc::new(Mutex::new(Instant::now() - MIN_REQUEST_INTERVAL)),
            logged_in: false,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Log in to the redump.org forum. The session cookie then authorizes
    /// searches on the main site.
    ///
    /// Returns `Ok(false)` when the forum rejects the credentials.
    pub async fn login(&mut self, creds: &Credentials) -> Result<bool, ScrapeError> {
        let form_page = self.get_text(LOGIN_URL).await?.1;
        let token = page::csrf_token(&form_page)
            .ok_or_else(|| ScrapeError::page("Login form has no CSRF token"))?;

        self.rate_limit().await;
        let resp = self
            .http
            .post(format!("{}?action=in", LOGIN_URL))
            .form(&[
                ("form_sent", "1"),
                ("redirect_url", "https://forum.redump.org/"),
                ("csrf_token", token.as_str()),
                ("req_username", creds.username.as_str()),
                ("req_password", creds.password.as_str()),
                ("save_pass", "0"),
            ])
            .send()
            .await?;
        let text = check_status(resp).await?.1;

        self.logged_in = !page::login_rejected(&text);
        if self.logged_in {
            log::debug!("Logged in to redump.org as {}", creds.username);
        } else {
            log::warn!("redump.org rejected the login for {}", creds.username);
        }
        Ok(self.logged_in)
    }

    /// Disc IDs whose tracks match `query` (usually a SHA-1).
    pub async fn quicksearch(&mut self, query: &str) -> Result<Vec<u32>, ScrapeError> {
        let mut ids: Vec<u32> = Vec::new();

        for page_no in 1..=MAX_SEARCH_PAGES {
            let url = format!("{}/discs/quicksearch/{}/?page={}", SITE_URL, query, page_no);
            let (final_url, html) = self.get_text(&url).await?;

            if let Some(id) = page::disc_id_from_url(&final_url) {
                log::debug!("Quicksearch {} redirected to disc {}", query, id);
                return Ok(vec![id]);
            }

            let before = ids.len();
            for id in page::search_results(&html) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            if ids.len() == before {
                break;
            }
        }

        log::debug!("Quicksearch {}: {} result(s)", query, ids.len());
        Ok(ids)
    }

    /// Fetch and parse the page of disc `id`.
    pub async fn disc_page(&mut self, id: u32) -> Result<DiscPage, ScrapeError> {
        let url = format!("{}/disc/{}/", SITE_URL, id);
        let html = self.get_text(&url).await?.1;
        Ok(DiscPage::parse(id, &html))
    }

    /// GET `url`, returning the final URL after redirects and the body.
    async fn get_text(&self, url: &str) -> Result<(String, String), ScrapeError> {
        self.rate_limit().await;
        let resp = self.http.get(url).send().await?;
        check_status(resp).await
    }

    /// Enforce rate limiting: wait until at least MIN_REQUEST_INTERVAL has
    /// passed since the last request.
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < MIN_REQUEST_INTERVAL {
            tokio::time::sleep(MIN_REQUEST_INTERVAL - elapsed).await;
        }
        *last = Instant::now();
    }
}

async fn check_status(resp: reqwest::Response) -> Result<(String, String), ScrapeError> {
    let status = resp.status();
    let final_url = resp.url().to_string();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ScrapeError::RateLimit);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(ScrapeError::InvalidCredentials(format!(
            "Access denied (HTTP {})",
            status.as_u16()
        )));
    }

    let text = resp.text().await?;
    if !status.is_success() {
        return Err(ScrapeError::ServerError {
            status: status.as_u16(),
            message: text.chars().take(200).collect(),
        });
    }
    Ok((final_url, text))
}
