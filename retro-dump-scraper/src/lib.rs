//! redump.org reconciliation: log in, look up each track's SHA-1, and fill
//! a submission from the disc page every track agrees on.

pub mod client;
pub mod credentials;
pub mod error;
pub mod page;
pub mod reconcile;

pub use client::RedumpClient;
pub use credentials::{
    CredentialSource, CredentialSources, Credentials, config_path, credential_sources,
    save_to_file,
};
pub use error::ScrapeError;
pub use page::DiscPage;
pub use reconcile::{DiscCatalog, Reconciliation, is_extra_track, reconcile};
