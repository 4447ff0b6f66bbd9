//! Reading DiscImageCreator's outputs into a submission.
//!
//! A dump goes through [`runner`] (launch and wait), [`outputs`] (every
//! expected file present?), [`extract`] (fill a [`SubmissionInfo`]) and
//! finally [`writer`]. The remaining modules are the individual parsers.
//!
//! [`SubmissionInfo`]: retro_dump_core::SubmissionInfo

pub mod disc_info;
pub mod dispatch;
pub mod edc;
pub mod error;
pub mod extract;
pub mod options;
pub mod outputs;
pub mod pic;
pub mod protection;
pub mod pvd;
pub mod runner;
pub mod writer;

pub use dispatch::{SystemExtractor, extractor_for};
pub use error::{ConfigError, ExtractError};
pub use extract::extract_submission;
pub use options::{OPTION_KEYS, Options, options_path};
pub use outputs::{DumpOutputs, check_outputs, missing_outputs};
pub use protection::{ProtectionMap, ProtectionScanner};
pub use runner::{DicRunner, run_process};
pub use writer::{format_submission, load_seed, write_submission, zip_logs};
