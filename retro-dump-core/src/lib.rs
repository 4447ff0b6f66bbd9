//! Shared types for retro-dump: systems, media, regions and the
//! submission record every other crate fills in.

pub mod category;
pub mod hexdump;
pub mod language;
pub mod media;
pub mod region;
pub mod submission;
pub mod system;
pub mod util;

pub use category::DiscCategory;
pub use language::Language;
pub use media::{MediaType, MediaTypeParseError};
pub use region::Region;
pub use submission::{
    CommonDiscInfo, CopyProtection, DumpingInfo, Extras, LayerInfo, OPTIONAL, REQUIRED,
    REQUIRED_IF_EXISTS, SizeAndChecksums, SubmissionInfo, TracksAndWriteOffsets,
    VersionAndEditions, is_placeholder,
};
pub use system::{System, SystemParseError};
