pub(crate) mod config;
pub(crate) mod credentials;
pub(crate) mod dump;
pub(crate) mod list;
pub(crate) mod params;
