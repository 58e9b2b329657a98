#[cfg(feature = "cli")]
pub mod list;
