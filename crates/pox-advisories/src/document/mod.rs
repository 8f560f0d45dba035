//! Documents read and written by the conflict generator
//!
//! Advisories are YAML (or JSON) files, the generated manifest is JSON.

mod advisory;
mod loader;
mod manifest;

pub use advisory::{AdvisoryData, BranchData};
pub use loader::{find_advisories, load_advisory, parse_advisory, AdvisoryFormat, LoadOptions};
pub use manifest::{Author, Manifest};
