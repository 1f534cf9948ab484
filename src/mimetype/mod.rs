//! Generation of the front-end mimetype list asset.
//!
//! The web front end maps mimetypes to icons and display names through a
//! generated script, `core/js/mimetypelist.js`. This module owns everything
//! needed to regenerate it:
//! - `icons`: scans icon directories into sorted sets of base names
//! - `themes`: enumerates theme apps and legacy theme directories
//! - `aliases`: the mimetype alias configuration
//! - `listgen`: renders the script and writes it out

pub mod aliases;
pub mod icons;
pub mod listgen;
pub mod themes;

pub use aliases::{AliasSource, ConfigAliasSource};
pub use listgen::update_mimetype_list;
pub use themes::ThemeDescriptor;
