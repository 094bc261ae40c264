//! Profile-driven build configuration for packaging a UI component library.
//!
//! Every sub-policy is a pure function of the [`BuildProfile`], the
//! [`LibraryDescriptor`] and the [`ProjectLayout`]. [`BuildConfig::assemble`]
//! merges them into the single object handed to the external build engine.
//!
//! # Example
//!
//! ```
//! use libpack_config::{BuildConfig, BuildProfile, LibraryDescriptor, ProjectLayout};
//!
//! let profile = BuildProfile::resolve(Some("production"));
//! let descriptor = LibraryDescriptor::new("widget-kit");
//! let layout = ProjectLayout::new("/work/widget-kit");
//!
//! let config = BuildConfig::assemble(profile, &descriptor, &layout);
//! assert_eq!(config.output.resolve_filename(), "widget-kit.min.js");
//! assert_eq!(config.plugins.len(), 5);
//! ```

pub mod chunks;
pub mod config;
pub mod descriptor;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod output;
pub mod plugins;
pub mod profile;
pub mod rules;
pub mod style;
pub mod validation;

// Re-export main types
pub use chunks::*;
pub use config::*;
pub use descriptor::*;
pub use dev::*;
pub use error::*;
pub use layout::*;
pub use output::*;
pub use plugins::*;
pub use profile::*;
pub use rules::*;
pub use style::*;

// Re-export discovery and validation
pub use discovery::DescriptorDiscovery;
pub use validation::{ConfigValidator, FsValidator, SchemaValidator};
