//! Project layout configuration
//!
//! There is no configuration file: the layout is resolved from command
//! line flags and the current directory.

mod layout;

pub use layout::{LayoutOptions, ProjectLayout};
