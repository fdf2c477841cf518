//! Settings file loading and merging with command-line options.

mod load_settings;

pub use load_settings::{ResolvedSetup, load_settings, resolve_setup};
