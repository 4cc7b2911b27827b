//! Configuration module for the expense tracker
//!
//! - Config directory resolution
//! - User settings (report labels, log filter)

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
