//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SubtrackPaths;
pub use settings::Settings;
