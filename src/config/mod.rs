//! Configuration: paths and user settings

pub mod paths;
pub mod settings;

pub use paths::SpendviewPaths;
pub use settings::Settings;
