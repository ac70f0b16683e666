//! Configuration: filesystem paths and user settings

pub mod paths;
pub mod settings;

pub use paths::UpiqPaths;
pub use settings::Settings;
