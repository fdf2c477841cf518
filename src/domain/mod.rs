pub mod configuration;
pub mod env_file;
pub mod error;
pub mod paths;
pub mod profile;
pub mod secret;
pub mod settings;
pub mod template;

pub use configuration::{ConfigurationMap, DefaultsOverride};
pub use env_file::render_env_file;
pub use error::AppError;
pub use paths::SetupPaths;
pub use profile::UploadProfile;
pub use settings::SetupSettings;
pub use template::TemplateValues;
