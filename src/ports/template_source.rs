use crate::domain::AppError;

/// Port for loading template sources by relative name (e.g. `sxcu/file.sxcu`).
pub trait TemplateSource {
    fn load_template(&self, name: &str) -> Result<String, AppError>;
}
