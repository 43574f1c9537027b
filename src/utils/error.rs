use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template rendering failed for {name}: {source}")]
    RenderError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GenError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GenError::TemplateNotFound { .. } => {
                "Run from the project root or point --template-dir at the directory holding the .tmpl.001 files"
            }
            GenError::ReadError { .. } => "Check that the template file is readable",
            GenError::WriteError { .. } | GenError::CreateDirError { .. } => {
                "Check permissions and free space for the output directory"
            }
            GenError::RenderError { .. } => "Fix the template syntax reported above",
            GenError::ConfigError { .. } | GenError::TomlError(_) => {
                "Check the configuration file path and its TOML syntax"
            }
            GenError::InvalidConfigValueError { .. } => "Correct the reported configuration value",
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_message_includes_path() {
        let err = GenError::TemplateNotFound {
            path: PathBuf::from("DockerTemplates/Dockerfile.tmpl.001"),
        };
        assert_eq!(
            err.to_string(),
            "Template not found: DockerTemplates/Dockerfile.tmpl.001"
        );
        assert!(err.recovery_suggestion().contains("--template-dir"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = GenError::WriteError {
            path: PathBuf::from("gensrc/Dockerfile"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("gensrc/Dockerfile"));
    }
}
