pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{
    Setting, DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE_DIR,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// Fully resolved, read-only configuration for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    pub setting: Setting,
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            setting: Setting::default(),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Layers a TOML file's values over the built-in defaults.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            template_dir: file
                .paths
                .template_dir
                .clone()
                .unwrap_or(defaults.template_dir),
            output_dir: file.paths.output_dir.clone().unwrap_or(defaults.output_dir),
            setting: Setting {
                source_image: file.setting.source_image.clone(),
                http_port: file.setting.http_port.unwrap_or(DEFAULT_HTTP_PORT),
                https_port: file.setting.https_port.unwrap_or(DEFAULT_HTTPS_PORT),
            },
            dry_run: false,
        }
    }
}

impl ConfigProvider for GeneratorConfig {
    fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn setting(&self) -> &Setting {
        &self.setting
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("template_dir", &self.template_dir)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "docker-config-gen")]
#[command(about = "Docker Configuration Generation")]
pub struct CliConfig {
    /// Set Source Image
    #[arg(long = "source-image", visible_alias = "image")]
    pub source_image: Option<String>,

    /// Set HTTP Port [default: -1]
    #[arg(long = "http-port", visible_alias = "http", allow_negative_numbers = true)]
    pub http_port: Option<i64>,

    /// Set HTTPS Port [default: 443]
    #[arg(long = "https-port", visible_alias = "https", allow_negative_numbers = true)]
    pub https_port: Option<i64>,

    /// Directory holding the .tmpl.001 templates [default: DockerTemplates]
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Directory the rendered files are written to [default: gensrc]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Optional TOML file supplying defaults for any flag above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render and print the files without writing them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Explicit flags win over the config file, which wins over built-in defaults.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let base = GeneratorConfig::from_toml(&file);

        Ok(GeneratorConfig {
            template_dir: self.template_dir.clone().unwrap_or(base.template_dir),
            output_dir: self.output_dir.clone().unwrap_or(base.output_dir),
            setting: Setting {
                source_image: self.source_image.clone().or(base.setting.source_image),
                http_port: self.http_port.unwrap_or(base.setting.http_port),
                https_port: self.https_port.unwrap_or(base.setting.https_port),
            },
            dry_run: self.dry_run,
        })
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::try_parse_from(["docker-config-gen"]).unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.setting.http_port, -1);
        assert_eq!(config.setting.https_port, 443);
        assert_eq!(config.template_dir, PathBuf::from("DockerTemplates"));
        assert_eq!(config.output_dir, PathBuf::from("gensrc"));
    }

    #[test]
    fn test_long_flags() {
        let cli = CliConfig::try_parse_from([
            "docker-config-gen",
            "--source-image=nginx:latest",
            "--http-port=8080",
            "--https-port=8443",
        ])
        .unwrap();
        let setting = cli.resolve().unwrap().setting;

        assert_eq!(setting.source_image.as_deref(), Some("nginx:latest"));
        assert_eq!(setting.http_port, 8080);
        assert_eq!(setting.https_port, 8443);
    }

    #[test]
    fn test_short_aliases() {
        let cli = CliConfig::try_parse_from([
            "docker-config-gen",
            "--image",
            "jenkins/jenkins:lts",
            "--http",
            "80",
            "--https",
            "9443",
        ])
        .unwrap();

        assert_eq!(cli.source_image.as_deref(), Some("jenkins/jenkins:lts"));
        assert_eq!(cli.http_port, Some(80));
        assert_eq!(cli.https_port, Some(9443));
    }

    #[test]
    fn test_negative_port_is_accepted() {
        let cli = CliConfig::try_parse_from(["docker-config-gen", "--http-port", "-1"]).unwrap();
        assert_eq!(cli.http_port, Some(-1));
    }

    #[test]
    fn test_non_integer_port_is_rejected() {
        let err = CliConfig::try_parse_from(["docker-config-gen", "--https-port", "abc"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[paths]
output_dir = "from-file"

[setting]
source_image = "file:image"
http_port = 8080
https_port = 8443
"#,
            )
            .unwrap();

        let cli = CliConfig::try_parse_from([
            "docker-config-gen",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--https-port",
            "9443",
        ])
        .unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.output_dir, PathBuf::from("from-file"));
        assert_eq!(config.template_dir, PathBuf::from("DockerTemplates"));
        assert_eq!(config.setting.source_image.as_deref(), Some("file:image"));
        assert_eq!(config.setting.http_port, 8080);
        assert_eq!(config.setting.https_port, 9443);
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let config = GeneratorConfig {
            output_dir: PathBuf::new(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(GeneratorConfig::default().validate().is_ok());
    }
}
