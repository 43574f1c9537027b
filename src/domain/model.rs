use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_HTTP_PORT: i64 = -1;
pub const DEFAULT_HTTPS_PORT: i64 = 443;
pub const DEFAULT_TEMPLATE_DIR: &str = "DockerTemplates";
pub const DEFAULT_OUTPUT_DIR: &str = "gensrc";

/// Values exposed to templates under the `setting` namespace.
///
/// A missing `source_image` is left out of the serialized form so templates
/// see it as undefined rather than as a `none` literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,
    pub http_port: i64,
    pub https_port: i64,
}

impl Default for Setting {
    fn default() -> Self {
        Self {
            source_image: None,
            http_port: DEFAULT_HTTP_PORT,
            https_port: DEFAULT_HTTPS_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub setting: Setting,
}

impl RenderContext {
    pub fn new(setting: Setting) -> Self {
        Self { setting }
    }
}

/// One template file and the output file it renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateJob {
    pub template: &'static str,
    pub output: &'static str,
}

pub const DOCKERFILE_JOB: TemplateJob = TemplateJob {
    template: "Dockerfile.tmpl.001",
    output: "Dockerfile",
};

pub const DOCKER_COMPOSE_JOB: TemplateJob = TemplateJob {
    template: "docker-compose.yaml.tmpl.001",
    output: "docker-compose.yaml",
};

/// Render order matters: a failure on a later job leaves earlier outputs in place.
pub const TEMPLATE_JOBS: [TemplateJob; 2] = [DOCKERFILE_JOB, DOCKER_COMPOSE_JOB];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub output_path: PathBuf,
    pub contents: String,
    pub written: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    pub fn written_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.files
            .iter()
            .filter(|file| file.written)
            .map(|file| &file.output_path)
    }
}
