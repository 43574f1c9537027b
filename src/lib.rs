pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::GeneratorConfig;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{generator::ConfigGenerator, renderer::TemplateRenderer};
pub use domain::model::{GenerationReport, RenderContext, Setting};
pub use utils::error::{GenError, Result};
