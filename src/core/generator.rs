use crate::core::renderer::TemplateRenderer;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{GeneratedFile, GenerationReport, RenderContext, TEMPLATE_JOBS};
use crate::utils::error::Result;

/// Renders the Dockerfile and docker-compose templates into the output directory.
pub struct ConfigGenerator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    renderer: TemplateRenderer,
}

impl<S: Storage, C: ConfigProvider> ConfigGenerator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Runs every template job in order, stopping at the first failure.
    ///
    /// Outputs already written by earlier jobs are left in place when a later
    /// job fails.
    pub fn run(&self) -> Result<GenerationReport> {
        let output_dir = self.config.output_dir();
        let dry_run = self.config.dry_run();

        if dry_run {
            tracing::info!("Dry run: nothing will be written to {}", output_dir.display());
        } else {
            self.storage.create_dir_all(output_dir)?;
        }

        let context = RenderContext::new(self.config.setting().clone());
        tracing::info!(
            "Render setting: source_image={:?} http_port={} https_port={}",
            context.setting.source_image,
            context.setting.http_port,
            context.setting.https_port
        );

        let mut report = GenerationReport::default();

        for job in TEMPLATE_JOBS {
            let template_path = self.config.template_dir().join(job.template);
            tracing::info!("Loading template {}", template_path.display());
            let source = self.storage.read_to_string(&template_path)?;

            let rendered = self.renderer.render(job.template, &source, &context)?;
            tracing::debug!("Rendered {}:\n{}", job.output, rendered);

            let output_path = output_dir.join(job.output);
            if !dry_run {
                self.storage.write_file(&output_path, rendered.as_bytes())?;
                tracing::info!("Wrote {} ({} bytes)", output_path.display(), rendered.len());
            }

            report.files.push(GeneratedFile {
                output_path,
                contents: rendered,
                written: !dry_run,
            });
        }

        Ok(report)
    }
}
