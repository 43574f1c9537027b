use clap::Parser;
use docker_config_gen::utils::{logger, validation::Validate};
use docker_config_gen::{CliConfig, ConfigGenerator, GenError, LocalStorage};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.dry_run);

    tracing::info!("Starting docker-config-gen");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let dry_run = config.dry_run;
    let generator = ConfigGenerator::new(LocalStorage::new("."), config);

    match generator.run() {
        Ok(report) if dry_run => {
            for file in &report.files {
                println!("# {}", file.output_path.display());
                println!("{}", file.contents);
            }
        }
        Ok(report) => {
            for path in report.written_paths() {
                println!("📁 Generated {}", path.display());
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &GenError) -> ! {
    tracing::error!("❌ Docker configuration generation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    std::process::exit(1);
}
