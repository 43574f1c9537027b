use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stdout, except in dry-run mode where stdout carries the rendered files.
pub fn init_cli_logger(verbose: bool, dry_run: bool) {
    let default_directive = if verbose {
        "docker_config_gen=debug,info"
    } else {
        "docker_config_gen=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    if dry_run {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}
