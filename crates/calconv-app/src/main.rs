use calconv_app::cli::{Cli, run};
use calconv_app::logging;
use calconv_core::config::load_config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter_handle = logging::init();

    let settings = load_config(cli.config.as_deref())?;
    logging::apply_level(&filter_handle, &settings.logging.level);

    tracing::debug!(config = ?settings, "Configuration loaded");

    let stdout = std::io::stdout();
    run(&cli, &settings, &mut stdout.lock())
}
