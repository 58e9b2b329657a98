use clap::Parser;
use lightning_list::app::list::run_list;
use lightning_list::utils::{logger, validation::Validate};
use lightning_list::{Cli, CliError, Commands, Settings};

fn report_and_exit(e: CliError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.global.verbose);
    tracing::debug!("CLI arguments: {:?}", cli);

    let mut settings = match Settings::load(cli.global.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => report_and_exit(e),
    };
    cli.global.apply_to(&mut settings);

    if let Err(e) = settings.validate() {
        report_and_exit(e);
    }
    tracing::debug!("Settings: {:?}", settings);

    let result = match &cli.command {
        Commands::List(list) => run_list(list, settings).await,
    };

    if let Err(e) = result {
        report_and_exit(e);
    }

    Ok(())
}
