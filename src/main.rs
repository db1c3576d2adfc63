use anyhow::Result;
use clap::Parser;
use kocal::app::{Application, OutputFormat};
use kocal::cli::{parse_reference_instant, Cli};
use kocal::config::parse_timezone;
use kocal::{Config, DraftError, DraftExtractor};
use log::info;

fn main() -> Result<()> {
    kocal::init_logger();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut options = config.parser_options()?;
    if let Some(label) = &cli.tz {
        options.timezone = parse_timezone(label)?;
    }
    info!("Starting kocal in {}", options.timezone.name());

    // Resolved before branching so a bad value is reported in both modes
    let reference = match &cli.now {
        Some(value) => Some(parse_reference_instant(value, options.timezone)?),
        None => None,
    };

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Preview };
    let app = Application::new(DraftExtractor::new(options), format, cli.patch())
        .with_reference_instant(reference);

    if cli.text.is_empty() {
        return app.run_interactive();
    }

    match app.render(&cli.utterance(), app.reference_instant()) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err) => match err.downcast_ref::<DraftError>() {
            Some(reason) => {
                eprintln!("{}", reason);
                std::process::exit(1);
            }
            None => Err(err),
        },
    }
}
