use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use lumina::core::config;
use lumina::fetch::{BibleApiSource, LabsBibleSource, Translation, VerseFetcher};
use lumina::tui;

#[derive(Parser)]
#[command(name = "lumina", about = "Daily Bible verses in your terminal")]
struct Args {
    /// Bible translation to fetch verses in
    #[arg(short, long, value_enum)]
    translation: Option<Translation>,

    /// Fetch a single verse, print it, and exit (no TUI)
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger - writes to lumina.log in the data directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_path = config::data_dir()
        .map(|d| d.join("lumina.log"))
        .unwrap_or_else(|| "lumina.log".into());
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("lumina: {e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };
    let settings = config::resolve(&file_config, args.translation);

    log::info!(
        "Lumina starting up (translation: {})",
        settings.translation.label()
    );

    if args.once {
        let fetcher = VerseFetcher::new(
            Box::new(BibleApiSource::new(None)),
            Box::new(LabsBibleSource::new(None)),
        );
        match fetcher.fetch_verse(settings.translation).await {
            Ok(verse) => {
                println!("\"{}\"", verse.text);
                println!("— {}", verse.reference);
                Ok(())
            }
            Err(e) => {
                eprintln!("lumina: {e}");
                Err(std::io::Error::other(e.to_string()))
            }
        }
    } else {
        tui::run(settings).await
    }
}
