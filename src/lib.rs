pub mod app;
pub mod cli;
pub mod config;
pub mod draft;
pub mod parser;

use env_logger::Env;
use std::io::Write;

/// Log to stderr at `warn` unless `RUST_LOG` says otherwise
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use draft::{DraftError, DraftPatch, EventDraft, ParseOutcome, DEFAULT_TITLE};
pub use parser::{parse_to_draft, DraftExtractor, ParserOptions, PastTimePolicy};
