use crate::draft::{DraftError, DraftPatch, EventDraft};
use crate::parser::DraftExtractor;
use anyhow::Result;
use chrono::{DateTime, Utc};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// How a finished draft is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Preview,
    Json,
}

pub struct Application {
    extractor: DraftExtractor,
    format: OutputFormat,
    edits: DraftPatch,
    /// Fixed reference instant; the wall clock is read per line when `None`
    reference: Option<DateTime<Utc>>,
}

impl Application {
    pub fn new(extractor: DraftExtractor, format: OutputFormat, edits: DraftPatch) -> Self {
        Self { extractor, format, edits, reference: None }
    }

    /// Resolve every sentence relative to `reference` instead of the clock
    pub fn with_reference_instant(mut self, reference: Option<DateTime<Utc>>) -> Self {
        self.reference = reference;
        self
    }

    /// The instant the next sentence is read against
    pub fn reference_instant(&self) -> DateTime<Utc> {
        self.reference.unwrap_or_else(Utc::now)
    }

    /// Parse one sentence, apply the requested edits and render the result.
    ///
    /// Parse failures come back as a `DraftError` inside the `anyhow::Error`.
    pub fn render(&self, input: &str, now: DateTime<Utc>) -> Result<String> {
        let draft = self.extractor.parse(input, now)?;
        let draft = draft.apply(self.edits.clone())?;
        match self.format {
            OutputFormat::Preview => Ok(render_preview(&draft)),
            OutputFormat::Json => Ok(draft.to_json()?),
        }
    }

    /// Read sentences from the terminal until Ctrl-C or Ctrl-D
    pub fn run_interactive(&self) -> Result<()> {
        log::info!("Starting interactive prompt");
        let mut rl = DefaultEditor::new()?;

        println!("일정을 말하듯 입력하세요. 예: 내일 오후 3시 치과 @강남역");

        loop {
            match rl.readline("📅 ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    match self.render(&line, self.reference_instant()) {
                        Ok(output) => println!("{}", output),
                        Err(err) => match err.downcast_ref::<DraftError>() {
                            Some(reason) => println!("⚠️ {}", reason),
                            None => log::error!("Failed to render draft: {:?}", err),
                        },
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Human-readable draft, laid out like the confirmation card
pub fn render_preview(draft: &EventDraft) -> String {
    format!(
        "📅 일정 미리보기\n  일정 제목: {}\n  시작 시간: {}\n  종료 시간: {}\n  장소: {}",
        draft.title(),
        draft.start().format("%Y-%m-%d %H:%M"),
        draft.end().format("%Y-%m-%d %H:%M"),
        draft.location().unwrap_or("-"),
    )
}
