//! Align subcommand - re-time a corrected transcript to JSON.

use eyre::{Context, Result};
use retime_align::{BracketSpeakerPolicy, Realigner, TimedWord, TranscriptDocument};
use std::path::PathBuf;
use std::time::Instant;

/// CLI arguments for transcript re-timing.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to machine transcript JSON
    pub transcript: PathBuf,

    /// Path to corrected plain-text transcript
    pub corrected: PathBuf,

    /// Output JSON path (default: transcript path with .aligned.json extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only treat bracketed tokens ("[Name]") as speaker labels
    #[arg(long)]
    pub bracket_speakers: bool,

    /// Print the first and last output words to stdout
    #[arg(long)]
    pub preview: bool,
}

/// Resolved configuration for transcript re-timing.
#[derive(Debug)]
pub struct Config {
    pub transcript: PathBuf,
    pub corrected: PathBuf,
    pub output: PathBuf,
    pub bracket_speakers: bool,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = args
            .output
            .unwrap_or_else(|| args.transcript.with_extension("aligned.json"));

        Ok(Self {
            transcript: args.transcript,
            corrected: args.corrected,
            output,
            bracket_speakers: args.bracket_speakers,
            preview: args.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        transcript = ?config.transcript.display(),
        corrected = ?config.corrected.display(),
        output = ?config.output.display(),
        "re-timing transcript"
    );

    let machine_json = std::fs::read_to_string(&config.transcript).wrap_err_with(|| {
        format!("failed to read transcript: {:?}", config.transcript.display())
    })?;
    let machine =
        TranscriptDocument::from_json_str(&machine_json).wrap_err("invalid machine transcript")?;

    let corrected = std::fs::read_to_string(&config.corrected).wrap_err_with(|| {
        format!(
            "failed to read corrected text: {:?}",
            config.corrected.display()
        )
    })?;

    let realigner = if config.bracket_speakers {
        Realigner::with_policy(Box::new(BracketSpeakerPolicy))
    } else {
        Realigner::new()
    };

    let s = Instant::now();

    let aligned = realigner.realign(&machine, &corrected);

    let d = s.elapsed();
    tracing::info!(
        words = aligned.words.len(),
        paragraphs = aligned.paragraphs.len(),
        duration = %format_secs(d.as_secs_f32()),
        "alignment completed"
    );

    let json = serde_json::to_string_pretty(&aligned)?;
    std::fs::write(&config.output, json).wrap_err_with(|| {
        format!(
            "failed to write aligned json: {:?}",
            config.output.display()
        )
    })?;

    if config.preview {
        println!("{}", preview_words(&aligned, 3, 3));
    }

    Ok(())
}

/// Display preview of output words (first and last entries).
fn preview_words(doc: &TranscriptDocument, head_count: usize, tail_count: usize) -> String {
    let total = doc.words.len();

    if total <= head_count + tail_count {
        doc.words.iter().map(format_word).collect::<Vec<_>>().join("\n")
    } else {
        let mut out: Vec<String> = doc.words[..head_count].iter().map(format_word).collect();
        out.push("...".to_string());
        out.extend(doc.words[(total - tail_count)..].iter().map(format_word));
        out.join("\n")
    }
}

fn format_word(word: &TimedWord) -> String {
    format!("{:7.2} {:7.2}  {}", word.start, word.end, word.text)
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}
