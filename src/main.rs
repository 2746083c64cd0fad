use clap::Parser;
use decksmith::{DeckPipeline, PipelineError, Theme};
use std::fs;
use std::path::PathBuf;

/// Generate a themed PowerPoint deck from a declarative JSON file.
#[derive(Parser, Debug)]
#[command(name = "decksmith", version, about)]
struct Args {
    /// Path to the deck JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the .pptx file to write
    #[arg(short, long)]
    output: PathBuf,

    /// Optional theme JSON file; the built-in palette is used when omitted
    #[arg(long)]
    theme: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PipelineError> {
    let theme = match &args.theme {
        Some(path) => Theme::from_file(path)?,
        None => Theme::default(),
    };

    let deck_json = fs::read_to_string(&args.input)?;
    DeckPipeline::new(theme).generate_to_file(&deck_json, &args.output)?;

    println!("Wrote {}", args.output.display());
    Ok(())
}
