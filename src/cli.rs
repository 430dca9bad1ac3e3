//! CLI argument definitions and the command handler.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use parlance::{classify, classify_from_reader, Detection};

/// Parlance - Detect the language a text is written in
#[derive(Parser, Debug)]
#[command(name = "parlance")]
#[command(
    version,
    about = "Detect the language of text from trigram profiles and Unicode scripts",
    long_about = "Parlance detects which of 25 languages a text is written in, \
entirely offline from compiled-in trigram profiles and Unicode script ranges.\n\n\
Text can be passed as arguments, read from a file, or piped on stdin. \
Undetectable input reports the language code 'und'.",
    after_help = "\
Examples:
  parlance \"Ceci n'est pas une pipe\"     Detect a sentence
  parlance --file letter.txt              Detect a file's language
  cat letter.txt | parlance               Detect from stdin
  parlance --format json \"hola mundo\"    JSON output for scripting"
)]
pub struct Cli {
    /// Text to detect (reads stdin when absent and no --file given)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the text from a file instead
    #[arg(long, short = 'f', conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "PARLANCE_LOG", default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let detection = if let Some(path) = &cli.file {
        debug!("reading input from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        classify_from_reader(file)?
    } else if !cli.text.is_empty() {
        classify(&cli.text.join(" "))
    } else {
        debug!("reading input from stdin");
        classify_from_reader(io::stdin().lock())?
    };

    match cli.format.as_str() {
        "json" => print_json(&detection)?,
        _ => print_text(&detection),
    }
    Ok(())
}

fn print_text(detection: &Detection) {
    println!(
        "{}\t{}\t{:.4}",
        detection.language_code(),
        detection.language_name(),
        detection.confidence()
    );
}

fn print_json(detection: &Detection) -> Result<()> {
    let payload = serde_json::json!({
        "language": detection.language_code(),
        "name": detection.language_name(),
        "self_name": detection.self_name(),
        "confidence": detection.confidence(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_text() {
        let cli = Cli::try_parse_from(["parlance", "hola", "mundo"]).unwrap();
        assert_eq!(cli.text, vec!["hola", "mundo"]);
        assert_eq!(cli.format, "text");
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_file_flag_conflicts_with_text() {
        assert!(Cli::try_parse_from(["parlance", "-f", "x.txt", "hola"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["parlance", "--format", "xml", "hola"]).is_err());
    }

    #[test]
    fn test_defaults_to_stdin_mode() {
        let cli = Cli::try_parse_from(["parlance"]).unwrap();
        assert!(cli.text.is_empty());
        assert!(cli.file.is_none());
        assert_eq!(cli.log_level, "warn");
    }
}
