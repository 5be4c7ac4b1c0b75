use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use wordfreq::{format_number, is_valid_word, AnalyzerError, TextAnalyzer, WordFrequencyAnalyzer};

/// Word frequency statistics for a text
#[derive(Parser, Debug)]
#[command(name = "wordfreq", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Read the text from a file instead of the argument or stdin
    #[arg(short = 'f', long = "file", global = true)]
    file: Option<PathBuf>,

    /// More log output (-v, -vv, -vvv) when RUST_LOG is not set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Highest frequency of any word
    Highest {
        /// Text to analyze (or use --file / stdin)
        text: Option<String>,
    },
    /// Frequency of one word
    Count {
        /// Word to count (letters a-z, A-Z only)
        #[arg(value_parser = parse_word)]
        word: String,

        /// Text to analyze (or use --file / stdin)
        text: Option<String>,
    },
    /// Most frequent words
    Top {
        /// Number of words to show, at most the number of distinct words in the text
        #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
        top: i64,

        /// Text to analyze (or use --file / stdin)
        text: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

impl CliError {
    /// 2 for rejected input, 1 for I/O failures.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Analyzer(_) => 2,
            CliError::ReadFile { .. } | CliError::Stdin(_) | CliError::Output(_) => 1,
        }
    }
}

fn parse_word(s: &str) -> Result<String, String> {
    if is_valid_word(s) {
        Ok(s.to_string())
    } else {
        Err(AnalyzerError::InvalidWord(s.to_string()).to_string())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.init();
}

fn read_input(text: Option<&str>, file: Option<&PathBuf>) -> Result<String, CliError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        debug!("reading text from {}", path.display());
        return fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        });
    }

    debug!("reading text from stdin");
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(CliError::Stdin)?;
    Ok(input)
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let analyzer = TextAnalyzer::new();
    let file = args.file.as_ref();

    match &args.command {
        Command::Highest { text } => {
            let input = read_input(text.as_deref(), file)?;
            let highest = analyzer.highest_frequency(&input);
            writeln!(out, "{}", format_number(highest)).map_err(CliError::Output)?;
        }
        Command::Count { word, text } => {
            let input = read_input(text.as_deref(), file)?;
            let frequency = analyzer.frequency_for_word(&input, word)?;
            writeln!(out, "{}", format_number(frequency)).map_err(CliError::Output)?;
        }
        Command::Top { top, text } => {
            let input = read_input(text.as_deref(), file)?;
            for entry in analyzer.most_frequent_n_words(&input, *top)? {
                writeln!(out, "{}", entry).map_err(CliError::Output)?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(argv: &[&str]) -> (Result<(), CliError>, String) {
        let args = Args::try_parse_from(argv.iter().copied()).unwrap();
        let mut out = Vec::new();
        let result = run(&args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_top_prints_ranked_lines() {
        let (result, out) = run_args(&["wordfreq", "top", "-n", "3", "The sun shines over the lake"]);
        assert!(result.is_ok());
        assert_eq!(out, "the: 2\nlake: 1\nover: 1\n");
    }

    #[test]
    fn test_run_highest_and_count() {
        let (result, out) = run_args(&["wordfreq", "highest", "hello Hello hELLo"]);
        assert!(result.is_ok());
        assert_eq!(out, "3\n");

        let (result, out) = run_args(&["wordfreq", "count", "the", "The sun shines over the lake"]);
        assert!(result.is_ok());
        assert_eq!(out, "2\n");
    }

    #[test]
    fn test_run_top_too_high_is_validation_error() {
        let (result, out) = run_args(&["wordfreq", "top", "word word"]);
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input integer 10 is too high. Input text contains 1 unique word."
        );
        assert_eq!(err.exit_code(), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_top_non_positive_is_validation_error() {
        let (result, _) = run_args(&["wordfreq", "top", "-n", "0", "text"]);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Input integer should be positive.");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_run_missing_file_is_io_error() {
        let (result, out) = run_args(&["wordfreq", "-f", "nonexistent_file_12345.txt", "highest"]);
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_codes() {
        let invalid = CliError::from(AnalyzerError::InvalidWord("a1".to_string()));
        assert_eq!(invalid.exit_code(), 2);

        let io_err = CliError::Stdin(io::Error::new(io::ErrorKind::Other, "closed"));
        assert_eq!(io_err.exit_code(), 1);
    }

    #[test]
    fn test_count_rejects_invalid_word_at_parse_time() {
        assert!(Args::try_parse_from(["wordfreq", "count", "invalid_word", "text"]).is_err());
    }

    #[test]
    fn test_parse_word_rejects_separators() {
        assert_eq!(parse_word("lake"), Ok("lake".to_string()));
        assert!(parse_word("invalid_word").is_err());
    }

    #[test]
    fn test_args_accept_negative_top() {
        let args = Args::try_parse_from(["wordfreq", "top", "-n", "-1", "some text"]).unwrap();
        match args.command {
            Command::Top { top, text } => {
                assert_eq!(top, -1);
                assert_eq!(text.as_deref(), Some("some text"));
            }
            other => panic!("Expected top command, got {:?}", other),
        }
    }

    #[test]
    fn test_text_argument_wins_over_file() {
        let input = read_input(Some("inline"), Some(&PathBuf::from("missing.txt"))).unwrap();
        assert_eq!(input, "inline");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_input(None, Some(&PathBuf::from("nonexistent_file_12345.txt")));
        match result {
            Err(CliError::ReadFile { .. }) => (),
            other => panic!("Expected ReadFile error, got {:?}", other),
        }
    }
}
