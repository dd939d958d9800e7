use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sheetviz::classify::{ColumnClassifier, FirstRowHeuristic, MajorityVote};
use sheetviz::data::Dataset;
use sheetviz::parser;
use sheetviz::runtime::Engine;
use std::io::{self, Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// CSV with headers in the first record
    Csv,
    /// JSON array of flat objects
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClassifierChoice {
    /// Classify each column from the first row only
    FirstRow,
    /// Classify by majority vote across all rows
    Majority,
}

#[derive(Parser, Debug)]
#[command(name = "sheetviz")]
#[command(
    about = "Derive renderer-ready chart data from tabular input",
    long_about = None
)]
struct Args {
    /// Chart spec string (e.g., 'pie(column: country)' or 'scatter3d(x: a, y: b, z: c)')
    spec: String,

    /// Table format read from stdin
    #[arg(long, value_enum, default_value_t = InputFormat::Csv)]
    format: InputFormat,

    /// Column-type inference strategy
    #[arg(long, value_enum, default_value_t = ClassifierChoice::FirstRow)]
    classifier: ClassifierChoice,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Parse the chart spec string
    let selection = match parser::parse_selection(&args.spec) {
        Ok((remaining, selection)) => {
            if !remaining.trim().is_empty() {
                eprintln!("Warning: unparsed input: '{}'", remaining);
            }
            selection
        }
        Err(e) => {
            eprintln!("Parse error: {:?}", e);
            std::process::exit(1);
        }
    };

    // Read the table from stdin
    let dataset = read_dataset(args.format).context("Failed to read table from stdin")?;

    let classifier: Box<dyn ColumnClassifier> = match args.classifier {
        ClassifierChoice::FirstRow => Box::new(FirstRowHeuristic),
        ClassifierChoice::Majority => Box::new(MajorityVote),
    };

    let view = Engine::with_classifier(classifier).derive_view(&dataset, &selection);

    // Write the derived view as JSON to stdout
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut handle, &view)
            .context("Failed to write JSON to stdout")?;
    } else {
        serde_json::to_writer(&mut handle, &view).context("Failed to write JSON to stdout")?;
    }
    handle.write_all(b"\n").context("Failed to write JSON to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn read_dataset(format: InputFormat) -> Result<Dataset> {
    match format {
        InputFormat::Csv => Dataset::from_csv_reader(io::stdin().lock()),
        InputFormat::Json => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            let value: serde_json::Value =
                serde_json::from_str(&input).context("Input is not valid JSON")?;
            Dataset::from_json(&value)
        }
    }
}
