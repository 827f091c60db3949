//! Converter CLI - validate a delimited file and write it as JSON or XML
//!
//! ```bash
//! converter data/hotels.csv -o hotels.json            # writes data/hotels.json
//! converter data/hotels.csv -o out/hotels.xml -s name # sorted by name
//! converter data/hotels.txt -d ';' -o hotels.json
//! ```
//!
//! Exit status is 0 when an output file was written and 2 when nothing was.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use converter::logs::init_logging;
use converter::{
    ConvertError, ConvertOptions, EmitOutcome, OutputFormat, RecordStore, TracingSink,
    DEFAULT_OUTPUT_DIR,
};
use converter::error::ConvertResult;

#[derive(Parser)]
#[command(name = "converter")]
#[command(about = "Convert delimited hotel listings to JSON or XML", long_about = None)]
struct Cli {
    /// Input delimited file
    input: PathBuf,

    /// Field delimiter of the input file
    #[arg(short, long, default_value_t = ',', env = "CONVERTER_DELIMITER")]
    delimiter: char,

    /// Output file; its extension (.json or .xml) selects the format
    #[arg(short = 'o', long = "output-file", alias = "output_file")]
    output: PathBuf,

    /// Field to sort records by
    #[arg(short, long)]
    sort: Option<String>,

    /// Directory for output files given without a directory
    #[arg(long, env = "CONVERTER_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// XML root element name
    #[arg(long, env = "CONVERTER_ROOT_NAME", default_value = "hotels")]
    root_name: String,

    /// XML element name for each record
    #[arg(long, env = "CONVERTER_ITEM_NAME", default_value = "hotel")]
    item_name: String,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            delimiter: self.delimiter,
            output_dir: self.output_dir.clone(),
            root_name: self.root_name.clone(),
            item_name: self.item_name.clone(),
            ..Default::default()
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(EmitOutcome::Written(_)) => ExitCode::SUCCESS,
        Ok(EmitOutcome::Skipped) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> ConvertResult<EmitOutcome> {
    let options = cli.options();
    let sink = TracingSink;

    let mut store = RecordStore::load(&cli.input, options.delimiter, &sink);
    tracing::debug!(
        kept = store.len(),
        rejected = store.rejected(),
        "loaded {}",
        cli.input.display()
    );

    if let Some(key) = cli.sort.as_deref() {
        store.sort_by(key, &sink);
    }

    let output = options.resolve_output_path(&cli.output);
    if output.file_name().is_none() {
        return Err(ConvertError::InvalidOutputPath(output.display().to_string()));
    }

    if OutputFormat::from_path(&output).is_some() {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(store.emit_to(&output, &options, &sink))
}
