use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "extract_pdf")]
#[command(version, about = "Extract the text of every page of a PDF into a text file", long_about = None)]
struct Args {
    /// PDF file to extract text from
    #[arg(value_name = "INPUT_PDF")]
    input: PathBuf,

    /// Text file to write, created or truncated
    #[arg(value_name = "OUTPUT_TXT")]
    output: PathBuf,

    /// User password for encrypted PDFs
    #[arg(short, long)]
    password: Option<String>,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run one extraction, reporting the outcome on stdout.
fn extract(extractor: &pdf_text_extract::PdfExtractor, input: &Path, output: &Path) -> bool {
    match extractor.extract_to_file(input, output) {
        Ok(summary) => {
            tracing::debug!(pages = summary.pages, bytes = summary.bytes_written, "done");
            println!(
                "Successfully extracted text from {} to {}",
                input.display(),
                output.display()
            );
            true
        }
        Err(e) => {
            println!("Error extracting text from {}: {}", input.display(), e);
            false
        }
    }
}

fn main() -> ExitCode {
    // clap exits with 2 on usage errors; usage errors here exit with 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(args.verbose);

    if !args.input.exists() {
        println!("PDF file not found: {}", args.input.display());
        return ExitCode::FAILURE;
    }

    // Build extractor with optional password
    let extractor = if let Some(password) = args.password {
        pdf_text_extract::PdfExtractor::builder()
            .password(password)
            .build()
    } else {
        pdf_text_extract::PdfExtractor::default()
    };

    if extract(&extractor, &args.input, &args.output) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
