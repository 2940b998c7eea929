//! Wordlax CLI - Word document tree to Markdown/LaTeX converter

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use log::LevelFilter;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use wordlax::{
    convert_document, files::document_stem, load_document_xml, ConversionOutput,
    ConversionStats, ConversionWarning, W2MOptions, XmlTree,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "w2m")]
#[command(version)]
#[command(about = "Wordlax - Word document to Markdown converter with LaTeX math", long_about = None)]
struct Cli {
    /// Input .docx or document.xml (reads XML from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Document name used in image paths (defaults to the input file stem)
    #[arg(long)]
    name: Option<String>,

    /// Directory holding the extracted `{name}_images` tree
    #[arg(long, default_value = "../Images")]
    media_root: String,

    /// Keep formulas inline even when they stand alone in a paragraph
    #[arg(long)]
    inline_math: bool,

    /// Print conversion statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Read input
    let xml = match cli.input_file {
        Some(ref path) => load_document_xml(path).unwrap_or_else(|e| fail(&e.to_string())),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let document_name = cli
        .name
        .clone()
        .or_else(|| {
            cli.input_file
                .as_deref()
                .and_then(|p| document_stem(Path::new(p)))
        })
        .unwrap_or_else(|| W2MOptions::default().document_name);

    let options = W2MOptions {
        media_root: cli.media_root.clone(),
        display_math: !cli.inline_math,
        ..W2MOptions::for_document(document_name)
    };

    let tree = XmlTree::parse(&xml).unwrap_or_else(|e| fail(&e.to_string()));
    let ConversionOutput {
        content,
        warnings,
        stats,
        ..
    } = convert_document(&tree, &options);

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet && !warnings.is_empty() {
        print_warnings_to_stderr(&warnings);
    }

    if cli.stats {
        print_stats(&stats);
    }

    // Check strict mode
    if cli.strict && !warnings.is_empty() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            warnings.len()
        );
        std::process::exit(1);
    }

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", content)?;
            if warnings.is_empty() {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    warnings.len()
                );
            }
        }
        None => {
            println!("{}", content);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::builder()
        .filter_module("wordlax", level)
        .format_timestamp(None)
        .try_init();
}

#[cfg(feature = "cli")]
fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[ConversionWarning]) {
    eprintln!("── {} warning(s) ──", warnings.len());
    for warning in warnings {
        eprintln!("  {}", warning);
    }
    eprintln!();
}

#[cfg(feature = "cli")]
fn print_stats(stats: &ConversionStats) {
    eprintln!("Conversion statistics:");
    eprintln!("  paragraphs:    {}", stats.paragraphs);
    eprintln!("  tables:        {}", stats.tables);
    eprintln!("  math items:    {}", stats.math);
    eprintln!(
        "  images:        {} ({} raster, {} vector)",
        stats.images(),
        stats.raster_images,
        stats.vector_images
    );
    eprintln!("  other nodes:   {}", stats.other);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install wordlax --features cli");
    eprintln!("  w2m [OPTIONS] [INPUT_FILE]");
}
