use std::error::Error;
use std::fs;

use clap::Parser;
use log::info;
use differences::input::{load_document, render, resolve_property, Format};
use differences::Operator;

/// Command-line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Function: `-` (complement), `⋂` (intersection) or `⋃` (union)
    func: Operator,

    /// Left (desired) YAML or JSON file, `-` for stdin
    left: String,

    /// Right (owned) YAML or JSON file, `-` for stdin
    right: String,

    /// Dotted property of the left document to use as the left operand
    #[arg(long = "left-property", default_value = "")]
    left_property: String,

    /// Dotted property of the right document to use as the right operand
    #[arg(long = "right-property", default_value = "")]
    right_property: String,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<String>,

    /// Write the result as canonical JSON instead of YAML
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging
    #[arg(long = "debug")]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize the logger
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    // Only one operand can come from stdin
    if args.left == "-" && args.right == "-" {
        return Err("stdin can feed only one operand".into());
    }

    // Read both documents and pick the configured properties
    let left_doc = load_document(&args.left)?;
    let right_doc = load_document(&args.right)?;
    let left = resolve_property(&left_doc, &args.left_property);
    let right = resolve_property(&right_doc, &args.right_property);

    info!("Computing {} {} {}", args.left, args.func, args.right);
    let result = args.func.apply(left, right)?;

    // Write the result to the output file or stdout
    let format = if args.json { Format::Json } else { Format::Yaml };
    let out_str = render(&result, format)?;
    match args.output {
        Some(ref path) => {
            fs::write(path, out_str)?;
            info!("Result written to {}", path);
        }
        None => print!("{}", out_str),
    }
    Ok(())
}
