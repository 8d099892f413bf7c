use anyhow::{Context, Result};
use clap::Parser;
use func_extractor::extractor::{extract_from_file, FunctionInfo};
use func_extractor::report;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "func-extractor", version, about = "Extract a function definition from a Go source file")]
struct Cli {
    /// Path to the Go source file
    file_path: PathBuf,

    /// Name of the function to extract
    function_name: String,

    /// Emit the extraction as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Output file for the report (default stdout)
    #[arg(long, value_name = "file")]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let info = extract_from_file(&cli.file_path, &cli.function_name)?;

    match &cli.out {
        Some(p) => {
            let f = File::create(p).with_context(|| format!("Failed to create {}", p.display()))?;
            render(info.as_ref(), &cli, &mut BufWriter::new(f))?;
        }
        None => {
            let mut out = io::stdout().lock();
            render(info.as_ref(), &cli, &mut out)?;
        }
    }
    Ok(())
}

fn render(info: Option<&FunctionInfo>, cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match info {
        Some(info) if cli.json => report::write_json(info, out),
        Some(info) => report::print_report(info, out),
        None => report::print_not_found(&cli.function_name, out),
    }
}
