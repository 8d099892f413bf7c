use crate::extractor::FunctionInfo;
use anyhow::Result;
use colored::*;
use std::io::{BufWriter, Write};

/// Render the four-field text report for an extracted function.
pub fn print_report(info: &FunctionInfo, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} {}", "Function Name:".bold().blue(), info.name)?;
    writeln!(out, "{} {}", "Parameters:".bold().blue(), info.params)?;
    writeln!(
        out,
        "{} {}",
        "Return Type:".bold().blue(),
        info.return_annotation
    )?;
    writeln!(out, "{}\n{}", "Body:".bold().blue(), info.body)?;
    Ok(())
}

pub fn print_not_found(function_name: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!("Function '{}' not found in the file.", function_name).yellow()
    )?;
    Ok(())
}

/// Serialize the extraction as a single JSON record.
pub fn write_json(info: &FunctionInfo, out: &mut dyn Write) -> Result<()> {
    let mut buf = BufWriter::new(out);
    serde_json::to_writer(&mut buf, info)?;
    buf.write_all(b"\n")?;
    buf.flush()?;
    Ok(())
}
