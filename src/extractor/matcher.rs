use crate::extractor::model::FunctionInfo;
use anyhow::{Context, Result};
use regex::Regex;

/// Find the first `func <name>(...)` declaration in `source` and slice
/// it into parameter list, return annotation, and body.
///
/// The body ends at the first line that is exactly `}` at column 0.
/// Nested block closers in gofmt output are indented, so they do not
/// terminate the match; a nested closer at column 0 does.
/// `function_name` is spliced into the pattern verbatim, so pattern
/// metacharacters in the name give undefined matching behavior.
pub fn extract(source: &str, function_name: &str) -> Result<Option<FunctionInfo>> {
    let pattern = format!(
        r"(?ms)func\s+{}\s*\((?P<params>[^)]*)\)\s*(?P<ret>.*?)\{{(?P<body>.*?)^\}}",
        function_name
    );
    let re = Regex::new(&pattern)
        .with_context(|| format!("Invalid search pattern for function '{}'", function_name))?;

    Ok(re.captures(source).map(|caps| FunctionInfo {
        name: function_name.to_string(),
        params: caps["params"].to_string(),
        return_annotation: caps["ret"].trim().to_string(),
        body: caps["body"].trim().to_string(),
    }))
}
