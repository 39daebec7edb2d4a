// inflekt-cli: shared utilities for CLI tools.

use std::path::Path;
use std::process;

use inflekt_core::record::{Query, Record};

/// Read training/evaluation records from a TSV file: one
/// `lemma<TAB>form<TAB>tag` record per line. Blank lines are skipped.
pub fn read_records(path: &Path) -> Result<Vec<Record>, String> {
    let contents = read_file(path)?;
    let mut records = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = Record::parse_line(line)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        records.push(record);
    }
    Ok(records)
}

/// Read inference queries from a TSV file: `lemma<TAB>tag` per line, or
/// full three-field records whose middle field is ignored. Blank lines
/// are skipped.
pub fn read_queries(path: &Path) -> Result<Vec<Query>, String> {
    let contents = read_file(path)?;
    parse_queries(&contents).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Parse inference queries from already-loaded text (used for stdin).
pub fn parse_queries(contents: &str) -> Result<Vec<Query>, String> {
    let mut queries = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        queries.push(Query::parse_line(line).map_err(|e| e.to_string())?);
    }
    Ok(queries)
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

/// Scan `args` for `--NAME VALUE`, `--NAME=VALUE` or `-N VALUE`.
///
/// Returns `(value, remaining_args)`.
pub fn parse_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let long_eq = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&long_eq) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
