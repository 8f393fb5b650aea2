use anyhow::{anyhow, bail, Context, Result};
use charview::catalog::CharacterRecord;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::process;

fn main() {
    match run() {
        Ok(result) => {
            if result.summary.errors > 0 || (result.fail_on_warn && result.summary.warnings > 0) {
                process::exit(2);
            }
        }
        Err(err) => {
            eprintln!("catalog_check error: {err:?}");
            process::exit(1);
        }
    }
}

#[derive(Default)]
struct RunSummary {
    checked: usize,
    warnings: usize,
    errors: usize,
}

struct RunResult {
    summary: RunSummary,
    fail_on_warn: bool,
}

#[derive(Debug)]
struct CliOptions {
    fail_on_warn: bool,
    show_help: bool,
    targets: Vec<String>,
}

fn run() -> Result<RunResult> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_cli_args(&args)?;
    if options.show_help {
        print_usage();
        return Ok(RunResult { summary: RunSummary::default(), fail_on_warn: options.fail_on_warn });
    }
    if options.targets.is_empty() {
        return Err(anyhow!("no catalog files provided"));
    }
    let mut summary = RunSummary::default();
    for target in &options.targets {
        let (errors, warnings) = check_file(target)?;
        summary.checked += 1;
        summary.errors += errors;
        summary.warnings += warnings;
    }
    println!(
        "[catalog_check] {} file(s) checked, {} error(s), {} warning(s)",
        summary.checked, summary.errors, summary.warnings
    );
    Ok(RunResult { summary, fail_on_warn: options.fail_on_warn })
}

fn parse_cli_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions { fail_on_warn: false, show_help: false, targets: Vec::new() };
    for arg in args {
        match arg.as_str() {
            "--fail-on-warn" => options.fail_on_warn = true,
            "--help" | "-h" => options.show_help = true,
            flag if flag.starts_with("--") => {
                bail!("Unknown flag '{flag}'. Supported flags: --fail-on-warn, --help.")
            }
            target => options.targets.push(target.to_string()),
        }
    }
    Ok(options)
}

fn print_usage() {
    println!("Usage: catalog_check [--fail-on-warn] <catalog.json> [more.json ...]");
    println!("Validates character catalog files: duplicate ids, missing id/spine fields.");
}

fn check_file(path: &str) -> Result<(usize, usize)> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read catalog file {path}"))?;
    let records: Vec<CharacterRecord> =
        serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse catalog file {path}"))?;
    println!("[catalog_check] {path}: {} record(s)", records.len());

    let mut errors = 0;
    let mut warnings = 0;
    let mut seen: HashSet<&str> = HashSet::new();
    for (slot, record) in records.iter().enumerate() {
        if record.id.is_empty() {
            println!("  error: record #{slot} has an empty id");
            errors += 1;
        } else if !seen.insert(record.id.as_str()) {
            println!("  error: duplicate id '{}'", record.id);
            errors += 1;
        }
        if record.spine.is_empty() {
            println!("  warning: '{}' has no spine asset and cannot be displayed", record.id);
            warnings += 1;
        }
        if record.char_name.is_empty() {
            println!("  warning: '{}' has no display name", record.id);
            warnings += 1;
        }
    }
    Ok((errors, warnings))
}
