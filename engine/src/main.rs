// DJ 1866 generator entry point: batch CLI over RCV export files.
use engine::config::settings::ExportSettings;
use engine::pipeline;
use std::fs;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let (inputs, settings) = parse_args()?;
    info!(files = inputs.len(), "Starting DJ 1866 generator");

    let output = pipeline::process_batch(&inputs)?;

    for check in &output.report.validation.checks {
        if check.passed() {
            info!(rule = %check.rule, "Validation passed");
        } else {
            // Advisory: surfaced to the operator, export proceeds.
            warn!(rule = %check.rule, failing = check.failing, "Validation failed");
        }
    }

    let out_path = settings.resolve_output_path(&output.suggested_name);
    fs::write(&out_path, &output.bytes)?;
    info!(
        path = %out_path.display(),
        records = output.report.total_records,
        bytes = output.bytes.len(),
        "Export written"
    );

    // Machine-readable batch report for the display layer.
    println!("{}", serde_json::to_string_pretty(&output.report)?);
    Ok(())
}

fn parse_args() -> Result<(Vec<String>, ExportSettings), Box<dyn std::error::Error>> {
    let mut settings = ExportSettings::default();
    let mut inputs = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                settings.file_name_override =
                    Some(args.next().ok_or("missing value for --output")?);
            }
            "-d" | "--output-dir" => {
                settings.output_dir = args.next().ok_or("missing value for --output-dir")?.into();
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            _ => inputs.push(arg),
        }
    }

    if inputs.is_empty() {
        print_usage();
        std::process::exit(1);
    }
    Ok((inputs, settings))
}

fn print_usage() {
    eprintln!("Usage: dj1866 [-o FILE] [-d DIR] <RCV_*_YYYYMM.csv>...");
    eprintln!("Generates the SII DJ 1866 CSV from RCV purchase-register exports.");
}
