//! Scan command - extract a structured record from OCR text files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use dniscan_core::{DniRecord, DniScanner, ScanConfig};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Front-side OCR text file
    #[arg(required = true)]
    front: PathBuf,

    /// Back-side OCR text file
    #[arg(short, long)]
    back: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// List fields that could not be extracted
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        ScanConfig::from_file(Path::new(path))?
    } else {
        ScanConfig::default()
    };

    if !args.front.exists() {
        anyhow::bail!("front file not found: {}", args.front.display());
    }

    let front_text = fs::read_to_string(&args.front)?;
    let back_text = match &args.back {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("back file not found: {}", path.display());
            }
            Some(fs::read_to_string(path)?)
        }
        None => None,
    };

    info!("scanning {}", args.front.display());

    let scanner = DniScanner::with_config(&config);
    let record = scanner.process(&front_text, back_text.as_deref())?;

    if args.show_missing {
        let missing = record.missing_fields();
        if !missing.is_empty() {
            eprintln!("{}", style("Missing fields:").yellow());
            for field in &missing {
                eprintln!("  - {}", field);
            }
        }
    }

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Record written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record(record: &DniRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => {
            let fields = [
                ("Surname", &record.surname),
                ("Given name", &record.given_name),
                ("ID number", &record.id_number),
                ("Birth date", &record.birth_date),
                ("Address", &record.address),
                ("Birthplace", &record.birthplace),
                ("Tax ID", &record.tax_id),
            ];

            let mut out = String::new();
            for (label, value) in fields {
                if let Some(value) = value {
                    out.push_str(&format!("{label:<12} {value}\n"));
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_text_skips_missing() {
        let record = DniRecord {
            surname: Some("Perez".to_string()),
            id_number: Some("12345678".to_string()),
            ..Default::default()
        };

        let text = format_record(&record, OutputFormat::Text).unwrap();
        assert!(text.contains("Surname"));
        assert!(text.contains("Perez"));
        assert!(!text.contains("Tax ID"));
    }

    #[test]
    fn test_format_record_json_omits_missing() {
        let record = DniRecord {
            surname: Some("Perez".to_string()),
            ..Default::default()
        };

        let json = format_record(&record, OutputFormat::Json).unwrap();
        assert!(json.contains("\"surname\""));
        assert!(!json.contains("taxId"));
    }
}
