//! Affichage des caractéristiques et des vecteurs d'erreurs

use crate::OutputFormat;
use anyhow::Result;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CodeRow {
    #[tabled(rename = "Code")]
    code: usize,
    #[tabled(rename = "Binary")]
    binary: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ErrorRow {
    #[tabled(rename = "Bit")]
    bit: usize,
    #[tabled(rename = "Error")]
    error: String,
}

/// Affiche une caractéristique indexée par code
pub fn print_curve(curve: &[f64], bits: u32, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let width = bits as usize;
            let rows: Vec<CodeRow> = curve
                .iter()
                .enumerate()
                .map(|(code, value)| CodeRow {
                    code,
                    binary: if width == 0 {
                        String::from("-")
                    } else {
                        format!("{:0width$b}", code, width = width)
                    },
                    value: format!("{:.9}", value),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => {
            let data = serde_json::json!({
                "bits": bits,
                "codes": curve.len(),
                "values": curve,
            });
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }
    Ok(())
}

/// Affiche un vecteur d'erreurs, une ligne par bit
pub fn print_errors(errors: &[f64], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<ErrorRow> = errors
                .iter()
                .enumerate()
                .map(|(bit, error)| ErrorRow {
                    bit,
                    error: format!("{:+.9}", error),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(errors)?);
        }
    }
    Ok(())
}
