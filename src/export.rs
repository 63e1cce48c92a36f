//! Results output formatting (delimited text).
//!
//! Format:
//! ```csv
//! Freq,Re(Vin V),Im(Vin V),|Av dB|,/_Av dB
//! Hz,V,V,dB,Rads
//! 1.000e+01,3.333e+00,0.000e+00,-6.021e+00,0.000e+00
//! ```
//!
//! Raw values take a real/imaginary column pair, dB values a magnitude/phase
//! pair. A request without a unit shows `L` in the unit row.

use std::io::Write;
use std::path::Path;

use crate::analysis::{OutputDirective, OutputRow, OutputValue};
use crate::error::Result;

/// Unit shown for requests that carry none.
const UNITLESS: &str = "L";

/// Encoder settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Digits after the decimal point in scientific notation
    pub precision: usize,
    /// Field separator
    pub delimiter: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            delimiter: ',',
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Format a number as `d.ddde+XX`.
pub fn scientific(value: f64, precision: usize) -> String {
    let text = format!("{:.*e}", precision, value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        // inf, -inf, NaN
        None => text,
    }
}

/// Write the header rows and one data row per frequency.
pub fn write_table<W: Write>(
    rows: &[OutputRow],
    directive: &OutputDirective,
    config: &ExportConfig,
    writer: &mut W,
) -> Result<()> {
    let _span = tracing::info_span!("export", n_rows = rows.len()).entered();
    let sep = config.delimiter;

    // Header rows
    let mut names = vec!["Freq".to_string()];
    let mut units = vec!["Hz".to_string()];
    for (request, _) in directive.resolved() {
        let unit = if request.unit.is_empty() {
            UNITLESS
        } else {
            request.unit.as_str()
        };
        if request.decibel().is_some() {
            names.push(format!("|{}|", request.key));
            names.push(format!("/_{}", request.key));
            units.push(unit.to_string());
            units.push("Rads".to_string());
        } else {
            names.push(format!("Re({})", request.key));
            names.push(format!("Im({})", request.key));
            units.push(unit.to_string());
            units.push(unit.to_string());
        }
    }
    write_record(writer, &names, sep)?;
    write_record(writer, &units, sep)?;

    // Data rows
    for row in rows {
        let mut fields = vec![scientific(row.frequency, config.precision)];
        for (_, value) in &row.values {
            let (first, second) = match *value {
                OutputValue::Complex(z) => (z.re, z.im),
                OutputValue::Decibel { mag, phase } => (mag, phase),
            };
            fields.push(scientific(first, config.precision));
            fields.push(scientific(second, config.precision));
        }
        write_record(writer, &fields, sep)?;
    }

    tracing::debug!(columns = names.len(), "table written");
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, fields: &[String], sep: char) -> Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            write!(writer, "{}", sep)?;
        }
        write!(writer, "{}", field)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Create (or truncate) `path` as an empty file.
pub fn write_empty(path: &Path) -> Result<()> {
    std::fs::File::create(path)?;
    Ok(())
}
