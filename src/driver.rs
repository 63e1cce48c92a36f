//! End-to-end pipeline: netlist text in, results table out.

use std::io::Write;
use std::path::Path;

use crate::analysis::{OutputDirective, OutputRow};
use crate::circuit::{collect_components, Circuit};
use crate::dsl::{self, NetlistAst};
use crate::error::Result;
use crate::export::{write_empty, write_table, ExportConfig};

/// A solved circuit with its rendered outputs.
#[derive(Debug, Clone)]
pub struct Report {
    pub circuit: Circuit,
    pub outputs: OutputDirective,
    pub rows: Vec<OutputRow>,
}

impl Report {
    /// Build and solve the circuit a parsed netlist describes.
    pub fn from_ast(ast: NetlistAst) -> Result<Self> {
        let terms = ast.terminations()?;
        let sweep = ast.sweep()?;
        let frequencies = sweep.frequencies()?;
        tracing::debug!(?sweep, points = sweep.count(), "sweep generated");

        let components = collect_components(&ast.components, &frequencies)?;
        let circuit = Circuit::new(components, frequencies, terms)?;
        let rows = circuit.format_outputs(&ast.outputs);

        Ok(Self {
            circuit,
            outputs: ast.outputs,
            rows,
        })
    }

    /// Sweep frequencies (Hz).
    pub fn frequencies(&self) -> &[f64] {
        self.circuit.frequencies()
    }

    /// Write the results table.
    pub fn write_table<W: Write>(&self, config: &ExportConfig, writer: &mut W) -> Result<()> {
        write_table(&self.rows, &self.outputs, config, writer)
    }

    /// The results table as a string.
    pub fn to_table(&self, config: &ExportConfig) -> Result<String> {
        let mut buf = Vec::new();
        self.write_table(config, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Decode and solve netlist text.
pub fn analyse(text: &str) -> Result<Report> {
    Report::from_ast(dsl::parse(text)?)
}

/// Analyse the netlist at `input` and write the table to `output`.
///
/// On any failure `output` is left as an empty file and the error is returned.
pub fn run(input: &Path, output: &Path, config: &ExportConfig) -> Result<()> {
    let _span = tracing::info_span!("run", input = %input.display(), output = %output.display()).entered();

    let table = dsl::parse_file(input)
        .and_then(Report::from_ast)
        .and_then(|report| report.to_table(config));

    let result = table.and_then(|table| Ok(std::fs::write(output, table)?));
    if let Err(e) = &result {
        tracing::error!(error = %e, "analysis failed, writing empty output");
        if let Err(write_err) = write_empty(output) {
            tracing::error!(error = %write_err, "could not write empty output");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{OutputValue, Quantity};
    use crate::error::CascadeError;
    use approx::assert_relative_eq;

    const SERIES_50: &str = "\
<CIRCUIT>
n1=1 n2=2 R=50
</CIRCUIT>
<TERMS>
VT=5 RS=50 RL=50
Fstart=1000 Fend=1000 Nfreqs=1
</TERMS>
<OUTPUT>
Zin Ohms
Av
V1
</OUTPUT>
";

    #[test]
    fn test_analyse_series_resistor() {
        let report = analyse(SERIES_50).unwrap();
        assert_eq!(report.frequencies(), &[1000.0]);
        assert_eq!(report.rows.len(), 1);

        let Some(OutputValue::Complex(zin)) = report.rows[0].get("Zin Ohms") else {
            panic!("expected complex Zin");
        };
        assert_relative_eq!(zin.re, 100.0);
        let Some(OutputValue::Complex(av)) = report.rows[0].get("Av") else {
            panic!("expected complex Av");
        };
        assert_relative_eq!(av.re, 0.5);
        let Some(OutputValue::Complex(v1)) = report.rows[0].get("V1") else {
            panic!("expected complex V1");
        };
        assert_relative_eq!(v1.re, 5.0 * 100.0 / 150.0, epsilon = 1e-12);
        assert_relative_eq!(report.circuit.quantity(Quantity::Zout)[0].re, 100.0);
    }

    #[test]
    fn test_misconnected_component_dropped() {
        let text = SERIES_50.replace("n1=1 n2=2 R=50", "n1=1 n2=2 R=50\nn1=3 n2=3 R=10");
        let report = analyse(&text).unwrap();
        assert_eq!(report.circuit.components().len(), 1);
    }

    #[test]
    fn test_misconnected_unknown_kind_dropped() {
        let text = SERIES_50.replace("n1=1 n2=2 R=50", "n1=1 n2=2 R=50\nn1=3 n2=3 X=10");
        let report = analyse(&text).unwrap();
        assert_eq!(report.circuit.components().len(), 1);
    }

    #[test]
    fn test_unknown_kind_is_fatal() {
        let text = SERIES_50.replace("R=50", "X=50");
        assert!(matches!(analyse(&text), Err(CascadeError::UnknownElementKind { .. })));
    }

    #[test]
    fn test_all_misconnected_is_empty_circuit() {
        let text = SERIES_50.replace("n1=1 n2=2", "n1=2 n2=2");
        assert!(matches!(analyse(&text), Err(CascadeError::EmptyCircuit)));
    }

    #[test]
    fn test_to_table() {
        let table = analyse(SERIES_50).unwrap().to_table(&ExportConfig::new()).unwrap();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "Freq,Re(Zin Ohms),Im(Zin Ohms),Re(Av),Im(Av),Re(V1),Im(V1)");
        assert_eq!(lines[1], "Hz,Ohms,Ohms,L,L,L,L");
        let fields: Vec<_> = lines[2].split(',').collect();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], "1.000e+03");
        assert_eq!(fields[1], "1.000e+02");
        assert_eq!(fields[3], "5.000e-01");
        assert_eq!(fields[5], "3.333e+00");
    }
}
