//! Plain-text circuit diagrams.
//!
//! Diagrams are transposed: each qubit is a column, time flows downward and
//! every circuit ends in one measurement of all qubits under the key
//! [`MEASUREMENT_KEY`].
//!
//! ```text
//! 0          1
//! │          │
//! H          │
//! │          │
//! @──────────X
//! │          │
//! M('final')─M
//! ```

use crate::circuit::Circuit;

const WIRE: &str = "│";
const CROSSING: &str = "┼";
const CONTROL: &str = "@";
const MEASURE: &str = "M";

/// Key under which every qubit is measured at the end of a circuit.
pub const MEASUREMENT_KEY: &str = "final";

impl Circuit {
    /// Render the circuit as a transposed text diagram.
    pub fn to_text_diagram(&self) -> String {
        let n = self.num_qubits();
        if n == 0 {
            return String::new();
        }

        let labels: Vec<String> = (0..n).map(|q| q.to_string()).collect();
        let mut widths: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
        for inst in self.instructions() {
            if let Some(target) = inst.target() {
                let w = &mut widths[target.index()];
                *w = (*w).max(inst.gate.symbol().chars().count());
            }
        }

        let keyed = format!("{MEASURE}('{MEASUREMENT_KEY}')");
        widths[0] = widths[0].max(keyed.chars().count());

        let wires = vec![WIRE; n];
        let header: Vec<&str> = labels.iter().map(String::as_str).collect();

        let mut rows = vec![render_row(&header, &widths, None)];
        for inst in self.instructions() {
            rows.push(render_row(&wires, &widths, None));

            let mut cells = wires.clone();
            let span = inst.control().zip(inst.target()).map(|(c, t)| {
                let (c, t) = (c.index(), t.index());
                (c.min(t), c.max(t))
            });
            if let Some((lo, hi)) = span {
                for cell in &mut cells[lo + 1..hi] {
                    *cell = CROSSING;
                }
            }
            if let Some(control) = inst.control() {
                cells[control.index()] = CONTROL;
            }
            if let Some(target) = inst.target() {
                cells[target.index()] = inst.gate.symbol();
            }
            rows.push(render_row(&cells, &widths, span));
        }

        rows.push(render_row(&wires, &widths, None));
        let mut measure = vec![MEASURE; n];
        measure[0] = keyed.as_str();
        rows.push(render_row(&measure, &widths, Some((0, n - 1))));
        rows.join("\n")
    }
}

/// Lay out one row. Columns inside `span` are joined with a horizontal line.
fn render_row(cells: &[&str], widths: &[usize], span: Option<(usize, usize)>) -> String {
    let mut line = String::new();
    for (q, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let fill = match span {
            Some((lo, hi)) if lo <= q && q < hi => '─',
            _ => ' ',
        };
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat_n(fill, pad));
        if q + 1 < cells.len() {
            line.push(fill);
        }
    }
    line.trim_end().to_string()
}
