//! Polar result table and CSV rendering.

/// Column header of every polar CSV, in table order.
pub const CSV_HEADER: &str = "M,P,T,Mach,Re,Alpha,Cl,Cd,Cm,Cdp";

/// One aggregated polar row: airfoil shape fractions, operating point,
/// then coefficients. Field order matches [`CSV_HEADER`], which puts CM
/// ahead of CDp even though save-files list CDp first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarRow {
    pub max_camber: f64,
    pub camber_position: f64,
    pub thickness: f64,
    pub mach: f64,
    pub reynolds: f64,
    pub alpha: f64,
    pub cl: f64,
    pub cd: f64,
    pub cm: f64,
    pub cdp: f64,
}

impl PolarRow {
    fn push_csv(&self, out: &mut String) {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            self.max_camber,
            self.camber_position,
            self.thickness,
            self.mach,
            self.reynolds,
            self.alpha,
            self.cl,
            self.cd,
            self.cm,
            self.cdp
        ));
    }
}

/// Growable result table for one airfoil's whole sweep.
#[derive(Debug, Clone, Default)]
pub struct PolarTable {
    rows: Vec<PolarRow>,
}

impl PolarTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: PolarRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PolarRow] {
        &self.rows
    }

    /// Render the table as CSV text. The header line is always present,
    /// even when no combination produced a row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            row.push_csv(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> PolarRow {
        PolarRow {
            max_camber: 0.04,
            camber_position: 0.4,
            thickness: 0.12,
            mach: 0.001,
            reynolds: 30_000.0,
            alpha: -4.0,
            cl: -0.1462,
            cd: 0.02133,
            cm: -0.0686,
            cdp: 0.01974,
        }
    }

    #[test]
    fn empty_table_is_header_only() {
        let table = PolarTable::new();
        assert!(table.is_empty());
        assert_eq!(table.to_csv(), "M,P,T,Mach,Re,Alpha,Cl,Cd,Cm,Cdp\n");
    }

    #[test]
    fn row_renders_in_header_order() {
        let mut table = PolarTable::new();
        table.push(sample_row());

        let csv = table.to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("0.04,0.4,0.12,0.001,30000,-4,-0.1462,0.02133,-0.0686,0.01974")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut table = PolarTable::new();
        let mut second = sample_row();
        second.alpha = -3.0;
        table.push(sample_row());
        table.push(second);

        assert_eq!(table.len(), 2);
        assert!((table.rows()[0].alpha - -4.0).abs() < 1e-12);
        assert!((table.rows()[1].alpha - -3.0).abs() < 1e-12);
    }
}
