//! Polar save-file parsing.
//!
//! The solver's PACC save format opens with a fixed-size banner (version
//! line, airfoil name, operating conditions, column headings) ahead of the
//! data rows. The banner is skipped wholesale by line count; data rows are
//! whitespace-delimited numeric columns in the order alpha, CL, CD, CDp,
//! CM, with any further columns (transition locations) ignored.

use crate::error::{XfoilError, XfoilResult};
use std::fs;
use std::path::Path;

/// Banner lines ahead of the data rows in XFOIL 6.9x save-files.
pub const DEFAULT_HEADER_LINES: usize = 12;

/// One converged angle-of-attack point from a polar save-file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub alpha: f64,
    pub cl: f64,
    pub cd: f64,
    pub cdp: f64,
    pub cm: f64,
}

/// Parse save-file text, skipping `header_lines` banner lines.
///
/// Lines with fewer than five tokens, or whose first five tokens do not
/// all parse as numbers, are dropped silently: the solver interleaves
/// warnings and blank lines with data, and one unconverged angle must not
/// poison the rest of the polar. Points come back in file order.
pub fn parse_polar(text: &str, header_lines: usize) -> Vec<PolarPoint> {
    text.lines()
        .skip(header_lines)
        .filter_map(parse_data_line)
        .collect()
}

fn parse_data_line(line: &str) -> Option<PolarPoint> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 5 {
        return None;
    }

    let mut fields = [0.0f64; 5];
    for (slot, token) in fields.iter_mut().zip(&parts) {
        *slot = token.parse().ok()?;
    }

    Some(PolarPoint {
        alpha: fields[0],
        cl: fields[1],
        cd: fields[2],
        cdp: fields[3],
        cm: fields[4],
    })
}

/// Read and parse a polar save-file from disk.
///
/// A file that does not exist comes back as [`XfoilError::PolarMissing`]
/// so the caller can skip the combination; any other I/O failure
/// propagates as-is.
pub fn read_polar_file(path: &Path, header_lines: usize) -> XfoilResult<Vec<PolarPoint>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(XfoilError::PolarMissing {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };
    Ok(parse_polar(&text, header_lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Banner shape of an XFOIL 6.99 save-file: twelve lines ahead of data.
    const SAVE_FILE: &str = r#"
       XFOIL         Version 6.99

 Calculated polar for: NACA 4412

 1 1 Reynolds number fixed          Mach number fixed

 xtrf =   1.000 (top)        1.000 (bottom)
 Mach =   0.001     Re =     0.030 e 6     Ncrit =   9.000

   alpha    CL        CD       CDp       CM     Top_Xtr  Bot_Xtr
  ------ -------- --------- --------- -------- -------- --------
  -4.000  -0.1462   0.02133   0.01974  -0.0686   1.0000   1.0000
  -3.000  -0.0293   0.02022   0.01868  -0.0747   1.0000   1.0000
   0.000   0.4721   0.01768   0.01625  -0.0966   1.0000   1.0000
"#;

    #[test]
    fn parses_rows_after_the_banner() {
        let points = parse_polar(SAVE_FILE, DEFAULT_HEADER_LINES);
        assert_eq!(points.len(), 3);
        assert!((points[0].alpha - -4.0).abs() < 1e-12);
        assert!((points[0].cl - -0.1462).abs() < 1e-12);
        assert!((points[0].cd - 0.02133).abs() < 1e-12);
        assert!((points[0].cdp - 0.01974).abs() < 1e-12);
        assert!((points[0].cm - -0.0686).abs() < 1e-12);
        assert!((points[2].alpha - 0.0).abs() < 1e-12);
    }

    #[test]
    fn points_keep_file_order() {
        let points = parse_polar(SAVE_FILE, DEFAULT_HEADER_LINES);
        assert!(points[0].alpha < points[1].alpha);
        assert!(points[1].alpha < points[2].alpha);
    }

    #[test]
    fn short_and_non_numeric_lines_are_dropped() {
        let text = r#"  -4.000  -0.1462   0.02133   0.01974  -0.0686
 Point converged poorly
  -3.000  -0.0293

  -2.000   0.0876   0.01925   0.01771  -0.0807   1.0000   1.0000
"#;
        let points = parse_polar(text, 0);
        assert_eq!(points.len(), 2);
        assert!((points[1].alpha - -2.0).abs() < 1e-12);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = "  1.000   0.5000   0.01000   0.00900  -0.1000   0.9000   0.8000\n";
        let points = parse_polar(text, 0);
        assert_eq!(points.len(), 1);
        assert!((points[0].cm - -0.1).abs() < 1e-12);
    }

    #[test]
    fn file_shorter_than_the_banner_yields_nothing() {
        let points = parse_polar("one\ntwo\nthree\n", DEFAULT_HEADER_LINES);
        assert!(points.is_empty());
    }

    #[test]
    fn missing_file_is_reported_as_polar_missing() {
        let path = std::env::temp_dir().join("ps_xfoil_no_such_polar_SAVE");
        let err = read_polar_file(&path, DEFAULT_HEADER_LINES).unwrap_err();
        assert!(matches!(err, XfoilError::PolarMissing { .. }));
    }

    #[test]
    fn reads_points_from_disk() {
        let path = std::env::temp_dir().join("ps_xfoil_polar_read_test_SAVE");
        std::fs::write(&path, SAVE_FILE).unwrap();

        let points = read_polar_file(&path, DEFAULT_HEADER_LINES).unwrap();
        assert_eq!(points.len(), 3);

        std::fs::remove_file(&path).unwrap();
    }
}
