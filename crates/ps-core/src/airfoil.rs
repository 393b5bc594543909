//! NACA 4-digit airfoil identity.
//!
//! An airfoil enters the system as a display name like "NACA 4412". The
//! last whitespace-separated token must be the 4-digit code; the three
//! shape parameters are decoded from it and the full name is kept verbatim
//! because the solver loads its built-in geometry from that exact line.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// A NACA 4-digit airfoil, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airfoil {
    name: String,
    camber: u8,
    camber_pos: u8,
    thickness: u8,
}

impl Airfoil {
    /// Parse a display name whose last token is a 4-digit NACA code.
    pub fn parse(name: &str) -> CoreResult<Self> {
        let code = name
            .split_whitespace()
            .next_back()
            .ok_or_else(|| CoreError::InvalidAirfoil {
                name: name.to_string(),
                reason: "name is empty",
            })?;

        if code.len() != 4 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidAirfoil {
                name: name.to_string(),
                reason: "last token must be exactly four decimal digits",
            });
        }

        let digits = code.as_bytes();
        Ok(Self {
            name: name.to_string(),
            camber: digits[0] - b'0',
            camber_pos: digits[1] - b'0',
            thickness: (digits[2] - b'0') * 10 + (digits[3] - b'0'),
        })
    }

    /// The display name exactly as given, fed verbatim to the solver.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File-system-safe stem: the name with spaces replaced by underscores.
    pub fn file_stem(&self) -> String {
        self.name.replace(' ', "_")
    }

    /// Maximum camber as a fraction of chord (first digit / 100).
    pub fn max_camber(&self) -> f64 {
        f64::from(self.camber) / 100.0
    }

    /// Chordwise position of maximum camber as a fraction of chord
    /// (second digit / 10).
    pub fn camber_position(&self) -> f64 {
        f64::from(self.camber_pos) / 10.0
    }

    /// Maximum thickness as a fraction of chord (last two digits / 100).
    pub fn thickness(&self) -> f64 {
        f64::from(self.thickness) / 100.0
    }
}

impl fmt::Display for Airfoil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
