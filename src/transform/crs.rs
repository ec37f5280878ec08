use std::fmt;
use std::str::FromStr;

use crate::error::CrsError;

/// A coordinate reference system, identified by its authority id
/// (for example `EPSG:2056`).
///
/// The default value is the invalid, unset CRS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Crs {
    auth_id: String,
}

impl Crs {
    /// Creates the CRS with the given EPSG code.
    #[must_use]
    pub fn from_epsg(code: u32) -> Self {
        Self {
            auth_id: format!("EPSG:{code}"),
        }
    }

    /// Returns the authority id, empty for an unset CRS.
    #[must_use]
    pub fn auth_id(&self) -> &str {
        &self.auth_id
    }

    /// Returns `true` unless this is the unset CRS.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.auth_id.is_empty()
    }
}

impl FromStr for Crs {
    type Err = CrsError;

    /// Parses `AUTHORITY:CODE`. The authority is upper-cased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CrsError::Empty);
        }
        let Some((authority, code)) = s.split_once(':') else {
            return Err(CrsError::Malformed(s.to_owned()));
        };
        let well_formed = !authority.is_empty()
            && authority.chars().all(|c| c.is_ascii_alphanumeric())
            && !code.is_empty()
            && code.chars().all(|c| c.is_ascii_alphanumeric());
        if !well_formed {
            return Err(CrsError::Malformed(s.to_owned()));
        }
        Ok(Self {
            auth_id: format!("{}:{code}", authority.to_ascii_uppercase()),
        })
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str(&self.auth_id)
        } else {
            f.write_str("<unset>")
        }
    }
}
