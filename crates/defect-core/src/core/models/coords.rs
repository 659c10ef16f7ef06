use std::fmt;
use std::str::FromStr;

/// How the positions of a structure are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordKind {
    /// Fractional coordinates relative to the lattice vectors.
    Direct,
    /// Absolute spatial coordinates.
    Cartesian,
}

/// The coordinate-system marker line of a structure file.
///
/// Matching is case-insensitive, but the token is stored as written so that
/// serialization reproduces the input form: a file declaring `direct` is
/// re-emitted with `direct`, not `Direct`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordSystem {
    kind: CoordKind,
    token: String,
}

impl CoordSystem {
    pub fn kind(&self) -> CoordKind {
        self.kind
    }

    /// The marker token exactly as it appeared in the input (trimmed).
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl From<CoordKind> for CoordSystem {
    /// Builds a marker with the canonical capitalized token.
    fn from(kind: CoordKind) -> Self {
        let token = match kind {
            CoordKind::Direct => "Direct",
            CoordKind::Cartesian => "Cartesian",
        };
        Self {
            kind,
            token: token.to_string(),
        }
    }
}

impl FromStr for CoordSystem {
    type Err = ();

    /// Parses a marker line.
    ///
    /// # Errors
    ///
    /// Returns `()` if the trimmed input is neither `direct` nor
    /// `cartesian` in any capitalization.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let kind = match trimmed.to_ascii_lowercase().as_str() {
            "direct" => CoordKind::Direct,
            "cartesian" => CoordKind::Cartesian,
            _ => return Err(()),
        };
        Ok(Self {
            kind,
            token: trimmed.to_string(),
        })
    }
}

impl fmt::Display for CoordSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
