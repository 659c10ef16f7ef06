use super::error::DefectError;
use nalgebra::Point3;

/// Sentinel species symbol meaning "leave a vacancy": the selected atom is
/// removed and nothing is inserted in its place.
pub const VACANCY: &str = "Va";

/// Fallback target when the caller does not supply one: the cell center in
/// fractional coordinates.
pub const DEFAULT_TARGET: [f64; 3] = [0.5, 0.5, 0.5];

/// One substitution or vacancy operation.
#[derive(Debug, Clone, PartialEq)]
pub struct DefectSpec {
    substitution: String,
    site: String,
    target: Option<Point3<f64>>,
}

impl DefectSpec {
    pub fn builder() -> DefectSpecBuilder {
        DefectSpecBuilder::new()
    }

    /// The species inserted at the removed site, or [`VACANCY`].
    pub fn substitution(&self) -> &str {
        &self.substitution
    }

    /// The element whose atom is removed.
    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn is_vacancy(&self) -> bool {
        self.substitution == VACANCY
    }

    /// The target coordinate, resolved against [`DEFAULT_TARGET`].
    pub fn target(&self) -> Point3<f64> {
        self.target
            .unwrap_or_else(|| Point3::from(DEFAULT_TARGET))
    }

    /// The target as requested, `None` if the default applies.
    pub fn requested_target(&self) -> Option<Point3<f64>> {
        self.target
    }
}

#[derive(Debug, Default)]
pub struct DefectSpecBuilder {
    substitution: Option<String>,
    site: Option<String>,
    target: Option<Point3<f64>>,
}

impl DefectSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn substitution(mut self, symbol: &str) -> Self {
        self.substitution = Some(symbol.to_string());
        self
    }

    pub fn site(mut self, symbol: &str) -> Self {
        self.site = Some(symbol.to_string());
        self
    }

    pub fn target(mut self, target: impl Into<Point3<f64>>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// # Errors
    ///
    /// Returns an error if a required symbol is missing or empty.
    pub fn build(self) -> Result<DefectSpec, DefectError> {
        let substitution = self
            .substitution
            .ok_or(DefectError::MissingParameter("substitution"))?;
        let site = self.site.ok_or(DefectError::MissingParameter("site"))?;

        if substitution.trim().is_empty() {
            return Err(DefectError::EmptySymbol {
                field: "substitution",
            });
        }
        if site.trim().is_empty() {
            return Err(DefectError::EmptySymbol { field: "site" });
        }

        Ok(DefectSpec {
            substitution,
            site,
            target: self.target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_both_symbols() {
        let err = DefectSpec::builder().site("Si").build().unwrap_err();
        assert_eq!(err, DefectError::MissingParameter("substitution"));

        let err = DefectSpec::builder().substitution("Ge").build().unwrap_err();
        assert_eq!(err, DefectError::MissingParameter("site"));
    }

    #[test]
    fn build_rejects_empty_symbols() {
        let err = DefectSpec::builder()
            .substitution("  ")
            .site("Si")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DefectError::EmptySymbol {
                field: "substitution"
            }
        );
    }

    #[test]
    fn target_falls_back_to_cell_center() {
        let spec = DefectSpec::builder()
            .substitution("Ge")
            .site("Si")
            .build()
            .unwrap();
        assert_eq!(spec.requested_target(), None);
        assert_eq!(spec.target(), Point3::new(0.5, 0.5, 0.5));

        let spec = DefectSpec::builder()
            .substitution("Ge")
            .site("Si")
            .target([0.0, 0.0, 0.25])
            .build()
            .unwrap();
        assert_eq!(spec.target(), Point3::new(0.0, 0.0, 0.25));
    }

    #[test]
    fn vacancy_sentinel_is_recognized() {
        let spec = DefectSpec::builder()
            .substitution(VACANCY)
            .site("O")
            .build()
            .unwrap();
        assert!(spec.is_vacancy());

        let spec = DefectSpec::builder()
            .substitution("Ge")
            .site("Si")
            .build()
            .unwrap();
        assert!(!spec.is_vacancy());
    }
}
