use super::config::DefectSpec;
use super::error::DefectError;
use super::progress::{Event, ProgressReporter};
use crate::core::models::elements::is_element;
use crate::core::models::species::Species;
use crate::core::models::structure::Structure;
use crate::core::utils::geometry;
use nalgebra::Point3;
use tracing::{info, warn};

/// Result of a substitution: what was removed and where, plus naming
/// helpers for the output file.
#[derive(Debug, Clone, PartialEq)]
pub struct DefectOutcome {
    substitution: String,
    site: String,
    removed: Point3<f64>,
}

impl DefectOutcome {
    pub fn substitution(&self) -> &str {
        &self.substitution
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    /// Position of the removed atom, in the structure's coordinate system.
    pub fn removed(&self) -> Point3<f64> {
        self.removed
    }

    /// Header comment describing the defect, e.g.
    /// `Ge_Si defect 0.5000000000000000 0.5000000000000000 0.5000000000000000`.
    pub fn descriptor(&self) -> String {
        format!(
            "{}_{} defect {:.16} {:.16} {:.16}",
            self.substitution, self.site, self.removed.x, self.removed.y, self.removed.z
        )
    }

    /// Conventional output filename for this defect.
    pub fn default_filename(&self) -> String {
        format!("{}_{}_POSCAR", self.substitution, self.site)
    }
}

/// Applies one substitution or vacancy operation to `structure`.
///
/// The atom of the site element nearest the spec's target is removed; the
/// substitution species (unless it is the vacancy sentinel) receives the
/// removed position, appended to an existing species entry or to a new one
/// at the end of the order. Substituting an element into itself is allowed
/// and moves the selected atom to the end of its species list.
///
/// # Errors
///
/// Returns [`DefectError::UnknownSite`] if the site element is not listed
/// in the structure, and [`DefectError::EmptySite`] if it is listed but has
/// no atoms left.
pub fn apply(
    structure: &mut Structure,
    spec: &DefectSpec,
    reporter: &ProgressReporter,
) -> Result<DefectOutcome, DefectError> {
    let site_index =
        structure
            .species_index(spec.site())
            .ok_or_else(|| DefectError::UnknownSite {
                symbol: spec.site().to_string(),
            })?;

    if !is_element(spec.site()) {
        reporter.report(Event::UnrecognizedSymbol {
            symbol: spec.site().to_string(),
        });
    }
    if !spec.is_vacancy() && !is_element(spec.substitution()) {
        reporter.report(Event::UnrecognizedSymbol {
            symbol: spec.substitution().to_string(),
        });
    }

    let target = spec.target();
    if spec.requested_target().is_none() {
        reporter.report(Event::Message(format!(
            "No target specified. Using default center: [{}, {}, {}]",
            target.x, target.y, target.z
        )));
    }

    let site = &structure.species()[site_index];
    let (position_index, removed) = geometry::nearest_position(site.positions(), &target)
        .ok_or_else(|| DefectError::EmptySite {
            symbol: spec.site().to_string(),
        })?;

    reporter.report(Event::SiteSelected {
        symbol: spec.site().to_string(),
        position: removed,
        target,
        distance: geometry::distance(&removed, &target),
    });
    info!(
        site = spec.site(),
        substitution = spec.substitution(),
        x = removed.x,
        y = removed.y,
        z = removed.z,
        "Selected defect site"
    );

    structure.species_mut(site_index).remove_position(position_index);
    if structure.species()[site_index].count() == 0 {
        warn!(
            symbol = spec.site(),
            "All atoms of the site element have been removed"
        );
        reporter.report(Event::SiteExhausted {
            symbol: spec.site().to_string(),
        });
    }

    if !spec.is_vacancy() {
        match structure.species_index(spec.substitution()) {
            Some(destination) => structure.species_mut(destination).push_position(removed),
            None => {
                let mut species = Species::new(spec.substitution());
                species.push_position(removed);
                structure.push_species(species);
            }
        }
    }

    Ok(DefectOutcome {
        substitution: spec.substitution().to_string(),
        site: spec.site().to_string(),
        removed,
    })
}
