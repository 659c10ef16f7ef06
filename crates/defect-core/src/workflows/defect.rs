use crate::core::io::poscar::PoscarMetadata;
use crate::core::models::species::Species;
use crate::core::models::structure::Structure;
use crate::engine::config::DefectSpec;
use crate::engine::error::DefectError;
use crate::engine::progress::{Event, ProgressReporter};
use crate::engine::substitution::{self, DefectOutcome};
use tracing::{info, instrument};

/// Applies one substitution or vacancy operation to a parsed structure and
/// rewrites the metadata comment with the defect descriptor, so the caller
/// only has to serialize the result.
///
/// # Errors
///
/// Propagates [`DefectError`] from the engine. Errors are detected before
/// any mutation, so on failure both the structure and the metadata are
/// unchanged.
#[instrument(skip_all, name = "defect_workflow")]
pub fn run(
    structure: &mut Structure,
    metadata: &mut PoscarMetadata,
    spec: &DefectSpec,
    reporter: &ProgressReporter,
) -> Result<DefectOutcome, DefectError> {
    reporter.report(Event::StructureLoaded {
        symbols: structure
            .species()
            .iter()
            .map(|s| s.symbol().to_string())
            .collect(),
        counts: structure.species().iter().map(Species::count).collect(),
        total_atoms: structure.total_atoms(),
    });

    let outcome = substitution::apply(structure, spec, reporter)?;

    metadata.comment = outcome.descriptor();
    info!(comment = %metadata.comment, "Rewrote header comment with defect descriptor");
    Ok(outcome)
}
