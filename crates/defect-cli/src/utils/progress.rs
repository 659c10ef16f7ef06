use defectgen::engine::progress::{Event, ProgressCallback};
use tracing::{info, warn};

fn format_triple(x: f64, y: f64, z: f64) -> String {
    format!("[{}, {}, {}]", x, y, z)
}

/// Bridges core reporter events into the CLI's log stream. Visibility is
/// governed by the verbosity flags through the subscriber level filter.
pub struct CliProgressHandler;

impl CliProgressHandler {
    pub fn callback() -> ProgressCallback<'static> {
        Box::new(|event| match event {
            Event::StructureLoaded {
                symbols,
                counts,
                total_atoms,
            } => {
                info!(?symbols, ?counts, total_atoms, "Parsed structure");
            }
            Event::SiteSelected {
                symbol,
                position,
                target,
                distance,
            } => {
                info!(
                    %symbol,
                    position = %format_triple(position.x, position.y, position.z),
                    target = %format_triple(target.x, target.y, target.z),
                    distance,
                    "Selected atom for removal"
                );
            }
            Event::SiteExhausted { symbol } => {
                warn!(%symbol, "All atoms of this species have been removed");
            }
            Event::UnrecognizedSymbol { symbol } => {
                warn!(%symbol, "Not a recognized element symbol");
            }
            Event::Message(text) => info!("{}", text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triples_render_compactly() {
        assert_eq!(format_triple(0.5, 0.5, 0.5), "[0.5, 0.5, 0.5]");
        assert_eq!(format_triple(-0.1, 0.0, 1.0), "[-0.1, 0, 1]");
    }
}
