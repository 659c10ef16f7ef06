use crate::core::io::traits::StructureFormat;
use crate::core::models::coords::CoordSystem;
use crate::core::models::structure::{Structure, StructureBuilder};
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Number of fixed header lines before the species line: the comment, the
/// scale factor, and the three lattice vectors.
const HEADER_LINES: usize = 5;

/// Verbatim header content of a POSCAR file that the structure model does
/// not interpret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoscarMetadata {
    /// Line 0, the comment line. Rewritten with a defect descriptor before
    /// the mutated structure is written out.
    pub comment: String,
    /// Lines 1-4: the scale factor and the three lattice-vector lines,
    /// preserved byte-for-byte.
    pub preamble: Vec<String>,
}

#[derive(Debug, Error)]
pub enum PoscarError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Format {
        line: usize,
        kind: PoscarFormatKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoscarFormatKind {
    #[error("File ends before the species and count lines")]
    TooShort,
    #[error("Invalid atom count '{value}'")]
    InvalidCount { value: String },
    #[error("Species line lists {symbols} symbols but the count line lists {counts} counts")]
    CountMismatch { symbols: usize, counts: usize },
    #[error("No 'Direct' or 'Cartesian' marker line found")]
    MissingCoordinateMarker,
    #[error("Coordinate block declares {expected} atoms but only {found} coordinate lines remain")]
    TruncatedCoordinates { expected: usize, found: usize },
    #[error("Invalid coordinate value '{value}'")]
    InvalidFloat { value: String },
    #[error("Coordinate line has fewer than 3 components")]
    MissingComponents,
}

fn parse_position(line: &str, line_num: usize) -> Result<Point3<f64>, PoscarError> {
    let mut tokens = line.split_whitespace();
    let mut components = [0.0f64; 3];
    for slot in &mut components {
        let token = tokens.next().ok_or(PoscarError::Format {
            line: line_num,
            kind: PoscarFormatKind::MissingComponents,
        })?;
        *slot = token.parse().map_err(|_| PoscarError::Format {
            line: line_num,
            kind: PoscarFormatKind::InvalidFloat {
                value: token.to_string(),
            },
        })?;
    }
    Ok(Point3::new(components[0], components[1], components[2]))
}

/// The VASP POSCAR positional format.
///
/// Layout: comment, scale factor, 3 lattice-vector lines, species symbols,
/// species counts, optional intermediate lines (e.g. `Selective dynamics`),
/// a `Direct`/`Cartesian` marker, then one coordinate line per atom. Only
/// the first 3 whitespace-separated tokens of a coordinate line are read;
/// anything after the declared atom count (velocities and the like) is
/// ignored. Intermediate lines between the counts and the marker are
/// consumed and not reproduced on output.
pub struct PoscarFile;

impl StructureFormat for PoscarFile {
    type Metadata = PoscarMetadata;
    type Error = PoscarError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(Structure, Self::Metadata), Self::Error> {
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

        if lines.len() < HEADER_LINES + 2 {
            return Err(PoscarError::Format {
                line: lines.len(),
                kind: PoscarFormatKind::TooShort,
            });
        }

        let metadata = PoscarMetadata {
            comment: lines[0].clone(),
            preamble: lines[1..HEADER_LINES].to_vec(),
        };

        let symbols: Vec<&str> = lines[HEADER_LINES].split_whitespace().collect();
        let counts = lines[HEADER_LINES + 1]
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| PoscarError::Format {
                    line: HEADER_LINES + 2,
                    kind: PoscarFormatKind::InvalidCount {
                        value: token.to_string(),
                    },
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if symbols.len() != counts.len() {
            return Err(PoscarError::Format {
                line: HEADER_LINES + 2,
                kind: PoscarFormatKind::CountMismatch {
                    symbols: symbols.len(),
                    counts: counts.len(),
                },
            });
        }

        let total_atoms: usize = counts.iter().sum();
        debug!(?symbols, ?counts, total_atoms, "Parsed species header");

        let mut marker_index = HEADER_LINES + 2;
        let coords: CoordSystem = loop {
            match lines.get(marker_index) {
                None => {
                    return Err(PoscarError::Format {
                        line: lines.len(),
                        kind: PoscarFormatKind::MissingCoordinateMarker,
                    });
                }
                Some(line) => {
                    if let Ok(coords) = line.parse::<CoordSystem>() {
                        break coords;
                    }
                    marker_index += 1;
                }
            }
        };

        let first_coord = marker_index + 1;
        let available = lines.len() - first_coord;
        if available < total_atoms {
            return Err(PoscarError::Format {
                line: lines.len(),
                kind: PoscarFormatKind::TruncatedCoordinates {
                    expected: total_atoms,
                    found: available,
                },
            });
        }

        let mut positions = Vec::with_capacity(total_atoms);
        for (offset, line) in lines[first_coord..first_coord + total_atoms]
            .iter()
            .enumerate()
        {
            positions.push(parse_position(line, first_coord + offset + 1)?);
        }

        let mut builder = StructureBuilder::new();
        builder.coords(coords);
        let mut remaining = positions.into_iter();
        for (symbol, count) in symbols.iter().zip(&counts) {
            builder.start_species(symbol);
            for position in remaining.by_ref().take(*count) {
                builder.add_position(position);
            }
        }

        Ok((builder.build(), metadata))
    }

    fn write_to(
        structure: &Structure,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writeln!(writer, "{}", metadata.comment)?;
        for line in &metadata.preamble {
            writeln!(writer, "{}", line)?;
        }

        let symbols: Vec<&str> = structure.species().iter().map(|s| s.symbol()).collect();
        writeln!(writer, "  {}", symbols.join("  "))?;

        let counts: Vec<String> = structure
            .species()
            .iter()
            .map(|s| s.count().to_string())
            .collect();
        writeln!(writer, "  {}", counts.join("  "))?;

        writeln!(writer, "{}", structure.coords())?;

        for position in structure.all_positions() {
            writeln!(
                writer,
                "  {:.16}  {:.16}  {:.16}",
                position.x, position.y, position.z
            )?;
        }

        Ok(())
    }
}
