use crate::core::models::structure::Structure;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing crystal-structure file
/// formats.
///
/// Implementors handle format-specific parsing and serialization. Content a
/// format carries verbatim but the structure model does not interpret (such
/// as comment and lattice header lines) travels in the associated
/// `Metadata` type, so a read/modify/write cycle can preserve it.
pub trait StructureFormat {
    /// Format-specific data carried alongside the parsed structure.
    type Metadata;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a structure from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter
    /// issues.
    fn read_from(reader: &mut impl BufRead) -> Result<(Structure, Self::Metadata), Self::Error>;

    /// Writes a structure and its metadata to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        structure: &Structure,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads a structure from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<(Structure, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a structure and its metadata to a file path.
    ///
    /// The file is only created once the structure is fully transformed, so
    /// a failed run never leaves a partial output file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        structure: &Structure,
        metadata: &Self::Metadata,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(structure, metadata, &mut writer)
    }
}
