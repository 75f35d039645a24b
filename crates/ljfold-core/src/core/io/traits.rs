use crate::core::models::points::PointSet;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing point-set file formats.
///
/// Implementors handle format-specific parsing and serialization; the
/// path-based methods are provided on top of the reader/writer ones.
pub trait PointFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a point set from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the rows do not form a valid point set.
    fn read_from(reader: &mut impl BufRead) -> Result<PointSet, Self::Error>;

    /// Writes a point set to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(points: &PointSet, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a point set from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<PointSet, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a point set to a file path, creating or truncating the file.
    fn write_to_path<P: AsRef<Path>>(points: &PointSet, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(points, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
