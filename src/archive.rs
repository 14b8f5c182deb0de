use std::io::{Seek, Write};

use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::{batch::Processed, cf_try, error::CanvasError};

/// Writes every processed image into a deflate-compressed ZIP archive,
/// each under its batch file name. Returns the writer once the archive is finished.
pub fn write_archive<W: Write + Seek>(
    writer: W,
    processed: &[Processed],
) -> Result<W, CanvasError> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for entry in processed {
        cf_try!(zip.start_file(entry.file_name.as_str(), options));
        cf_try!(zip.write_all(&entry.image.bytes));
        log::info!("Added to ZIP: {}", entry.file_name);
    }
    Ok(cf_try!(zip.finish()))
}
