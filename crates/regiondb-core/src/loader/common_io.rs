// crates/regiondb-core/src/loader/common_io.rs
use crate::error::{RegionDbError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Output compression for the exported document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    #[default]
    None,
}

impl CompressionMode {
    pub fn file_suffix(self) -> &'static str {
        match self {
            CompressionMode::Gzip => ".gz",
            CompressionMode::None => "",
        }
    }
}

/// Read a whole dump file, turning a missing file into [`RegionDbError::NotFound`].
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            RegionDbError::NotFound(format!("{} ({e})", path.display()))
        }
        _ => RegionDbError::Io(e),
    })
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file for reading, transparently un-gzipping `*.gz` paths.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        RegionDbError::NotFound(format!("Document not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(RegionDbError::InvalidData(
                "Gzip input requires the 'compact' feature".into(),
            ));
        }
    }

    Ok(Box::new(reader))
}

/// Output side of an export: a buffered file, optionally gzip-wrapped.
///
/// Call [`finish`](Self::finish) once writing is done; it writes the gzip
/// trailer and flushes the file, reporting any error.
pub enum OutputStream {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputStream {
    pub fn finish(self) -> Result<()> {
        let mut file = match self {
            OutputStream::Plain(w) => w,
            #[cfg(feature = "compact")]
            OutputStream::Gzip(enc) => enc.finish()?,
        };
        file.flush()?;
        Ok(())
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            OutputStream::Plain(w) => w.write(buf),
            #[cfg(feature = "compact")]
            OutputStream::Gzip(enc) => enc.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            OutputStream::Plain(w) => w.flush(),
            #[cfg(feature = "compact")]
            OutputStream::Gzip(enc) => enc.flush(),
        }
    }
}

/// Creates `path` (and its parent directories) for writing.
pub fn create_stream(path: &Path, compression: CompressionMode) -> Result<OutputStream> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(path)?);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Ok(OutputStream::Gzip(GzEncoder::new(
                    writer,
                    Compression::default(),
                )))
            }
            #[cfg(not(feature = "compact"))]
            {
                Err(RegionDbError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ))
            }
        }
        CompressionMode::None => Ok(OutputStream::Plain(writer)),
    }
}
