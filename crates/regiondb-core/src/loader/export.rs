// crates/regiondb-core/src/loader/export.rs
use super::common_io::{create_stream, open_stream, CompressionMode};
use super::output_path;
use crate::error::{RegionDbError, Result};
use crate::model::RegionDb;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

const INDENT: &[u8] = b"    ";

impl RegionDb {
    /// Write the document as JSON with 4-space indentation.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)?;
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        String::from_utf8(buf).map_err(|e| RegionDbError::InvalidData(e.to_string()))
    }

    /// Write `regions.json` (or `regions.json.gz`) into `out_dir`, creating
    /// the directory if needed. Returns the written path.
    pub fn save(&self, out_dir: impl AsRef<Path>, compression: CompressionMode) -> Result<PathBuf> {
        let path = output_path(out_dir.as_ref(), compression);
        let mut writer = create_stream(&path, compression)?;
        self.write_json(&mut writer)?;
        writer.finish()?;
        info!(path = %path.display(), "wrote region database");
        Ok(path)
    }

    /// Read a previously exported document back in.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let reader = open_stream(path.as_ref())?;
        let mut db: RegionDb = serde_json::from_reader(reader)?;
        db.sort();
        Ok(db)
    }
}
