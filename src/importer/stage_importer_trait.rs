// ==========================================
// Warehouse Daily KPI - Importer Trait Seams
// ==========================================
// Stage 0 of the import pipeline: file -> raw string rows.
// The loader is generic over the parser so tests can feed it
// synthetic row sets without touching the filesystem.
// ==========================================

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// Parses one tabular file into raw rows keyed by trimmed header name.
pub trait FileParser {
    fn parse_to_raw_records(
        &self,
        file_path: &Path,
    ) -> Result<Vec<HashMap<String, String>>, Box<dyn Error>>;
}
