// ==========================================
// Warehouse Daily KPI - Stage Loader
// ==========================================
// Pipeline: parse file -> map rows -> typed stage table
// Loading is all-or-nothing per file: the first malformed cell
// aborts the load and surfaces through the batch error channel.
// ==========================================

use crate::domain::records::{InboundRecord, PackRecord, PickRecord, ShipRecord};
use crate::domain::types::StageKind;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

pub struct StageLoader {
    parser: UniversalFileParser,
    mapper: FieldMapper,
}

impl Default for StageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StageLoader {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper,
        }
    }

    pub fn load_inbound(&self, path: &Path) -> ImportResult<Vec<InboundRecord>> {
        let rows = self.parse(StageKind::Inbound, path)?;
        rows.iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_inbound(row, idx + 1))
            .collect()
    }

    pub fn load_pick(&self, path: &Path) -> ImportResult<Vec<PickRecord>> {
        let rows = self.parse(StageKind::Pick, path)?;
        rows.iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_pick(row, idx + 1))
            .collect()
    }

    pub fn load_pack(&self, path: &Path) -> ImportResult<Vec<PackRecord>> {
        let rows = self.parse(StageKind::Pack, path)?;
        rows.iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_pack(row, idx + 1))
            .collect()
    }

    pub fn load_ship(&self, path: &Path) -> ImportResult<Vec<ShipRecord>> {
        let rows = self.parse(StageKind::Ship, path)?;
        rows.iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_ship(row, idx + 1))
            .collect()
    }

    fn parse(
        &self,
        stage: StageKind,
        path: &Path,
    ) -> ImportResult<Vec<HashMap<String, String>>> {
        let rows = self
            .parser
            .parse(path)
            .map_err(|e| ImportError::FileReadError(format!("{}: {}", path.display(), e)))?;
        info!(stage = %stage, rows = rows.len(), "stage export parsed");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_load_pick_typed_rows() {
        let file = csv_file(
            "Generated delivery,Source actual qty.,User,Warehouse Order\n\
             D1,3,NOVAK,WO1\n\
             D1,4,NOVAK,WO2\n\
             D2,10,SVOBODA,WO3\n",
        );

        let loader = StageLoader::new();
        let records = loader.load_pick(file.path()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].order_id, Some("D1".to_string()));
        assert_eq!(records[2].quantity, Some(10.0));
        assert_eq!(records[2].row_number, 3);
    }

    #[test]
    fn test_load_inbound_without_quantity_column() {
        let file = csv_file("User\nNOVAK\nSVOBODA\n");

        let loader = StageLoader::new();
        let records = loader.load_inbound(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.quantity.is_none()));
    }

    #[test]
    fn test_load_ship_malformed_status_fails() {
        let file = csv_file("Status,Carrier\nfifty,ACME\n");

        let loader = StageLoader::new();
        assert!(loader.load_ship(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let loader = StageLoader::new();
        assert!(loader.load_pack(Path::new("no_such_export.csv")).is_err());
    }
}
