// ==========================================
// Warehouse Daily KPI - Field Mapper
// ==========================================
// Responsibility: raw export row -> typed stage record
// Recognized columns are exact and case-sensitive; a small alias
// list per field absorbs known export variations. An absent
// column maps to None on every record (soft degradation); a
// present but unparseable numeric cell is a conversion error.
// ==========================================

use crate::domain::records::{InboundRecord, PackRecord, PickRecord, ShipRecord};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapper {
    // ==========================================
    // Per-stage mapping
    // ==========================================

    pub fn map_inbound(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<InboundRecord> {
        Ok(InboundRecord {
            quantity: self.parse_f64(row, "Source actual qty.", row_number)?,
            operator: self.get_string(row, "User"),
            row_number,
        })
    }

    pub fn map_pick(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<PickRecord> {
        Ok(PickRecord {
            quantity: self.parse_f64(row, "Source actual qty.", row_number)?,
            order_id: self.get_string(row, "Generated delivery"),
            operator: self.get_string(row, "User"),
            task_id: self.get_string(row, "Warehouse Order"),
            row_number,
        })
    }

    pub fn map_pack(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<PackRecord> {
        Ok(PackRecord {
            order_id: self.get_string(row, "Generated delivery"),
            operator: self.get_string(row, "Created By"),
            packaging_material: self.get_string(row, "Packaging materials"),
            handling_unit: self.get_string(row, "Handling Unit"),
            row_number,
        })
    }

    pub fn map_ship(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<ShipRecord> {
        Ok(ShipRecord {
            status: self.parse_status(row, "Status", row_number)?,
            carrier: self.get_string(row, "Carrier"),
            dest_bin: self.get_string(row, "Dest.Storage Bin"),
            row_number,
        })
    }

    // ==========================================
    // Column lookup helpers
    // ==========================================

    /// Extract a string field (None when absent/blank), trying the
    /// canonical column name and its known aliases.
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        // Known export column aliases
        let aliases: Vec<&str> = match key {
            "Generated delivery" => vec!["Generated delivery", "Delivery"],
            "Warehouse Order" => vec!["Warehouse Order", "Warehouse order"],
            "Created By" => vec!["Created By", "User"],
            "Handling Unit" => vec!["Handling Unit", "HU"],
            "Status" => vec!["Status", "Doc. Status"],
            "Carrier" => vec!["Carrier", "Forwarding Agent"],
            _ => vec![key],
        };

        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// Parse a quantity column.
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<f64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => DataCleaner::parse_quantity(&value).map(Some).map_err(|_| {
                ImportError::TypeConversionError {
                    row: row_number,
                    column: key.to_string(),
                    message: format!("cannot parse as number: {}", value),
                }
            }),
        }
    }

    /// Parse a status-code column (Excel may render codes as floats).
    fn parse_status(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<i32>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => DataCleaner::parse_status(&value).map(Some).ok_or_else(|| {
                ImportError::TypeConversionError {
                    row: row_number,
                    column: key.to_string(),
                    message: format!("cannot parse as status code: {}", value),
                }
            }),
        }
    }
}
