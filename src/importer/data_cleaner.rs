// ==========================================
// Warehouse Daily KPI - Data Cleaner
// ==========================================
// Responsibility: TRIM / UPPER / NULL normalization and
// tolerant numeric parsing for Czech SAP exports
// ==========================================

pub struct DataCleaner;

impl DataCleaner {
    /// TRIM, optionally UPPER.
    pub fn clean_text(value: &str, uppercase: bool) -> String {
        let trimmed = value.trim();
        if uppercase {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        }
    }

    /// Empty / whitespace-only strings become None.
    pub fn normalize_null(value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// Parse a quantity cell.
    ///
    /// Czech SAP exports use grouping spaces and a decimal comma
    /// ("1 234,5"); Excel round-trips may emit plain floats. Both
    /// forms normalize to standard decimal notation before parsing.
    pub fn parse_quantity(value: &str) -> Result<f64, std::num::ParseFloatError> {
        let mut normalized: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
            .collect();
        if !normalized.contains('.') {
            normalized = normalized.replace(',', ".");
        } else {
            // dot already the decimal separator; commas are grouping
            normalized = normalized.replace(',', "");
        }
        normalized.parse::<f64>()
    }

    /// Parse a status-code cell.
    ///
    /// Excel stores codes as floats, so "50.0" must read as 50.
    pub fn parse_status(value: &str) -> Option<i32> {
        Self::parse_quantity(value).ok().map(|v| v as i32)
    }
}
