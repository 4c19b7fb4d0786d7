// ==========================================
// Warehouse Daily KPI - Computation Settings
// ==========================================

use serde::{Deserialize, Serialize};

/// Settings applied to one batch computation.
///
/// Defaults match the production warehouse: pallet-building
/// carton codes CARTON-16/17/18, dispatch statuses 50 (packed)
/// and 60 (closed), Top-10 ranked tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiConfig {
    /// Packaging-material codes classified as "Pallet".
    /// Compared after TRIM + UPPER normalization.
    pub pallet_codes: Vec<String>,

    /// Ship status codes counted toward carrier metrics.
    pub dispatched_statuses: Vec<i32>,

    /// Row limit for ranked presentation tables.
    pub top_n: usize,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            pallet_codes: vec![
                "CARTON-16".to_string(),
                "CARTON-17".to_string(),
                "CARTON-18".to_string(),
            ],
            dispatched_statuses: vec![50, 60],
            top_n: 10,
        }
    }
}

impl KpiConfig {
    /// Normalized pallet-code membership test.
    pub fn is_pallet_code(&self, packaging_material: &str) -> bool {
        let normalized = packaging_material.trim().to_uppercase();
        self.pallet_codes.iter().any(|code| code == &normalized)
    }

    /// Does this status count toward carrier metrics?
    pub fn is_dispatched_status(&self, status: i32) -> bool {
        self.dispatched_statuses.contains(&status)
    }
}
