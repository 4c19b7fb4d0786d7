// ==========================================
// Warehouse Daily KPI - Carrier/Lane Classifier
// ==========================================
// Two dispatch groupings over the ship export:
// - lane table: raw frequency of destination bins, unfiltered
// - carrier table: rows with status 50/60 only, grouped by carrier
// Each table is empty when its source column is absent.
// ==========================================

use crate::config::KpiConfig;
use crate::domain::metrics::{CarrierCount, DispatchStats, LaneCount};
use crate::domain::records::ShipRecord;
use std::collections::HashMap;

pub struct CarrierEngine;

impl Default for CarrierEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CarrierEngine {
    pub fn new() -> Self {
        Self
    }

    /// Destination-bin frequency table (raw value counts).
    pub fn lane_counts(&self, rows: &[ShipRecord]) -> Vec<LaneCount> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut lanes: Vec<LaneCount> = Vec::new();

        for row in rows {
            let Some(lane) = row.dest_bin.as_deref() else {
                continue;
            };
            let pos = *index.entry(lane.to_string()).or_insert_with(|| {
                lanes.push(LaneCount {
                    lane: lane.to_string(),
                    count: 0,
                });
                lanes.len() - 1
            });
            lanes[pos].count += 1;
        }

        lanes.sort_by(|a, b| b.count.cmp(&a.count));
        lanes
    }

    /// Carrier table over dispatched rows only.
    ///
    /// Rows whose status is outside the configured set are excluded
    /// entirely (expected filtering, not an error); rows without a
    /// carrier have no grouping key and are likewise skipped.
    pub fn carrier_counts(&self, rows: &[ShipRecord], config: &KpiConfig) -> Vec<CarrierCount> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut carriers: Vec<CarrierCount> = Vec::new();

        for row in rows {
            let Some(status) = row.status else {
                continue;
            };
            if !config.is_dispatched_status(status) {
                continue;
            }
            let Some(carrier) = row.carrier.as_deref() else {
                continue;
            };
            let pos = *index.entry(carrier.to_string()).or_insert_with(|| {
                carriers.push(CarrierCount {
                    carrier: carrier.to_string(),
                    count: 0,
                });
                carriers.len() - 1
            });
            carriers[pos].count += 1;
        }

        carriers.sort_by(|a, b| b.count.cmp(&a.count));
        carriers
    }

    pub fn dispatch_stats(&self, rows: &[ShipRecord], config: &KpiConfig) -> DispatchStats {
        DispatchStats {
            lane_counts: self.lane_counts(rows),
            carrier_counts: self.carrier_counts(rows, config),
        }
    }
}
