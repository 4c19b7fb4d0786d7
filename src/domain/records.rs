// ==========================================
// Warehouse Daily KPI - Raw Stage Records
// ==========================================
// One typed record per parsed export row. Every recognized
// field is optional: an export missing a column still loads,
// and the aggregation treats the absent field as zero/empty.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// InboundRecord - receiving row
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundRecord {
    pub quantity: Option<f64>,     // "Source actual qty."
    pub operator: Option<String>,  // "User"

    // Source row number (1-based, excluding header)
    pub row_number: usize,
}

// ==========================================
// PickRecord - picking row
// ==========================================
// An order may span multiple pick lines; the order id is the
// grouping key for per-order quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickRecord {
    pub quantity: Option<f64>,     // "Source actual qty."
    pub order_id: Option<String>,  // "Generated delivery"
    pub operator: Option<String>,  // "User"
    pub task_id: Option<String>,   // "Warehouse Order"

    pub row_number: usize,
}

// ==========================================
// PackRecord - packing row
// ==========================================
// An order may appear on multiple rows (one per carton / HU);
// order-level metrics de-duplicate by order id first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackRecord {
    pub order_id: Option<String>,           // "Generated delivery"
    pub operator: Option<String>,           // "Created By"
    pub packaging_material: Option<String>, // "Packaging materials"
    pub handling_unit: Option<String>,      // "Handling Unit"

    pub row_number: usize,
}

// ==========================================
// ShipRecord - dispatch row
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipRecord {
    pub status: Option<i32>,       // "Status" (50 = packed, 60 = closed)
    pub carrier: Option<String>,   // "Carrier"
    pub dest_bin: Option<String>,  // "Dest.Storage Bin"

    pub row_number: usize,
}

// ==========================================
// PackOrder - de-duplicated pack order
// ==========================================
// One entry per distinct order id; operator and packaging
// material come from the first row seen for that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackOrder {
    pub order_id: String,
    pub operator: Option<String>,
    pub packaging_material: Option<String>,
}

// ==========================================
// StageBatch - one upload batch
// ==========================================
// Computation is gated on all four stages being present;
// a partial batch is a precondition miss, not a fault.
#[derive(Debug, Clone, Default)]
pub struct StageBatch {
    pub inbound: Option<Vec<InboundRecord>>,
    pub pick: Option<Vec<PickRecord>>,
    pub pack: Option<Vec<PackRecord>>,
    pub ship: Option<Vec<ShipRecord>>,
}

impl StageBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// All four stage tables loaded?
    pub fn is_complete(&self) -> bool {
        self.inbound.is_some() && self.pick.is_some() && self.pack.is_some() && self.ship.is_some()
    }

    /// Number of stage tables loaded so far.
    pub fn loaded_count(&self) -> usize {
        [
            self.inbound.is_some(),
            self.pick.is_some(),
            self.pack.is_some(),
            self.ship.is_some(),
        ]
        .iter()
        .filter(|loaded| **loaded)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_completeness_gate() {
        let mut batch = StageBatch::new();
        assert!(!batch.is_complete());
        assert_eq!(batch.loaded_count(), 0);

        batch.inbound = Some(vec![]);
        batch.pick = Some(vec![]);
        batch.pack = Some(vec![]);
        assert!(!batch.is_complete());
        assert_eq!(batch.loaded_count(), 3);

        batch.ship = Some(vec![]);
        assert!(batch.is_complete());
    }
}
