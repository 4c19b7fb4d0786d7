// ==========================================
// Warehouse Daily KPI - Metrics Snapshot
// ==========================================
// MetricsSummary is an immutable derived snapshot: built fresh
// per upload batch once all four stage tables are present, never
// mutated afterwards, consumed by the presentation layer and the
// printable report.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Per-operator tables
// ==========================================

/// One row of the inbound per-operator table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorInboundStats {
    pub operator: String,
    pub quantity: f64,
    pub row_count: usize,
}

/// One row of the pick per-operator table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorPickStats {
    pub operator: String,
    pub quantity: f64,
    pub task_count: usize,  // distinct warehouse orders
    pub order_count: usize, // distinct deliveries
    pub row_count: usize,
}

/// One row of the pack per-operator table.
///
/// Order counts and pieces are per operator-of-record over
/// de-duplicated orders; package counts are distinct handling
/// units over that operator's raw rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorPackStats {
    pub operator: String,
    pub order_count: usize,
    pub package_count: usize,
    pub pieces: f64,
}

// ==========================================
// Stage summaries
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundStats {
    pub total_quantity: f64,
    pub by_operator: Vec<OperatorInboundStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickStats {
    pub total_quantity: f64,
    pub order_count: usize,
    pub by_operator: Vec<OperatorPickStats>,
}

/// Carton vs pallet split over de-duplicated orders.
///
/// Invariant: carton_orders + pallet_orders == distinct order count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingSplit {
    pub carton_orders: usize,
    pub pallet_orders: usize,
}

/// Joined pick quantity for one packed order.
///
/// pieces is 0.0 when the order has no matching pick rows; the
/// order itself is never dropped (outer-join semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPieces {
    pub order_id: String,
    pub operator: Option<String>,
    pub pieces: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackStats {
    pub order_count: usize,   // distinct order ids
    pub package_count: usize, // distinct handling units
    pub pieces_packed: f64,   // reconciled pick quantity over packed orders
    pub split: PackagingSplit,
    pub by_operator: Vec<OperatorPackStats>,
    pub order_pieces: Vec<OrderPieces>,
}

// ==========================================
// Dispatch tables
// ==========================================

/// Destination-bin frequency row (raw counts, unfiltered).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneCount {
    pub lane: String,
    pub count: usize,
}

/// Carrier row, counted over status-filtered dispatch rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierCount {
    pub carrier: String,
    pub count: usize,
}

/// Both dispatch groupings; each table is empty when its source
/// column is absent from the ship export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchStats {
    pub lane_counts: Vec<LaneCount>,
    pub carrier_counts: Vec<CarrierCount>,
}

// ==========================================
// MetricsSummary - full batch snapshot
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub inbound: InboundStats,
    pub pick: PickStats,
    pub pack: PackStats,
    pub dispatch: DispatchStats,
}
