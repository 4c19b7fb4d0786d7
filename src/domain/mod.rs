// ==========================================
// Warehouse Daily KPI - Domain Layer
// ==========================================
// Responsibility: domain entities, types, derived snapshots
// Rule: no file access, no aggregation logic
// ==========================================

pub mod metrics;
pub mod records;
pub mod types;

// Re-export core types
pub use metrics::{
    CarrierCount, DispatchStats, InboundStats, LaneCount, MetricsSummary, OperatorInboundStats,
    OperatorPackStats, OperatorPickStats, OrderPieces, PackStats, PackagingSplit, PickStats,
};
pub use records::{InboundRecord, PackOrder, PackRecord, PickRecord, ShipRecord, StageBatch};
pub use types::{PackagingType, StageKind};
