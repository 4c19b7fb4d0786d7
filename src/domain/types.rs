// ==========================================
// Warehouse Daily KPI - Domain Type Definitions
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Warehouse stage (Stage Kind)
// ==========================================
// The four daily exports, one per stage of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageKind {
    Inbound, // receiving
    Pick,    // order picking
    Pack,    // carton / pallet consolidation
    Ship,    // dispatch to carriers
}

impl StageKind {
    /// All four stages, in process order.
    pub const ALL: [StageKind; 4] = [
        StageKind::Inbound,
        StageKind::Pick,
        StageKind::Pack,
        StageKind::Ship,
    ];
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Inbound => write!(f, "INBOUND"),
            StageKind::Pick => write!(f, "PICK"),
            StageKind::Pack => write!(f, "PACK"),
            StageKind::Ship => write!(f, "SHIP"),
        }
    }
}

// ==========================================
// Packaging type (Carton vs Pallet)
// ==========================================
// Orders whose packaging material is in the configured pallet
// code set classify as Pallet, everything else as Carton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackagingType {
    Carton,
    Pallet,
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackagingType::Carton => write!(f, "CARTON"),
            PackagingType::Pallet => write!(f, "PALLET"),
        }
    }
}
