// ==========================================
// Warehouse Daily KPI - Core Library
// ==========================================
// Scope: four-stage warehouse throughput metrics
// (inbound / pick / pack / ship) over daily SAP exports
// Positioning: decision-support core, presentation-agnostic
// ==========================================

// Initialize internationalization (Czech UI strings, English fallback)
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Import layer - external stage exports
pub mod importer;

// Engine layer - aggregation rules
pub mod engine;

// Config layer - batch computation settings
pub mod config;

// Report layer - printable daily summary
pub mod report;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// API layer - business interface
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{PackagingType, StageKind};

// Domain entities
pub use domain::{
    CarrierCount, DispatchStats, InboundRecord, InboundStats, LaneCount, MetricsSummary,
    OperatorInboundStats, OperatorPackStats, OperatorPickStats, OrderPieces, PackOrder,
    PackRecord, PackStats, PackagingSplit, PickRecord, PickStats, ShipRecord, StageBatch,
};

// Engines
pub use engine::{
    CarrierEngine, MetricsOrchestrator, PackClassifier, ReconcilerEngine, StageStatsEngine,
};

// Importer
pub use importer::{ImportError, ImportResult, StageLoader};

// Config
pub use config::KpiConfig;

// Report
pub use report::DailyReport;

// API
pub use api::{ApiError, ApiResult, DailyOverview, DashboardApi, MetricCard};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Skladové KPI";
