// ==========================================
// Warehouse Daily KPI - Config Layer
// ==========================================
// Responsibility: batch computation settings
// Nothing is persisted; construct programmatically per batch
// ==========================================

pub mod kpi_config;

pub use kpi_config::KpiConfig;
