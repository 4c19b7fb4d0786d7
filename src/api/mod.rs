// ==========================================
// Warehouse Daily KPI - API Layer
// ==========================================
// Responsibility: business interface for the presentation layer
// ==========================================

pub mod dashboard_api;
pub mod error;

// Re-export core API types
pub use dashboard_api::{DailyOverview, DashboardApi, MetricCard};
pub use error::{ApiError, ApiResult};
