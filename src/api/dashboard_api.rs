// ==========================================
// Warehouse Daily KPI - Dashboard API
// ==========================================
// Responsibility: the business interface the presentation layer
// talks to. Holds the current upload batch, gates computation on
// all four stages, and hands out the immutable overview plus the
// printable report.
// Architecture: API layer -> engine layer (stateless engines)
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::config::KpiConfig;
use crate::domain::metrics::MetricsSummary;
use crate::domain::records::StageBatch;
use crate::domain::types::StageKind;
use crate::engine::orchestrator::MetricsOrchestrator;
use crate::i18n::t;
use crate::importer::stage_loader::StageLoader;
use crate::report::daily_report::{format_pieces, DailyReport};

// ==========================================
// DailyOverview - computed batch result
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOverview {
    /// Upload batch id (fresh per computation).
    pub batch_id: Uuid,
    pub report_date: NaiveDate,
    pub metrics: MetricsSummary,
}

impl DailyOverview {
    /// JSON form for the presentation boundary.
    pub fn to_json(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One labeled summary value for the dashboard card row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

// ==========================================
// DashboardApi
// ==========================================
pub struct DashboardApi {
    config: KpiConfig,
    loader: StageLoader,
    orchestrator: MetricsOrchestrator,
    batch: StageBatch,
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApi {
    pub fn new() -> Self {
        Self::with_config(KpiConfig::default())
    }

    pub fn with_config(config: KpiConfig) -> Self {
        Self {
            config,
            loader: StageLoader::new(),
            orchestrator: MetricsOrchestrator::new(),
            batch: StageBatch::new(),
        }
    }

    // ==========================================
    // Batch loading
    // ==========================================

    /// Load one stage export into the current batch.
    ///
    /// Re-loading a stage replaces its table; the next compute
    /// runs from scratch over the updated batch.
    ///
    /// # Returns
    /// Number of data rows loaded.
    pub fn load_stage_file(&mut self, stage: StageKind, path: &Path) -> ApiResult<usize> {
        let rows = match stage {
            StageKind::Inbound => {
                let records = self.loader.load_inbound(path)?;
                let count = records.len();
                self.batch.inbound = Some(records);
                count
            }
            StageKind::Pick => {
                let records = self.loader.load_pick(path)?;
                let count = records.len();
                self.batch.pick = Some(records);
                count
            }
            StageKind::Pack => {
                let records = self.loader.load_pack(path)?;
                let count = records.len();
                self.batch.pack = Some(records);
                count
            }
            StageKind::Ship => {
                let records = self.loader.load_ship(path)?;
                let count = records.len();
                self.batch.ship = Some(records);
                count
            }
        };
        info!(stage = %stage, rows, "stage loaded into batch");
        Ok(rows)
    }

    /// Discard the current batch.
    pub fn clear_batch(&mut self) {
        self.batch = StageBatch::new();
    }

    pub fn loaded_stage_count(&self) -> usize {
        self.batch.loaded_count()
    }

    // ==========================================
    // Computation gate
    // ==========================================

    /// Compute the daily overview, or `Ok(None)` while any of the
    /// four stages is still missing (precondition, not a fault).
    pub fn try_compute(&self, report_date: NaiveDate) -> ApiResult<Option<DailyOverview>> {
        if !self.batch.is_complete() {
            return Ok(None);
        }

        // is_complete() checked every slot above
        let (Some(inbound), Some(pick), Some(pack), Some(ship)) = (
            self.batch.inbound.as_deref(),
            self.batch.pick.as_deref(),
            self.batch.pack.as_deref(),
            self.batch.ship.as_deref(),
        ) else {
            return Ok(None);
        };

        let metrics = self
            .orchestrator
            .compute(inbound, pick, pack, ship, &self.config);

        Ok(Some(DailyOverview {
            batch_id: Uuid::new_v4(),
            report_date,
            metrics,
        }))
    }

    // ==========================================
    // Presentation boundary
    // ==========================================

    /// Summary cards in the active locale.
    pub fn metric_cards(&self, overview: &DailyOverview) -> Vec<MetricCard> {
        let metrics = &overview.metrics;
        vec![
            MetricCard {
                label: t("metric.inbound_qty"),
                value: format_pieces(metrics.inbound.total_quantity),
            },
            MetricCard {
                label: t("metric.pick_qty"),
                value: format_pieces(metrics.pick.total_quantity),
            },
            MetricCard {
                label: t("metric.pick_orders"),
                value: metrics.pick.order_count.to_string(),
            },
            MetricCard {
                label: t("metric.pack_cartons"),
                value: metrics.pack.split.carton_orders.to_string(),
            },
            MetricCard {
                label: t("metric.pack_pallets"),
                value: metrics.pack.split.pallet_orders.to_string(),
            },
            MetricCard {
                label: t("metric.pack_pieces"),
                value: format_pieces(metrics.pack.pieces_packed),
            },
        ]
    }

    /// Printable report text for the overview.
    pub fn render_report(&self, overview: &DailyOverview, generated_at: DateTime<Utc>) -> String {
        DailyReport::render_text(&overview.metrics, overview.report_date, generated_at)
    }
}
