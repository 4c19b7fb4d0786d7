// ==========================================
// Warehouse Daily KPI - Metrics Orchestrator
// ==========================================
// Responsibility: compose the stateless engines into one batch
// computation: computeMetrics(fourTables) -> MetricsSummary.
// No retained state between invocations; identical inputs yield
// identical aggregates.
// ==========================================

use crate::config::KpiConfig;
use crate::domain::metrics::{MetricsSummary, PackStats};
use crate::domain::records::{InboundRecord, PackRecord, PickRecord, ShipRecord};
use crate::engine::carrier::CarrierEngine;
use crate::engine::pack_classifier::PackClassifier;
use crate::engine::reconciler::ReconcilerEngine;
use crate::engine::stage_stats::StageStatsEngine;
use tracing::debug;

pub struct MetricsOrchestrator {
    stage_stats: StageStatsEngine,
    pack_classifier: PackClassifier,
    reconciler: ReconcilerEngine,
    carrier: CarrierEngine,
}

impl Default for MetricsOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsOrchestrator {
    pub fn new() -> Self {
        Self {
            stage_stats: StageStatsEngine::new(),
            pack_classifier: PackClassifier::new(),
            reconciler: ReconcilerEngine::new(),
            carrier: CarrierEngine::new(),
        }
    }

    /// Compute the full metrics snapshot for one complete batch.
    pub fn compute(
        &self,
        inbound: &[InboundRecord],
        pick: &[PickRecord],
        pack: &[PackRecord],
        ship: &[ShipRecord],
        config: &KpiConfig,
    ) -> MetricsSummary {
        // 1. Independent per-stage statistics
        let inbound_stats = self.stage_stats.inbound_stats(inbound);
        let pick_stats = self.stage_stats.pick_stats(pick);

        // 2. Pack: de-duplicate orders, then reconcile pieces from pick
        let pack_orders = self.pack_classifier.dedup_orders(pack);
        let joined = self.reconciler.join_pack_orders(&pack_orders, pick);
        let pack_stats = PackStats {
            order_count: pack_orders.len(),
            package_count: self.pack_classifier.package_count(pack),
            pieces_packed: self.reconciler.pieces_total(&joined),
            split: self.pack_classifier.split(&pack_orders, config),
            by_operator: self.pack_classifier.operator_stats(pack, &joined),
            order_pieces: joined,
        };

        // 3. Dispatch groupings
        let dispatch = self.carrier.dispatch_stats(ship, config);

        debug!(
            inbound_qty = inbound_stats.total_quantity,
            pick_qty = pick_stats.total_quantity,
            pack_orders = pack_stats.order_count,
            carriers = dispatch.carrier_counts.len(),
            "batch metrics computed"
        );

        MetricsSummary {
            inbound: inbound_stats,
            pick: pick_stats,
            pack: pack_stats,
            dispatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_on_empty_batch() {
        let orchestrator = MetricsOrchestrator::new();
        let config = KpiConfig::default();
        let summary = orchestrator.compute(&[], &[], &[], &[], &config);

        assert_eq!(summary.inbound.total_quantity, 0.0);
        assert_eq!(summary.pick.order_count, 0);
        assert_eq!(summary.pack.split.carton_orders, 0);
        assert!(summary.dispatch.carrier_counts.is_empty());
    }

    #[test]
    fn test_compute_is_deterministic() {
        let orchestrator = MetricsOrchestrator::new();
        let config = KpiConfig::default();
        let pick = vec![PickRecord {
            quantity: Some(7.0),
            order_id: Some("D1".to_string()),
            operator: Some("NOVAK".to_string()),
            task_id: Some("WO1".to_string()),
            row_number: 1,
        }];
        let pack = vec![PackRecord {
            order_id: Some("D1".to_string()),
            operator: Some("KAREL".to_string()),
            packaging_material: Some("CARTON-16".to_string()),
            handling_unit: Some("HU1".to_string()),
            row_number: 1,
        }];

        let first = orchestrator.compute(&[], &pick, &pack, &[], &config);
        let second = orchestrator.compute(&[], &pick, &pack, &[], &config);
        assert_eq!(first, second);
        assert_eq!(first.pack.pieces_packed, 7.0);
        assert_eq!(first.pack.split.pallet_orders, 1);
    }
}
