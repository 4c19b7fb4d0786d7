// ==========================================
// Warehouse Daily KPI - Pack Classifier
// ==========================================
// Responsibility: order de-duplication, Carton/Pallet split,
// handling-unit counts, per-operator pack breakdown
// Rule: stateless engine, all methods are pure functions
// ==========================================

use crate::config::KpiConfig;
use crate::domain::metrics::{OperatorPackStats, OrderPieces, PackagingSplit};
use crate::domain::records::{PackOrder, PackRecord};
use crate::domain::types::PackagingType;
use std::collections::{HashMap, HashSet};

pub struct PackClassifier;

impl Default for PackClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PackClassifier {
    pub fn new() -> Self {
        Self
    }

    /// De-duplicate pack rows by order id.
    ///
    /// First occurrence wins, including the operator-of-record and
    /// packaging material; rows without an order id carry no order
    /// and are skipped here (they still count toward handling units).
    pub fn dedup_orders(&self, rows: &[PackRecord]) -> Vec<PackOrder> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut orders: Vec<PackOrder> = Vec::new();

        for row in rows {
            let Some(order_id) = row.order_id.as_deref() else {
                continue;
            };
            if seen.insert(order_id.to_string()) {
                orders.push(PackOrder {
                    order_id: order_id.to_string(),
                    operator: row.operator.clone(),
                    packaging_material: row.packaging_material.clone(),
                });
            }
        }

        orders
    }

    /// Classify one de-duplicated order.
    ///
    /// Pallet when the normalized packaging material is in the
    /// configured pallet-code set; Carton otherwise, including
    /// orders with no packaging material at all.
    pub fn classify(&self, order: &PackOrder, config: &KpiConfig) -> PackagingType {
        match order.packaging_material.as_deref() {
            Some(material) if config.is_pallet_code(material) => PackagingType::Pallet,
            _ => PackagingType::Carton,
        }
    }

    /// Carton/Pallet split over de-duplicated orders.
    pub fn split(&self, orders: &[PackOrder], config: &KpiConfig) -> PackagingSplit {
        let mut split = PackagingSplit {
            carton_orders: 0,
            pallet_orders: 0,
        };
        for order in orders {
            match self.classify(order, config) {
                PackagingType::Carton => split.carton_orders += 1,
                PackagingType::Pallet => split.pallet_orders += 1,
            }
        }
        split
    }

    /// Distinct handling units across all rows (finer-grained than
    /// orders: one order may produce several packages).
    pub fn package_count(&self, rows: &[PackRecord]) -> usize {
        rows.iter()
            .filter_map(|r| r.handling_unit.as_deref())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Per-operator pack table.
    ///
    /// Keyed by operator-of-record of the joined (de-duplicated)
    /// orders; package counts come from the operator's raw rows.
    /// Sorted descending by order count, ties in first-seen order.
    pub fn operator_stats(
        &self,
        rows: &[PackRecord],
        joined: &[OrderPieces],
    ) -> Vec<OperatorPackStats> {
        // Distinct handling units per raw-row operator
        let mut hu_by_operator: HashMap<String, HashSet<String>> = HashMap::new();
        for row in rows {
            if let (Some(operator), Some(hu)) = (row.operator.as_deref(), row.handling_unit.as_deref())
            {
                hu_by_operator
                    .entry(operator.to_string())
                    .or_default()
                    .insert(hu.to_string());
            }
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut by_operator: Vec<OperatorPackStats> = Vec::new();

        for order in joined {
            let Some(operator) = order.operator.as_deref() else {
                continue;
            };
            let pos = *index.entry(operator.to_string()).or_insert_with(|| {
                by_operator.push(OperatorPackStats {
                    operator: operator.to_string(),
                    order_count: 0,
                    package_count: hu_by_operator
                        .get(operator)
                        .map(|set| set.len())
                        .unwrap_or(0),
                    pieces: 0.0,
                });
                by_operator.len() - 1
            });
            by_operator[pos].order_count += 1;
            by_operator[pos].pieces += order.pieces;
        }

        by_operator.sort_by(|a, b| b.order_count.cmp(&a.order_count));
        by_operator
    }
}
