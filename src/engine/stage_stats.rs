// ==========================================
// Warehouse Daily KPI - Per-Stage Aggregator
// ==========================================
// Responsibility: independent summary statistics per stage
// Rule: stateless engine, all methods are pure functions
// ==========================================
// Grouping preserves first-seen operator order, then a stable
// sort ranks by quantity; equal quantities therefore keep input
// order (implementation-defined tie-break).
// ==========================================

use crate::domain::metrics::{InboundStats, OperatorInboundStats, OperatorPickStats, PickStats};
use crate::domain::records::{InboundRecord, PickRecord};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

pub struct StageStatsEngine;

impl Default for StageStatsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StageStatsEngine {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // Inbound
    // ==========================================

    /// Inbound totals and per-operator breakdown.
    ///
    /// A missing quantity column contributes zero for every row.
    pub fn inbound_stats(&self, rows: &[InboundRecord]) -> InboundStats {
        let total_quantity: f64 = rows.iter().filter_map(|r| r.quantity).sum();

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut by_operator: Vec<OperatorInboundStats> = Vec::new();

        for row in rows {
            let Some(operator) = row.operator.as_deref() else {
                continue;
            };
            let pos = *index.entry(operator.to_string()).or_insert_with(|| {
                by_operator.push(OperatorInboundStats {
                    operator: operator.to_string(),
                    quantity: 0.0,
                    row_count: 0,
                });
                by_operator.len() - 1
            });
            by_operator[pos].quantity += row.quantity.unwrap_or(0.0);
            by_operator[pos].row_count += 1;
        }

        by_operator.sort_by(|a, b| {
            b.quantity
                .partial_cmp(&a.quantity)
                .unwrap_or(Ordering::Equal)
        });

        InboundStats {
            total_quantity,
            by_operator,
        }
    }

    // ==========================================
    // Pick
    // ==========================================

    /// Pick totals, distinct order count, per-operator breakdown.
    pub fn pick_stats(&self, rows: &[PickRecord]) -> PickStats {
        let total_quantity: f64 = rows.iter().filter_map(|r| r.quantity).sum();

        let order_count = rows
            .iter()
            .filter_map(|r| r.order_id.as_deref())
            .collect::<HashSet<_>>()
            .len();

        // Per-operator accumulator with distinct task/order sets
        struct Acc {
            quantity: f64,
            tasks: HashSet<String>,
            orders: HashSet<String>,
            row_count: usize,
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        let mut accs: Vec<Acc> = Vec::new();

        for row in rows {
            let Some(operator) = row.operator.as_deref() else {
                continue;
            };
            let pos = *index.entry(operator.to_string()).or_insert_with(|| {
                order.push(operator.to_string());
                accs.push(Acc {
                    quantity: 0.0,
                    tasks: HashSet::new(),
                    orders: HashSet::new(),
                    row_count: 0,
                });
                accs.len() - 1
            });
            let acc = &mut accs[pos];
            acc.quantity += row.quantity.unwrap_or(0.0);
            if let Some(task) = &row.task_id {
                acc.tasks.insert(task.clone());
            }
            if let Some(order_id) = &row.order_id {
                acc.orders.insert(order_id.clone());
            }
            acc.row_count += 1;
        }

        let mut by_operator: Vec<OperatorPickStats> = order
            .into_iter()
            .zip(accs)
            .map(|(operator, acc)| OperatorPickStats {
                operator,
                quantity: acc.quantity,
                task_count: acc.tasks.len(),
                order_count: acc.orders.len(),
                row_count: acc.row_count,
            })
            .collect();

        by_operator.sort_by(|a, b| {
            b.quantity
                .partial_cmp(&a.quantity)
                .unwrap_or(Ordering::Equal)
        });

        PickStats {
            total_quantity,
            order_count,
            by_operator,
        }
    }
}
