// ==========================================
// Warehouse Daily KPI - Cross-Stage Reconciler
// ==========================================
// Pick and pack exports each answer a different question
// (quantity vs packaging); "pieces packed" exists in neither
// table alone and requires a join on the shared order id.
// ==========================================
// Guarantees:
// - a pack order with no pick match is kept with 0 pieces
// - pick quantity is never fabricated for orders absent from pack
// - join is many(pick rows)-to-one(de-duplicated pack order)
// ==========================================

use crate::domain::metrics::OrderPieces;
use crate::domain::records::{PackOrder, PickRecord};
use std::collections::HashMap;

pub struct ReconcilerEngine;

impl Default for ReconcilerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconcilerEngine {
    pub fn new() -> Self {
        Self
    }

    /// Group pick rows by order id, summing quantity.
    ///
    /// Returns pairs in first-seen order; rows without an order id
    /// cannot be attributed and are skipped.
    pub fn per_order_pieces(&self, pick: &[PickRecord]) -> Vec<(String, f64)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut orders: Vec<(String, f64)> = Vec::new();

        for row in pick {
            let Some(order_id) = row.order_id.as_deref() else {
                continue;
            };
            let pos = *index.entry(order_id.to_string()).or_insert_with(|| {
                orders.push((order_id.to_string(), 0.0));
                orders.len() - 1
            });
            orders[pos].1 += row.quantity.unwrap_or(0.0);
        }

        orders
    }

    /// Left-join de-duplicated pack orders against the per-order
    /// piece table. Unmatched pack orders contribute 0.0 pieces.
    pub fn join_pack_orders(
        &self,
        pack_orders: &[PackOrder],
        pick: &[PickRecord],
    ) -> Vec<OrderPieces> {
        let pieces: HashMap<String, f64> = self.per_order_pieces(pick).into_iter().collect();

        pack_orders
            .iter()
            .map(|order| OrderPieces {
                order_id: order.order_id.clone(),
                operator: order.operator.clone(),
                pieces: pieces.get(&order.order_id).copied().unwrap_or(0.0),
            })
            .collect()
    }

    /// Global pieces-packed total over the joined table.
    pub fn pieces_total(&self, joined: &[OrderPieces]) -> f64 {
        joined.iter().map(|o| o.pieces).sum()
    }
}
