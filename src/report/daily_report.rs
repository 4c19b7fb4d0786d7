// ==========================================
// Warehouse Daily KPI - Printable Daily Report
// ==========================================
// Flattened one-page text document for e-mail/print. Section
// order is fixed: header with date -> total volumes -> packing ->
// carrier breakdown -> generation timestamp footer.
// ==========================================
// The rendering backend's default font cannot encode diacritics,
// so every line goes through the ASCII transliteration; labels
// are always resolved in the Czech locale, matching the original
// report regardless of the UI language.
// ==========================================

use crate::domain::metrics::MetricsSummary;
use crate::i18n::{t_in, t_in_with_args};
use crate::report::transliterate::to_ascii;
use chrono::{DateTime, NaiveDate, Utc};

const REPORT_LOCALE: &str = "cs";

pub struct DailyReport;

impl DailyReport {
    /// Render the report as ordered plain-text lines.
    ///
    /// `generated_at` is supplied by the caller so that rendering
    /// stays a pure function of its inputs.
    pub fn render_lines(
        metrics: &MetricsSummary,
        report_date: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        // Header
        lines.push(t_in_with_args(
            REPORT_LOCALE,
            "report.title",
            &[("date", &report_date.format("%d.%m.%Y").to_string())],
        ));
        lines.push(String::new());

        // Total volumes (pieces)
        lines.push(t_in(REPORT_LOCALE, "report.totals_header"));
        lines.push(t_in_with_args(
            REPORT_LOCALE,
            "report.inbound_line",
            &[("qty", &format_pieces(metrics.inbound.total_quantity))],
        ));
        lines.push(t_in_with_args(
            REPORT_LOCALE,
            "report.pick_line",
            &[("qty", &format_pieces(metrics.pick.total_quantity))],
        ));
        lines.push(String::new());

        // Packing and dispatch
        lines.push(t_in(REPORT_LOCALE, "report.pack_header"));
        lines.push(t_in_with_args(
            REPORT_LOCALE,
            "report.cartons_line",
            &[("count", &metrics.pack.split.carton_orders.to_string())],
        ));
        lines.push(t_in_with_args(
            REPORT_LOCALE,
            "report.pallets_line",
            &[("count", &metrics.pack.split.pallet_orders.to_string())],
        ));
        lines.push(t_in_with_args(
            REPORT_LOCALE,
            "report.pieces_line",
            &[("count", &format_pieces(metrics.pack.pieces_packed))],
        ));
        lines.push(String::new());

        // Carrier breakdown: the status-filtered carrier table when
        // the ship export carries statuses, the raw lane table otherwise
        lines.push(t_in(REPORT_LOCALE, "report.lanes_header"));
        if !metrics.dispatch.carrier_counts.is_empty() {
            for row in &metrics.dispatch.carrier_counts {
                lines.push(t_in_with_args(
                    REPORT_LOCALE,
                    "report.lane_line",
                    &[("lane", &row.carrier), ("count", &row.count.to_string())],
                ));
            }
        } else {
            for row in &metrics.dispatch.lane_counts {
                lines.push(t_in_with_args(
                    REPORT_LOCALE,
                    "report.lane_line",
                    &[("lane", &row.lane), ("count", &row.count.to_string())],
                ));
            }
        }
        lines.push(String::new());

        // Footer
        lines.push(t_in_with_args(
            REPORT_LOCALE,
            "report.footer",
            &[(
                "timestamp",
                &generated_at.format("%Y-%m-%d %H:%M").to_string(),
            )],
        ));

        lines.iter().map(|line| to_ascii(line)).collect()
    }

    /// Render the report as one printable text block.
    pub fn render_text(
        metrics: &MetricsSummary,
        report_date: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> String {
        Self::render_lines(metrics, report_date, generated_at).join("\n")
    }
}

/// Quantities print as whole pieces with thousands separators
/// (truncating, matching the original report).
pub(crate) fn format_pieces(quantity: f64) -> String {
    group_thousands(quantity as i64)
}

pub(crate) fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
