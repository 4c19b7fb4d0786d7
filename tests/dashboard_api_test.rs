// ==========================================
// Dashboard API tests
// ==========================================

mod test_helpers;

use chrono::{NaiveDate, TimeZone, Utc};
use warehouse_kpi::domain::types::StageKind;
use warehouse_kpi::{DashboardApi, KpiConfig};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
}

#[test]
fn test_gate_requires_all_four_stages() {
    let fixture = test_helpers::create_batch_fixture().unwrap();
    let mut api = DashboardApi::new();

    // nothing loaded: no computation, no error
    assert!(api.try_compute(report_date()).unwrap().is_none());

    api.load_stage_file(StageKind::Inbound, fixture.inbound.path())
        .unwrap();
    api.load_stage_file(StageKind::Pick, fixture.pick.path())
        .unwrap();
    api.load_stage_file(StageKind::Pack, fixture.pack.path())
        .unwrap();
    assert_eq!(api.loaded_stage_count(), 3);
    assert!(api.try_compute(report_date()).unwrap().is_none());

    api.load_stage_file(StageKind::Ship, fixture.ship.path())
        .unwrap();
    let overview = api.try_compute(report_date()).unwrap().unwrap();
    assert_eq!(overview.metrics.inbound.total_quantity, 35.0);
    assert_eq!(overview.report_date, report_date());
}

#[test]
fn test_recompute_yields_identical_aggregates() {
    let fixture = test_helpers::create_batch_fixture().unwrap();
    let mut api = DashboardApi::new();
    for (stage, file) in [
        (StageKind::Inbound, &fixture.inbound),
        (StageKind::Pick, &fixture.pick),
        (StageKind::Pack, &fixture.pack),
        (StageKind::Ship, &fixture.ship),
    ] {
        api.load_stage_file(stage, file.path()).unwrap();
    }

    let first = api.try_compute(report_date()).unwrap().unwrap();
    let second = api.try_compute(report_date()).unwrap().unwrap();

    // aggregates identical; only the batch id differs
    assert_eq!(first.metrics, second.metrics);
    assert_ne!(first.batch_id, second.batch_id);
}

#[test]
fn test_malformed_file_surfaces_single_error() {
    let bad = test_helpers::create_stage_csv(
        "Generated delivery,Source actual qty.",
        &["D1,not-a-number"],
    )
    .unwrap();

    let mut api = DashboardApi::new();
    let err = api
        .load_stage_file(StageKind::Pick, bad.path())
        .unwrap_err();

    let msg = err.user_message();
    assert!(msg.contains("not-a-number"));
}

#[test]
fn test_reloading_a_stage_replaces_it() {
    let fixture = test_helpers::create_batch_fixture().unwrap();
    let smaller = test_helpers::create_stage_csv("Source actual qty.,User", &["1,NOVAK"]).unwrap();

    let mut api = DashboardApi::new();
    for (stage, file) in [
        (StageKind::Inbound, &fixture.inbound),
        (StageKind::Pick, &fixture.pick),
        (StageKind::Pack, &fixture.pack),
        (StageKind::Ship, &fixture.ship),
    ] {
        api.load_stage_file(stage, file.path()).unwrap();
    }
    api.load_stage_file(StageKind::Inbound, smaller.path())
        .unwrap();

    let overview = api.try_compute(report_date()).unwrap().unwrap();
    assert_eq!(overview.metrics.inbound.total_quantity, 1.0);
}

#[test]
fn test_clear_batch_resets_gate() {
    let fixture = test_helpers::create_batch_fixture().unwrap();
    let mut api = DashboardApi::new();
    for (stage, file) in [
        (StageKind::Inbound, &fixture.inbound),
        (StageKind::Pick, &fixture.pick),
        (StageKind::Pack, &fixture.pack),
        (StageKind::Ship, &fixture.ship),
    ] {
        api.load_stage_file(stage, file.path()).unwrap();
    }

    api.clear_batch();
    assert_eq!(api.loaded_stage_count(), 0);
    assert!(api.try_compute(report_date()).unwrap().is_none());
}

#[test]
fn test_metric_cards_and_json_boundary() {
    let fixture = test_helpers::create_batch_fixture().unwrap();
    let mut api = DashboardApi::new();
    for (stage, file) in [
        (StageKind::Inbound, &fixture.inbound),
        (StageKind::Pick, &fixture.pick),
        (StageKind::Pack, &fixture.pack),
        (StageKind::Ship, &fixture.ship),
    ] {
        api.load_stage_file(stage, file.path()).unwrap();
    }
    let overview = api.try_compute(report_date()).unwrap().unwrap();

    let cards = api.metric_cards(&overview);
    assert_eq!(cards.len(), 6);
    assert!(cards.iter().any(|c| c.value == "35"));

    let json = overview.to_json().unwrap();
    assert!(json.contains("\"metrics\""));
}

#[test]
fn test_custom_config_changes_classification() {
    let fixture = test_helpers::create_batch_fixture().unwrap();
    let config = KpiConfig {
        pallet_codes: vec!["CARTON-01".to_string()],
        ..KpiConfig::default()
    };
    let mut api = DashboardApi::with_config(config);
    for (stage, file) in [
        (StageKind::Inbound, &fixture.inbound),
        (StageKind::Pick, &fixture.pick),
        (StageKind::Pack, &fixture.pack),
        (StageKind::Ship, &fixture.ship),
    ] {
        api.load_stage_file(stage, file.path()).unwrap();
    }
    let overview = api.try_compute(report_date()).unwrap().unwrap();

    // D2 (CARTON-01) is the only pallet order now
    assert_eq!(overview.metrics.pack.split.pallet_orders, 1);
    assert_eq!(overview.metrics.pack.split.carton_orders, 2);
}

#[test]
fn test_report_render_through_api() {
    let fixture = test_helpers::create_batch_fixture().unwrap();
    let mut api = DashboardApi::new();
    for (stage, file) in [
        (StageKind::Inbound, &fixture.inbound),
        (StageKind::Pick, &fixture.pick),
        (StageKind::Pack, &fixture.pack),
        (StageKind::Ship, &fixture.ship),
    ] {
        api.load_stage_file(stage, file.path()).unwrap();
    }
    let overview = api.try_compute(report_date()).unwrap().unwrap();

    let generated = Utc.with_ymd_and_hms(2026, 7, 1, 18, 0, 0).unwrap();
    let report = api.render_report(&overview, generated);

    assert!(report.is_ascii());
    assert!(report.contains("01.07.2026"));
    assert!(report.contains("ACME: 2"));
}
