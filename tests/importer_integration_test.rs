// ==========================================
// Stage Loader integration tests
// ==========================================

mod test_helpers;

use test_helpers::create_stage_csv;
use warehouse_kpi::importer::StageLoader;
use warehouse_kpi::logging;

#[test]
fn test_load_all_four_stage_files() {
    logging::init_test();
    let fixture = test_helpers::create_batch_fixture().unwrap();
    let loader = StageLoader::new();

    let inbound = loader.load_inbound(fixture.inbound.path()).unwrap();
    let pick = loader.load_pick(fixture.pick.path()).unwrap();
    let pack = loader.load_pack(fixture.pack.path()).unwrap();
    let ship = loader.load_ship(fixture.ship.path()).unwrap();

    assert_eq!(inbound.len(), 3);
    assert_eq!(pick.len(), 3);
    assert_eq!(pack.len(), 4);
    assert_eq!(ship.len(), 4);

    assert_eq!(inbound[0].quantity, Some(10.0));
    assert_eq!(pick[2].order_id, Some("D2".to_string()));
    assert_eq!(pack[3].handling_unit, Some("HU4".to_string()));
    assert_eq!(ship[1].status, Some(60));
}

#[test]
fn test_unrecognized_columns_are_ignored() {
    let file = create_stage_csv(
        "Source actual qty.,User,Movement type,Warehouse",
        &["5,NOVAK,601,W01"],
    )
    .unwrap();

    let loader = StageLoader::new();
    let records = loader.load_inbound(file.path()).unwrap();
    assert_eq!(records[0].quantity, Some(5.0));
}

#[test]
fn test_missing_recognized_column_degrades_to_none() {
    // no "Source actual qty." anywhere: loads fine, quantities absent
    let file = create_stage_csv("User,Movement type", &["NOVAK,601", "SVOBODA,601"]).unwrap();

    let loader = StageLoader::new();
    let records = loader.load_inbound(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.quantity.is_none()));
}

#[test]
fn test_malformed_quantity_aborts_load() {
    let file = create_stage_csv(
        "Generated delivery,Source actual qty.",
        &["D1,3", "D2,garbage"],
    )
    .unwrap();

    let loader = StageLoader::new();
    let err = loader.load_pick(file.path()).unwrap_err();
    assert!(err.to_string().contains("garbage"));
}

#[test]
fn test_czech_number_formats() {
    let file = create_stage_csv(
        "Source actual qty.,User",
        &["\"1 234,5\",NOVAK", "\"2,5\",SVOBODA"],
    )
    .unwrap();

    let loader = StageLoader::new();
    let records = loader.load_inbound(file.path()).unwrap();
    assert_eq!(records[0].quantity, Some(1234.5));
    assert_eq!(records[1].quantity, Some(2.5));
}
