// ==========================================
// Test helpers
// ==========================================
// Responsibility: CSV stage-export fixtures for integration tests
// ==========================================

use std::error::Error;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// Write a CSV stage export to a temp file (kept alive by the
/// returned handle).
pub fn create_stage_csv(header: &str, rows: &[&str]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = Builder::new().suffix(".csv").tempfile()?;
    writeln!(temp_file, "{}", header)?;
    for row in rows {
        writeln!(temp_file, "{}", row)?;
    }
    temp_file.flush()?;
    Ok(temp_file)
}

/// The four-stage fixture used across the end-to-end tests;
/// numbers match the worked examples in the project docs.
pub struct BatchFixture {
    pub inbound: NamedTempFile,
    pub pick: NamedTempFile,
    pub pack: NamedTempFile,
    pub ship: NamedTempFile,
}

pub fn create_batch_fixture() -> Result<BatchFixture, Box<dyn Error>> {
    let inbound = create_stage_csv(
        "Source actual qty.,User",
        &["10,NOVAK", "20,SVOBODA", "5,NOVAK"],
    )?;

    let pick = create_stage_csv(
        "Generated delivery,Source actual qty.,User,Warehouse Order",
        &["D1,3,NOVAK,WO1", "D1,4,NOVAK,WO2", "D2,10,SVOBODA,WO3"],
    )?;

    // D1 spans two handling units; D9 has no pick match
    let pack = create_stage_csv(
        "Generated delivery,Created By,Packaging materials,Handling Unit",
        &[
            "D1,KAREL,CARTON-16,HU1",
            "D1,KAREL,CARTON-16,HU2",
            "D2,PETR,CARTON-01,HU3",
            "D9,PETR,CARTON-02,HU4",
        ],
    )?;

    let ship = create_stage_csv(
        "Status,Carrier,Dest.Storage Bin",
        &[
            "50,ACME,LANE01",
            "60,ACME,LANE01",
            "30,ACME,LANE02",
            "50,DHL,LANE02",
        ],
    )?;

    Ok(BatchFixture {
        inbound,
        pick,
        pack,
        ship,
    })
}
