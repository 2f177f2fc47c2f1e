// tests/end_to_end.rs
use std::fs;
use std::io::Write;
use std::sync::Arc;

use car_compare::compare::compare;
use car_compare::data::loader::{self, DEFAULT_DELIMITER};
use car_compare::error::DataLoadError;
use car_compare::export::{self, UTF8_BOM};
use car_compare::session::SelectionSession;

const FIXTURE: &str = "\
make;model;year;engine_displacement;fuel_type;transmission;combined_mpg_for_fuel_type1;annual_fuel_cost_for_fuel_type1
Ford;Bronco 4WD;2021;2.7;Gasoline;Automatic;20;1800
Honda;Accord;2018;1.5;Gasoline;Automatic;35;1000
Chevrolet;S10 Pickup;1995;4.3;Gasoline;Automatic;17;2100
";

fn write_fixture(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(body.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn three_picks_compare_and_export() {
    let fixture = write_fixture(FIXTURE);
    let catalog = loader::load(fixture.path(), DEFAULT_DELIMITER).unwrap();
    assert_eq!(catalog.len(), 3);

    let mut session = SelectionSession::new(Arc::new(catalog)).unwrap();
    let picks = [
        ("Ford", "Bronco 4WD", 2021),
        ("Honda", "Accord", 2018),
        ("Chevrolet", "S10 Pickup", 1995),
    ];
    for (i, (brand, model, year)) in picks.iter().enumerate() {
        session.set_brand(i, brand).unwrap();
        session.set_model(i, model).unwrap();
        session.set_year(i, *year).unwrap();
    }

    let [a, b, c] = session.current_vehicles().unwrap();
    let result = compare(a, b, c);
    assert_eq!(result.best_index, 1);
    assert_eq!(result.best().model, "Accord");
    assert_eq!(result.best().combined_mpg, 35.0);

    let bytes = export::encode(&result).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));
    let text = std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "브랜드,모델명,연식,배기량 (L),연료,변속기,복합연비 (mpg),연간 연료비 (USD)",
            "Ford,Bronco 4WD,2021,2.7,Gasoline,Automatic,20,1800",
            "Honda,Accord,2018,1.5,Gasoline,Automatic,35,1000",
            "Chevrolet,S10 Pickup,1995,4.3,Gasoline,Automatic,17,2100",
        ]
    );
}

#[test]
fn export_parses_back_as_a_table() {
    let fixture = write_fixture(FIXTURE);
    let catalog = loader::load(fixture.path(), DEFAULT_DELIMITER).unwrap();
    let records = catalog.records();
    let result = compare(&records[2], &records[0], &records[1]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export::DEFAULT_EXPORT_FILE);
    export::write_to_path(&result, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let mut reader = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let expected: Vec<&str> = result.attributes().iter().map(|a| a.label()).collect();
    assert_eq!(headers, expected);

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(rows.len(), 3);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row, &result.row(i));
    }
    assert_eq!(rows[0][0], "Chevrolet");
}

#[test]
fn whole_litre_displacement_exports_with_decimal() {
    let fixture = write_fixture(&FIXTURE.replace("Accord;2018;1.5", "Accord;2018;2.0"));
    let catalog = loader::load(fixture.path(), DEFAULT_DELIMITER).unwrap();
    let records = catalog.records();
    let result = compare(&records[1], &records[0], &records[2]);

    let bytes = export::encode(&result).unwrap();
    let text = std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap();
    assert_eq!(
        text.lines().nth(1),
        Some("Honda,Accord,2018,2.0,Gasoline,Automatic,35,1000")
    );
    assert_eq!(
        text.lines().nth(2),
        Some("Ford,Bronco 4WD,2021,2.7,Gasoline,Automatic,20,1800")
    );
}

#[test]
fn missing_year_column_fails_to_load() {
    let fixture = write_fixture(
        "make;model;engine_displacement;fuel_type;transmission;combined_mpg_for_fuel_type1;annual_fuel_cost_for_fuel_type1\n\
Ford;Bronco 4WD;2.7;Gasoline;Automatic;20;1800\n",
    );
    match loader::load(fixture.path(), DEFAULT_DELIMITER) {
        Err(DataLoadError::MissingColumn { column }) => assert_eq!(column, "year"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn comma_delimited_source_loads_with_matching_delimiter() {
    let fixture = write_fixture(&FIXTURE.replace(';', ","));
    let catalog = loader::load(fixture.path(), b',').unwrap();
    assert_eq!(catalog.brands(), ["Ford", "Honda", "Chevrolet"]);

    // The default ';' sees a single unknown column.
    assert!(matches!(
        loader::load(fixture.path(), DEFAULT_DELIMITER),
        Err(DataLoadError::MissingColumn { .. })
    ));
}
