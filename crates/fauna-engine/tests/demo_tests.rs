#![allow(clippy::unwrap_used, clippy::expect_used)]

use fauna_core::{Animal, Layout, MakeNoise};
use fauna_engine::{run_demo, Session};
use fauna_store::StoreConfig;
use tempfile::TempDir;

#[test]
fn test_demo_output_in_every_layout() {
    for layout in Layout::ALL {
        let mut session = Session::open(&StoreConfig::in_memory(layout)).unwrap();
        let report = run_demo(&mut session).unwrap();
        assert_eq!(report.layout, layout);

        let lines = report.lines();
        assert_eq!(lines.len(), 3, "layout {}", layout);

        let mut polymorphic = lines[..2].to_vec();
        polymorphic.sort();
        assert_eq!(
            polymorphic,
            vec![
                "Garfield making meow, meow... noises",
                "Max making woof, woof... noises"
            ]
        );
        assert_eq!(lines[2], "Max making woof, woof... noises");
    }
}

#[test]
fn test_demo_saves_cat_before_dog() {
    let mut session = Session::open(&StoreConfig::in_memory(Layout::TablePerClass)).unwrap();
    let report = run_demo(&mut session).unwrap();

    let saved: Vec<(String, Option<i64>)> = report
        .saved
        .iter()
        .map(|a| (a.describe(), a.id()))
        .collect();
    assert_eq!(
        saved,
        vec![
            ("Garfield making meow, meow... noises".to_string(), Some(1)),
            ("Max making woof, woof... noises".to_string(), Some(2)),
        ]
    );
}

#[test]
fn test_demo_report_serializes_with_species_tags() {
    let mut session = Session::open(&StoreConfig::in_memory(Layout::SingleTable)).unwrap();
    let report = run_demo(&mut session).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["layout"], "single_table");
    assert_eq!(json["saved"][0]["species"], "Cat");
    assert_eq!(json["saved"][0]["name"], "Garfield");
    assert_eq!(json["dogs"][0]["name"], "Max");
}

#[test]
fn test_file_database_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let config = StoreConfig::file(tmp.path().join("fauna.db"), Layout::Joined);

    let mut session = Session::open(&config).unwrap();
    run_demo(&mut session).unwrap();
    session.close().unwrap();

    let mut reopened = Session::open(&config).unwrap();
    let animals: Vec<Animal> = reopened
        .transaction("reload", |uow| uow.query_all())
        .unwrap();
    assert_eq!(animals.len(), 2);

    // A second run appends; nothing is updated in place
    let report = run_demo(&mut reopened).unwrap();
    assert_eq!(report.animals.len(), 4);
    assert_eq!(report.dogs.len(), 2);
}
