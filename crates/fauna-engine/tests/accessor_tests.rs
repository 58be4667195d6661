//! Save and query behaviour shared by every layout.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use fauna_core::errors::ExErrorKind;
use fauna_core::{Animal, Cat, Dog, Layout, MakeNoise, Species};
use fauna_engine::{EntityAccessor, Session};
use fauna_store::StoreConfig;
use std::collections::HashSet;

fn session(layout: Layout) -> Session {
    Session::open(&StoreConfig::in_memory(layout)).unwrap()
}

fn save_max_and_garfield(session: &mut Session) {
    session
        .transaction("seed", |uow| {
            uow.save(&mut Dog::named("Max").into())?;
            uow.save(&mut Cat::named("Garfield").into())?;
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_polymorphic_query_describes_each_subtype() {
    for layout in Layout::ALL {
        let mut session = session(layout);
        save_max_and_garfield(&mut session);

        let mut lines: Vec<String> = session
            .transaction("query", |uow| uow.query_all())
            .unwrap()
            .iter()
            .map(|animal| animal.describe())
            .collect();
        lines.sort();
        assert_eq!(
            lines,
            vec![
                "Garfield making meow, meow... noises".to_string(),
                "Max making woof, woof... noises".to_string(),
            ],
            "layout {}",
            layout
        );
    }
}

#[test]
fn test_polymorphic_query_yields_concrete_variants() {
    for layout in Layout::ALL {
        let mut session = session(layout);
        save_max_and_garfield(&mut session);

        let animals = session.transaction("query", |uow| uow.query_all()).unwrap();
        let species: HashSet<Species> = animals.iter().map(Animal::species).collect();
        assert_eq!(species, Species::ALL.into_iter().collect(), "layout {}", layout);
    }
}

#[test]
fn test_derived_query_returns_only_dogs() {
    for layout in Layout::ALL {
        let mut session = session(layout);
        save_max_and_garfield(&mut session);
        session
            .transaction("more", |uow| {
                uow.save(&mut Dog::named("Rex").into())?;
                uow.save(&mut Cat::named("Tom").into())
            })
            .unwrap();

        let mut names: Vec<String> = session
            .transaction("dogs", |uow| uow.query_by_subtype::<Dog>())
            .unwrap()
            .into_iter()
            .map(|dog| dog.name.unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Max", "Rex"], "layout {}", layout);
    }
}

#[test]
fn test_derived_query_on_empty_store() {
    for layout in Layout::ALL {
        let mut session = session(layout);
        let cats = session
            .transaction("cats", |uow| uow.query_by_subtype::<Cat>())
            .unwrap();
        assert!(cats.is_empty());
    }
}

#[test]
fn test_save_assigns_id_to_entity() {
    for layout in Layout::ALL {
        let mut session = session(layout);
        let mut dog: Animal = Dog::named("Max").into();
        assert!(!dog.is_persisted());

        let id = session.transaction("save", |uow| uow.save(&mut dog)).unwrap();
        assert_eq!(dog.id(), Some(id));
    }
}

#[test]
fn test_table_per_class_ids_unique_across_subtypes() {
    let mut session = session(Layout::TablePerClass);
    let ids = session
        .transaction("batch", |uow| {
            let mut batch: Vec<Animal> = vec![
                Cat::named("Garfield").into(),
                Dog::named("Max").into(),
                Cat::named("Tom").into(),
                Dog::named("Rex").into(),
            ];
            uow.save_all(&mut batch)
        })
        .unwrap();

    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());

    let stored: HashSet<_> = session
        .transaction("query", |uow| uow.query_all())
        .unwrap()
        .iter()
        .filter_map(Animal::id)
        .collect();
    assert_eq!(stored, unique);
}

#[test]
fn test_missing_name_rejected_before_write() {
    for layout in Layout::ALL {
        let mut session = session(layout);
        let mut nameless: Animal = Dog::new().into();

        let err = session
            .transaction("save", |uow| uow.save(&mut nameless))
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Validation);
        assert!(!nameless.is_persisted());
        let stored = session.transaction("query", |uow| uow.query_all()).unwrap();
        assert!(stored.is_empty(), "layout {}", layout);
    }
}

#[test]
fn test_describe_through_accessor() {
    assert_eq!(
        EntityAccessor::describe(&Cat::named("Garfield")),
        "Garfield making meow, meow... noises"
    );
    assert_eq!(EntityAccessor::describe(&Dog::new()), "null making woof, woof... noises");
}

#[test]
fn test_unknown_discriminator_surfaces_decode_error() {
    let mut session = session(Layout::SingleTable);
    session
        .connection()
        .execute(
            "INSERT INTO animal (dtype, name) VALUES ('Parrot', 'Polly')",
            [],
        )
        .unwrap();

    let err = session
        .transaction("query", |uow| uow.query_all())
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Decode);
}

#[test]
fn test_table_per_class_largest_explicit_id_fails_cleanly() {
    let mut session = session(Layout::TablePerClass);
    let mut dog: Animal = Dog {
        id: Some(i64::MAX),
        name: Some("Max".to_string()),
    }
    .into();

    let err = session
        .transaction("save", |uow| uow.save(&mut dog))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);

    let stored = session.transaction("query", |uow| uow.query_all()).unwrap();
    assert!(stored.is_empty());
}
