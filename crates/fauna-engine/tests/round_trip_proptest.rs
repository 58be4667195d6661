//! Property: whatever is saved comes back unchanged, in every layout.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use fauna_core::{Animal, Cat, Dog, Layout, Species};
use fauna_engine::Session;
use fauna_store::{strategy_for, MappingStrategy, StoreConfig};
use proptest::prelude::*;

fn species() -> impl Strategy<Value = Species> {
    prop_oneof![Just(Species::Dog), Just(Species::Cat)]
}

fn layout() -> impl Strategy<Value = Layout> {
    prop_oneof![
        Just(Layout::SingleTable),
        Just(Layout::Joined),
        Just(Layout::TablePerClass)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn saved_animals_round_trip(
        layout in layout(),
        entries in prop::collection::vec((species(), "\\PC{0,24}"), 1..6),
    ) {
        let mut session = Session::open(&StoreConfig::in_memory(layout)).unwrap();
        let mut saved: Vec<Animal> = entries
            .iter()
            .map(|(species, name)| match species {
                Species::Dog => Dog::named(name.clone()).into(),
                Species::Cat => Cat::named(name.clone()).into(),
            })
            .collect();

        session
            .transaction("save", |uow| uow.save_all(&mut saved))
            .unwrap();
        let mut loaded = session.transaction("query", |uow| uow.query_all()).unwrap();

        saved.sort_by_key(Animal::id);
        loaded.sort_by_key(Animal::id);
        prop_assert_eq!(loaded, saved);
    }

    #[test]
    fn encoded_rows_reconstruct(
        layout in layout(),
        species in species(),
        id in 1i64..1_000_000,
        name in proptest::option::of("\\PC{0,24}"),
    ) {
        let animal = Animal::from_parts(species, id, name);
        let row = strategy_for(layout).encode(&animal);
        prop_assert_eq!(row.reconstruct().unwrap(), animal);
    }
}
