// tests/query_facets.rs
use sorteos::csv::parse;
use sorteos::facets;
use sorteos::query;
use sorteos::record::Record;
use sorteos::store::RecordStore;

const FEED: &str = "\
categoria,loteria,horario,numero,animal
animalitos,LOTTO ACTIVO,9:00 AM,20,Cerdo
loteria,TRIPLE ZAMORANO,10:00 AM,775,
animalitos,LA GRANJITA,9:00 AM,05,León
animalitos,LOTTO ACTIVO,10:00 AM,31,Lapa
loteria,ÁGUILA,11:00 AM,101,
animalitos,EL GUACHARITO,9:00 AM,11,Gato
granjita,OTRA,9:00 AM,1,Gallo
";

fn store() -> RecordStore {
    let mut s = RecordStore::new();
    s.set_all(parse(FEED));
    s
}

#[test]
fn category_partition_is_disjoint_and_complete() {
    let s = store();
    let lot = s.category_indices("loteria");
    let ani = s.category_indices("animalitos");
    assert!(lot.iter().all(|i| !ani.contains(i)));

    let mut union: Vec<usize> = lot.iter().chain(ani.iter()).copied().collect();
    union.sort_unstable();
    let expected: Vec<usize> = s
        .all()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.category == "loteria" || r.category == "animalitos")
        .map(|(i, _)| i)
        .collect();
    assert_eq!(union, expected);
}

#[test]
fn facets_are_distinct_sorted_and_accent_aware() {
    let s = store();
    assert_eq!(
        facets::derive(s.for_category("animalitos")),
        vec!["EL GUACHARITO", "LA GRANJITA", "LOTTO ACTIVO"]
    );
    assert_eq!(facets::derive(s.for_category("loteria")), vec!["ÁGUILA", "TRIPLE ZAMORANO"]);
}

#[test]
fn facets_skip_empty_lottery_and_handle_empty_input() {
    let no_records: Vec<Record> = Vec::new();
    assert!(facets::derive(&no_records).is_empty());

    let blank = parse("loteria,numero\n,1\n,2");
    assert!(facets::derive(&blank).is_empty());
}

#[test]
fn no_filters_returns_subset_unchanged() {
    let s = store();
    let subset = s.for_category("animalitos");
    let out = query::apply(&subset, "", "");
    assert_eq!(out, subset);
}

#[test]
fn lottery_filter_is_exact_and_keeps_order() {
    let s = store();
    let subset = s.for_category("animalitos");
    let out = query::apply(&subset, "LOTTO ACTIVO", "");
    let animals: Vec<&str> = out.iter().map(|r| r.animal.as_str()).collect();
    assert_eq!(animals, vec!["Cerdo", "Lapa"]);

    assert!(query::apply(&subset, "lotto activo", "").is_empty());
}

#[test]
fn search_is_case_insensitive_substring_over_all_fields() {
    let s = store();
    let subset = s.for_category("animalitos");

    assert_eq!(query::apply(&subset, "", "cerdo").len(), 1);
    assert_eq!(query::apply(&subset, "", "CERDO").len(), 1);
    assert_eq!(query::apply(&subset, "", "león").len(), 1);
    // schedule
    assert_eq!(query::apply(&subset, "", "9:00").len(), 3);
    // substring, not word match
    assert_eq!(query::apply(&subset, "", "uachar").len(), 1);
    assert!(query::apply(&subset, "", "tigre").is_empty());
}

#[test]
fn lottery_and_search_combine() {
    let s = store();
    let subset = s.for_category("animalitos");
    assert_eq!(query::apply(&subset, "LOTTO ACTIVO", "10:00").len(), 1);
    assert!(query::apply(&subset, "LA GRANJITA", "cerdo").is_empty());
}

#[test]
fn end_to_end_feed_scenario() {
    let recs = parse("categoria,loteria,numero,animal\nanimalitos,Triple,20,Cerdo\nloteria,Triple,775,");
    assert_eq!(recs.len(), 2);

    let mut s = RecordStore::new();
    s.set_all(recs);
    let ani = s.for_category("animalitos");
    assert_eq!(ani.len(), 1);
    assert_eq!(ani[0].animal, "Cerdo");

    assert_eq!(query::apply(&ani, "", "cerdo").len(), 1);
    assert!(query::apply(&ani, "", "gato").is_empty());
}

#[test]
fn search_does_not_match_the_category_itself() {
    let mut s = RecordStore::new();
    s.set_all(parse(FEED));
    let lot = s.for_category("loteria");
    assert!(query::apply(&lot, "", "loteria").is_empty());
    assert!(query::apply(&s.for_category("animalitos"), "", "animalitos").is_empty());
    assert_eq!(query::apply(&lot, "", "zamorano").len(), 1);
}
