// tests/view_state.rs
//
// ViewState behaviour without UI: category switching, filter resets, counts.
use sorteos::csv::parse;
use sorteos::view::{Counts, ViewState};

const FEED: &str = "\
categoria,loteria,horario,numero,animal
animalitos,LOTTO ACTIVO,9:00 AM,20,Cerdo
loteria,TRIPLE ZAMORANO,10:00 AM,775,
animalitos,LA GRANJITA,9:00 AM,05,León
loteria,TRIPLE FÁCIL,1:00 PM,123,
animalitos,LOTTO ACTIVO,10:00 AM,31,Lapa
";

fn loaded() -> ViewState {
    let mut v = ViewState::new();
    v.load(parse(FEED));
    v
}

fn lotteries(v: &ViewState) -> Vec<String> {
    v.result_set().iter().map(|r| r.lottery.clone()).collect()
}

#[test]
fn starts_on_loteria_with_empty_outputs() {
    let v = ViewState::new();
    assert_eq!(v.query().active_category, "loteria");
    assert!(v.result_set().is_empty());
    assert!(v.facet_options().is_empty());
    assert_eq!(v.counts(), Counts { filtered: 0, total: 0 });
}

#[test]
fn load_recomputes_subset_and_facets() {
    let v = loaded();
    assert_eq!(lotteries(&v), vec!["TRIPLE ZAMORANO", "TRIPLE FÁCIL"]);
    assert_eq!(v.facet_options(), ["TRIPLE FÁCIL", "TRIPLE ZAMORANO"]);
    assert_eq!(v.counts(), Counts { filtered: 2, total: 5 });
}

#[test]
fn set_category_swaps_facets_and_results() {
    let mut v = loaded();
    v.set_category("animalitos");
    assert_eq!(v.facet_options(), ["LA GRANJITA", "LOTTO ACTIVO"]);
    assert_eq!(v.counts(), Counts { filtered: 3, total: 5 });
    assert_eq!(v.result_indices(), &[0, 2, 4]);
}

#[test]
fn set_category_always_resets_filters_even_for_same_category() {
    let mut v = loaded();
    v.set_category("animalitos");
    v.set_selected_lottery("LOTTO ACTIVO");
    v.set_search_text("cerdo");
    assert_eq!(v.counts().filtered, 1);

    v.set_category("animalitos");
    assert_eq!(v.query().selected_lottery, "");
    assert_eq!(v.query().search_text, "");
    assert_eq!(v.counts().filtered, 3);

    v.set_search_text("lapa");
    v.set_category("animalitos");
    assert_eq!(v.query().search_text, "");
}

#[test]
fn filters_narrow_and_counts_keep_dataset_total() {
    let mut v = loaded();
    v.set_category("animalitos");

    v.set_selected_lottery("LOTTO ACTIVO");
    assert_eq!(v.counts(), Counts { filtered: 2, total: 5 });

    v.set_search_text("CERDO");
    assert_eq!(v.counts(), Counts { filtered: 1, total: 5 });
    assert_eq!(v.result_set()[0].animal, "Cerdo");

    v.set_search_text("gato");
    assert_eq!(v.counts(), Counts { filtered: 0, total: 5 });

    v.set_selected_lottery("");
    v.set_search_text("");
    assert_eq!(v.counts().filtered, 3);
}

#[test]
fn facet_options_do_not_change_with_lottery_or_search() {
    let mut v = loaded();
    v.set_category("animalitos");
    let before = v.facet_options().to_vec();
    v.set_selected_lottery("LA GRANJITA");
    v.set_search_text("xyz");
    assert_eq!(v.facet_options(), before.as_slice());
}

#[test]
fn reload_keeps_query_and_clear_empties_everything() {
    let mut v = loaded();
    v.set_category("animalitos");
    v.set_search_text("9:00");
    assert_eq!(v.counts().filtered, 2);

    v.load(parse("categoria,loteria,horario\nanimalitos,X,9:00 AM"));
    assert_eq!(v.query().search_text, "9:00");
    assert_eq!(v.counts(), Counts { filtered: 1, total: 1 });

    v.clear();
    assert_eq!(v.counts(), Counts { filtered: 0, total: 0 });
    assert!(v.facet_options().is_empty());
    assert!(v.result_set().is_empty());
}

#[test]
fn unknown_category_is_just_empty() {
    let mut v = loaded();
    v.set_category("granjita");
    assert!(v.result_set().is_empty());
    assert!(v.facet_options().is_empty());
    assert_eq!(v.counts().total, 5);

    let w = ViewState::with_category("animalitos");
    assert_eq!(w.query().active_category, "animalitos");
}
