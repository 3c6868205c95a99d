// tests/parse_feed.rs
//
// CSV feed → records, through the public parser.
use sorteos::csv::parse;
use sorteos::record::{Field, Record};

const FEED: &str = "\
categoria,fecha,loteria,horario,triple,terminal_a_b,terminal_c,numero,signo,cacho,animal
loteria,15/02/2026,TRIPLE FÁCIL,1:00 PM,123,,,,,,
loteria,15/02/2026,TERMINALES,1:00 PM,,45,6,,,,
loteria,15/02/2026,CHANCE CON CACHO,4:00 PM,,,,789,LEO,2,
animalitos,15/02/2026,LOTTO ACTIVO,9:00 AM,,,,20,,,CERDO
";

#[test]
fn n_rows_give_n_records_with_every_field_set() {
    let recs = parse(FEED);
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[0].triple_number, "123");
    assert_eq!(recs[1].terminal_ab, "45");
    assert_eq!(recs[1].terminal_c, "6");
    assert_eq!(recs[2].sign, "LEO");
    assert_eq!(recs[2].cacho, "2");
    assert_eq!(recs[3].category, "animalitos");
    assert_eq!(recs[3].animal, "CERDO");
    assert_eq!(recs[3].triple_number, "");
}

#[test]
fn quoted_commas_are_not_split() {
    let recs = parse("loteria,horario\n\"a,b\",c");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].lottery, "a,b");
    assert_eq!(recs[0].schedule, "c");
}

#[test]
fn empty_and_header_only_inputs_yield_nothing() {
    assert!(parse("").is_empty());
    assert!(parse("   \n\t  \n").is_empty());
    assert!(parse("categoria,loteria\n").is_empty());
}

#[test]
fn short_rows_are_padded_and_long_rows_truncated() {
    let recs = parse("loteria,horario,numero\nA\nB,2:00 PM,7,extra,more");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].lottery, "A");
    assert_eq!(recs[0].schedule, "");
    assert_eq!(recs[0].number, "");
    assert_eq!(recs[1].number, "7");
    assert_eq!(recs[1].values().iter().filter(|v| v.contains("extra")).count(), 0);
}

#[test]
fn category_defaults_to_loteria_when_missing_or_blank() {
    let no_column = parse("loteria,numero\nX,1");
    assert_eq!(no_column[0].category, "loteria");

    let blank_cell = parse("categoria,loteria\n  ,X\n\"\",Y");
    assert_eq!(blank_cell[0].category, "loteria");
    assert_eq!(blank_cell[1].category, "loteria");
}

#[test]
fn unknown_headers_are_ignored_and_headers_are_case_insensitive() {
    let recs = parse("CATEGORIA,Origen,LOTERIA\nanimalitos,web,LA GRANJITA");
    assert_eq!(recs[0].category, "animalitos");
    assert_eq!(recs[0].lottery, "LA GRANJITA");
    assert!(recs[0].values().iter().all(|v| v != "web"));
}

#[test]
fn doubled_quotes_are_preserved_verbatim() {
    let recs = parse("loteria,animal\n\"EL \"\"GUACHARO\"\"\",x");
    assert_eq!(recs[0].lottery, "EL \"\"GUACHARO\"\"");
    assert_eq!(recs[0].animal, "x");
}

#[test]
fn values_are_not_validated() {
    let recs = parse("fecha,numero\nmañana,veinte");
    assert_eq!(recs[0].date, "mañana");
    assert_eq!(recs[0].number, "veinte");
}

#[test]
fn blank_data_rows_still_count() {
    let recs = parse("loteria,numero\nA,1\n\nB,2");
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[1], Record::default());
}

#[test]
fn parsing_is_idempotent() {
    assert_eq!(parse(FEED), parse(FEED));
}

#[test]
fn every_record_exposes_every_schema_field() {
    for r in parse(FEED) {
        assert_eq!(r.values().len(), Field::ALL.len());
    }
}

#[test]
fn crlf_feed_with_quoted_header_and_last_cells() {
    let recs = parse("\"categoria\",\"loteria\",\"animal\"\r\n\"animalitos\",\"LOTTO ACTIVO\",\"CERDO\"\r\nanimalitos,B,y\r\n");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].category, "animalitos");
    assert_eq!(recs[0].lottery, "LOTTO ACTIVO");
    assert_eq!(recs[0].animal, "CERDO");
    assert_eq!(recs[1].animal, "y");
}
