//! End-to-end cleaning pass over a small movies export.

use cineprep::cleaning::{
    coerce_numeric, count_blanks, count_duplicates, date_pattern, extract_record_values,
    extract_values, remove_blanks, remove_duplicates, validate_expressions, DateFilter,
};
use cineprep::ingestion::load_csv_from_path;
use cineprep::types::{Dataset, Value};

fn movies() -> Dataset {
    load_csv_from_path("tests/fixtures/movies.csv").unwrap()
}

fn utf8(s: &str) -> Value {
    Value::Utf8(s.to_string())
}

#[test]
fn coerce_budget_and_popularity() {
    let mut ds = movies();
    coerce_numeric(&mut ds, "budget", None).unwrap();
    coerce_numeric(&mut ds, "popularity", None).unwrap();

    let budget_idx = ds.index_of("budget").unwrap();
    let pop_idx = ds.index_of("popularity").unwrap();

    assert_eq!(ds.rows[0][budget_idx], Value::Int64(30000000));
    assert_eq!(ds.rows[0][pop_idx], Value::Float64(21.946943));
    // Unconvertible popularity keeps its original text.
    assert_eq!(ds.rows[3][pop_idx], utf8("not_a_number"));
    // Missing budget stays missing without a fallback.
    assert_eq!(ds.rows[5][budget_idx], Value::Null);
    assert_eq!(ds.row_count(), 6);
}

#[test]
fn duplicate_titles_are_detected_and_dropped() {
    let ds = movies();
    let titles = ds.column_values("title").unwrap();

    assert_eq!(count_duplicates(&titles), vec![(utf8("Toy Story"), 1)]);

    let deduped = remove_duplicates(&ds, "title").unwrap();
    assert_eq!(deduped.row_count(), 5);
    let deduped_titles = deduped.column_values("title").unwrap();
    for (i, a) in deduped_titles.iter().enumerate() {
        for b in deduped_titles.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn blank_collection_rows_are_counted_then_removed() {
    let ds = movies();
    assert_eq!(count_blanks(&ds, "belongs_to_collection").unwrap(), 3);

    let cleaned = remove_blanks(&ds, "belongs_to_collection").unwrap();
    assert_eq!(cleaned.row_count(), 3);
    assert_eq!(count_blanks(&cleaned, "belongs_to_collection").unwrap(), 0);
}

#[test]
fn release_dates_split_by_pattern() {
    let ds = movies();
    let dates = ds.column_values("release_date").unwrap();

    assert_eq!(date_pattern(&dates, DateFilter::Matching).len(), 5);
    assert_eq!(
        date_pattern(&dates, DateFilter::NonMatching),
        vec![utf8("bad-date")]
    );
}

#[test]
fn validate_crew_column_reports_the_malformed_cell() {
    let ds = movies();
    let report = validate_expressions(&ds, "crew").unwrap();

    assert_eq!(report.valid_count, 5);
    assert_eq!(report.error_count, 1);
    assert_eq!(report.invalid_count, 1);
    assert_eq!(report.error_values, vec!["not_a_list(".to_string()]);
}

#[test]
fn extract_crew_dedupes_and_skips_malformed_rows() {
    let mut ds = movies();
    extract_values(&mut ds, "crew", &["name", "job"], &["crew_name", "crew_job"]).unwrap();

    let name_idx = ds.index_of("crew_name").unwrap();
    let job_idx = ds.index_of("crew_job").unwrap();

    // The duplicated (John Lasseter, Director) entry collapses to one.
    assert_eq!(
        ds.rows[0][name_idx],
        Value::List(vec![utf8("John Lasseter"), utf8("Joss Whedon")])
    );
    assert_eq!(
        ds.rows[0][job_idx],
        Value::List(vec![utf8("Director"), utf8("Screenplay")])
    );
    // The malformed crew cell yields missing extracted cells, not stale data.
    assert_eq!(ds.rows[2][name_idx], Value::Null);
    assert_eq!(ds.rows[2][job_idx], Value::Null);
    assert_eq!(
        ds.rows[3][name_idx],
        Value::List(vec![utf8("Forest Whitaker")])
    );
}

#[test]
fn extract_collection_names_from_record_cells() {
    let mut ds = movies();
    extract_record_values(
        &mut ds,
        "belongs_to_collection",
        &["name"],
        &["collection_name"],
    )
    .unwrap();

    let idx = ds.index_of("collection_name").unwrap();
    assert_eq!(
        ds.rows[0][idx],
        Value::List(vec![utf8("Toy Story Collection")])
    );
    assert_eq!(ds.rows[1][idx], Value::Null);
    assert_eq!(
        ds.rows[5][idx],
        Value::List(vec![utf8("Father of the Bride Collection")])
    );
}
