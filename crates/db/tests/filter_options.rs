//! Tests for filter-option aggregation over constructed dataset rows.
//!
//! These exercise the aggregation invariants (distinct, sorted, nulls
//! excluded) without a live database: `FilterOptions::from_records` is a
//! pure function over already-fetched rows.

use tarifa_db::models::vehicle::{FilterOptions, VehicleRecord};

/// A fully populated record with overridable fields of interest.
fn record(marca: &str, modelo: &str, start_year: Option<i32>) -> VehicleRecord {
    VehicleRecord {
        marca: marca.to_string(),
        modelo: modelo.to_string(),
        version: "1.0".to_string(),
        start_year,
        end_year: Some(2021),
        cilindrada: Some(999),
        cv: Some(95),
        id_carroceria: "5P".to_string(),
        pf: Some(1),
        puertas: Some(5),
        id_combustible: "G".to_string(),
        matriculacion: Some(2019),
        precio_compra: 15234.5,
        periodo_descripcion: "Q1".to_string(),
        anno: Some(2019),
    }
}

// ---------------------------------------------------------------------------
// Test: option lists are distinct and lexicographically sorted
// ---------------------------------------------------------------------------

#[test]
fn option_lists_are_distinct_and_sorted() {
    let records = vec![
        record("Seat", "Ibiza", Some(2018)),
        record("Audi", "A3", Some(2016)),
        record("Seat", "Leon", Some(2018)),
        record("Audi", "A3", Some(2016)),
    ];

    let options = FilterOptions::from_records(&records);

    assert_eq!(options.marcas, vec!["Audi", "Seat"]);
    assert_eq!(options.modelos, vec!["A3", "Ibiza", "Leon"]);
    assert_eq!(options.start_years, vec!["2016", "2018"]);
}

// ---------------------------------------------------------------------------
// Test: nulls in nullable columns are excluded
// ---------------------------------------------------------------------------

#[test]
fn null_values_are_excluded_from_option_lists() {
    let mut with_nulls = record("Seat", "Ibiza", None);
    with_nulls.end_year = None;
    with_nulls.puertas = None;

    let records = vec![with_nulls, record("Seat", "Ibiza", Some(2018))];
    let options = FilterOptions::from_records(&records);

    assert_eq!(options.start_years, vec!["2018"]);
    assert_eq!(options.end_years, vec!["2021"]);
    assert_eq!(options.puertas, vec!["5"]);
}

// ---------------------------------------------------------------------------
// Test: an empty dataset yields fourteen empty lists, not an error
// ---------------------------------------------------------------------------

#[test]
fn empty_dataset_yields_fourteen_empty_lists() {
    let options = FilterOptions::from_records(&[]);

    let json = serde_json::to_value(&options).unwrap();
    let map = json.as_object().unwrap();

    assert_eq!(map.len(), 14, "expected one list per filterable attribute");
    for (name, list) in map {
        assert_eq!(
            list.as_array().map(Vec::len),
            Some(0),
            "option list '{name}' should be empty for an empty dataset"
        );
    }
}

// ---------------------------------------------------------------------------
// Test: numeric columns sort lexicographically on their string form
// ---------------------------------------------------------------------------

#[test]
fn numeric_options_sort_as_strings() {
    let mut a = record("Seat", "Ibiza", Some(2018));
    a.cv = Some(90);
    let mut b = record("Seat", "Ibiza", Some(2018));
    b.cv = Some(110);
    let mut c = record("Seat", "Ibiza", Some(2018));
    c.cv = Some(95);

    let options = FilterOptions::from_records(&[a, b, c]);

    // Rendered as text in a dropdown, so the order is lexicographic.
    assert_eq!(options.cvs, vec!["110", "90", "95"]);
}
