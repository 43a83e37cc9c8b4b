//! Vehicle-pricing dataset row and the filter-option aggregation built on it.

use serde::Serialize;
use sqlx::FromRow;

use tarifa_core::options::{distinct_sorted, distinct_sorted_optional};

/// A row from the `coches_tarifa_compra` table.
///
/// Rows are read-only reference data: fetched fresh for each request and
/// never written back by this service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VehicleRecord {
    /// Brand, e.g. `"Seat"`.
    pub marca: String,
    /// Model, e.g. `"Ibiza"`.
    pub modelo: String,
    /// Trim/version descriptor, e.g. `"1.0"`.
    pub version: String,
    /// First production year of the version.
    pub start_year: Option<i32>,
    /// Last production year of the version.
    pub end_year: Option<i32>,
    /// Engine displacement in cc.
    pub cilindrada: Option<i32>,
    /// Horsepower.
    pub cv: Option<i32>,
    /// Body type code, e.g. `"5P"`.
    pub id_carroceria: String,
    /// Price factor.
    pub pf: Option<i32>,
    /// Door count.
    pub puertas: Option<i32>,
    /// Fuel type code, e.g. `"G"`.
    pub id_combustible: String,
    /// First registration year.
    pub matriculacion: Option<i32>,
    /// Observed purchase price.
    pub precio_compra: f64,
    /// Pricing period description, e.g. `"Q1"`.
    pub periodo_descripcion: String,
    /// Tariff year.
    pub anno: Option<i32>,
}

/// The fourteen filter option lists that populate the form's selection
/// controls. Each list is distinct, lexicographically sorted on the
/// stringified value, with null source values excluded.
///
/// Field names follow the form's selection-control names, so this struct
/// serializes directly into the shape the frontend consumes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOptions {
    pub marcas: Vec<String>,
    pub modelos: Vec<String>,
    pub versiones: Vec<String>,
    pub periodos: Vec<String>,
    pub combustibles: Vec<String>,
    pub start_years: Vec<String>,
    pub end_years: Vec<String>,
    pub cilindradas: Vec<String>,
    pub cvs: Vec<String>,
    pub id_carrocerias: Vec<String>,
    pub pfs: Vec<String>,
    pub puertas: Vec<String>,
    pub matriculaciones: Vec<String>,
    pub annos: Vec<String>,
}

impl FilterOptions {
    /// Derive all fourteen option lists from a single dataset read.
    ///
    /// An empty slice yields fourteen empty lists, not an error.
    pub fn from_records(records: &[VehicleRecord]) -> Self {
        FilterOptions {
            marcas: distinct_sorted(records.iter().map(|r| r.marca.as_str())),
            modelos: distinct_sorted(records.iter().map(|r| r.modelo.as_str())),
            versiones: distinct_sorted(records.iter().map(|r| r.version.as_str())),
            periodos: distinct_sorted(records.iter().map(|r| r.periodo_descripcion.as_str())),
            combustibles: distinct_sorted(records.iter().map(|r| r.id_combustible.as_str())),
            start_years: distinct_sorted_optional(records.iter().map(|r| r.start_year)),
            end_years: distinct_sorted_optional(records.iter().map(|r| r.end_year)),
            cilindradas: distinct_sorted_optional(records.iter().map(|r| r.cilindrada)),
            cvs: distinct_sorted_optional(records.iter().map(|r| r.cv)),
            id_carrocerias: distinct_sorted(records.iter().map(|r| r.id_carroceria.as_str())),
            pfs: distinct_sorted_optional(records.iter().map(|r| r.pf)),
            puertas: distinct_sorted_optional(records.iter().map(|r| r.puertas)),
            matriculaciones: distinct_sorted_optional(records.iter().map(|r| r.matriculacion)),
            annos: distinct_sorted_optional(records.iter().map(|r| r.anno)),
        }
    }
}
