//! Submitted form values and their conversion into the feature row.

use serde::Deserialize;

use tarifa_core::features::FeatureValue;

/// The fourteen form fields submitted for a prediction, all as raw strings.
///
/// Field spellings on the wire (`startYear`, `Anno`, ...) match the form and
/// the model's column names; missing fields are rejected by the extractor
/// before this struct is ever built.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleFeatures {
    pub marca: String,
    pub modelo: String,
    pub version: String,
    #[serde(rename = "startYear")]
    pub start_year: String,
    #[serde(rename = "endYear")]
    pub end_year: String,
    pub cilindrada: String,
    pub cv: String,
    pub id_carroceria: String,
    pub pf: String,
    pub puertas: String,
    pub id_combustible: String,
    pub matriculacion: String,
    #[serde(rename = "periodoDescripcion")]
    pub periodo_descripcion: String,
    #[serde(rename = "Anno")]
    pub anno: String,
}

impl VehicleFeatures {
    /// Build the ordered feature row, positionally aligned to
    /// [`FEATURE_COLUMNS`](tarifa_core::features::FEATURE_COLUMNS).
    ///
    /// String-typed attributes pass through raw; numeric attributes are
    /// coerced, with unusable input becoming a null feature.
    pub fn into_row(self) -> [FeatureValue; 14] {
        [
            FeatureValue::text(self.marca),
            FeatureValue::text(self.modelo),
            FeatureValue::text(self.version),
            FeatureValue::int_or_null(&self.start_year),
            FeatureValue::int_or_null(&self.end_year),
            FeatureValue::int_or_null(&self.cilindrada),
            FeatureValue::int_or_null(&self.cv),
            FeatureValue::text(self.id_carroceria),
            FeatureValue::int_or_null(&self.pf),
            FeatureValue::int_or_null(&self.puertas),
            FeatureValue::text(self.id_combustible),
            FeatureValue::int_or_null(&self.matriculacion),
            FeatureValue::text(self.periodo_descripcion),
            FeatureValue::int_or_null(&self.anno),
        ]
    }
}
