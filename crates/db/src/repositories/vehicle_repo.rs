//! Read-only repository for the `coches_tarifa_compra` table.

use sqlx::PgPool;

use crate::models::vehicle::VehicleRecord;

/// Column list for vehicle queries.
const VEHICLE_COLUMNS: &str = "\
    marca, modelo, version, start_year, end_year, cilindrada, cv, \
    id_carroceria, pf, puertas, id_combustible, matriculacion, \
    precio_compra, periodo_descripcion, anno";

/// Maximum number of rows read per request.
const ROW_LIMIT: i64 = 1000;

/// Provides read access to the vehicle-pricing dataset.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Fetch the dataset, capped at [`ROW_LIMIT`] rows.
    ///
    /// Each call is an independent read reflecting the table at read time;
    /// results are never cached across requests.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<VehicleRecord>, sqlx::Error> {
        let query = format!("SELECT {VEHICLE_COLUMNS} FROM coches_tarifa_compra LIMIT {ROW_LIMIT}");
        let records = sqlx::query_as::<_, VehicleRecord>(&query)
            .fetch_all(pool)
            .await?;

        tracing::debug!(rows = records.len(), "Fetched vehicle pricing dataset");

        Ok(records)
    }
}
