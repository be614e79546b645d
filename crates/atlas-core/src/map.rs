//! Map data builder
//!
//! Turns the catalog into the row-oriented table the choropleth renderer
//! consumes: one row per country with its population on a log10 scale.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRow {
    pub country: String,
    pub population: u64,
    pub log_population: f64,
}

/// log10 of a population; zero has no logarithm
pub fn log_population(population: u64) -> Result<f64> {
    if population == 0 {
        return Err(Error::ValueKind(
            "population must be positive for log scale, got 0".to_string(),
        ));
    }
    Ok((population as f64).log10())
}

/// One row per catalog entry, in catalog order
pub fn build(catalog: &Catalog) -> Result<Vec<MapRow>> {
    let rows = catalog
        .all()
        .iter()
        .map(|record| -> Result<MapRow> {
            let log_population = log_population(record.population).map_err(|_| {
                Error::ValueKind(format!(
                    "{} has population {}, cannot take log10",
                    record.name, record.population
                ))
            })?;
            Ok(MapRow {
                country: record.name.clone(),
                population: record.population,
                log_population,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(rows = rows.len(), "Built map rows");
    Ok(rows)
}

/// Write rows as CSV with a `country,population,log_population` header
pub fn write_csv<W: Write>(rows: &[MapRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
