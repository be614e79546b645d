//! Catalog command implementations (countries, classify, map)

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use atlas_core::{classify, format_thousands, map, Catalog, CountryRecord, PopulationCategory};
use serde::Serialize;

use super::truncate;
use crate::cli::MapFormat;

/// Catalog entry with its size category, as listed by `atlas countries`
#[derive(Debug, Serialize)]
pub struct CountryListing<'a> {
    pub name: &'a str,
    pub population: u64,
    pub category: PopulationCategory,
}

/// Entries to list: all of them, or the search matches
pub fn list_countries<'a>(catalog: &'a Catalog, search: Option<&str>) -> Vec<CountryListing<'a>> {
    let records: Vec<&CountryRecord> = match search {
        Some(term) => catalog.search(term),
        None => catalog.all().iter().collect(),
    };

    records
        .into_iter()
        .map(|r| CountryListing {
            name: &r.name,
            population: r.population,
            category: classify(r.population),
        })
        .collect()
}

pub fn cmd_countries(catalog: &Catalog, search: Option<&str>, json: bool) -> Result<()> {
    let listings = list_countries(catalog, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        if let Some(term) = search {
            println!("No countries match '{}'.", term);
        }
        return Ok(());
    }

    println!();
    println!("  {:<28} {:>15}  Category", "Country", "Population");
    println!("  ─────────────────────────────────────────────────────────────");
    for listing in &listings {
        println!(
            "  {:<28} {:>15}  {}",
            truncate(listing.name, 28),
            format_thousands(listing.population),
            listing.category.label()
        );
    }
    println!();
    println!("  {} countries", listings.len());
    Ok(())
}

pub fn cmd_classify(population: u64) -> Result<()> {
    let category = classify(population);
    println!(
        "{} → {} ({})",
        format_thousands(population),
        category.label(),
        category
    );
    Ok(())
}

/// Write map rows in the requested format
pub fn write_map<W: Write>(catalog: &Catalog, format: MapFormat, mut writer: W) -> Result<()> {
    let rows = map::build(catalog).context("Failed to build map rows")?;
    match format {
        MapFormat::Csv => map::write_csv(&rows, &mut writer)?,
        MapFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn cmd_map(catalog: &Catalog, format: MapFormat, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_map(catalog, format, BufWriter::new(file))?;
            tracing::info!(path = %path.display(), rows = catalog.len(), "Wrote map rows");
        }
        None => write_map(catalog, format, io::stdout().lock())?,
    }
    Ok(())
}
