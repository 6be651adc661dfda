use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};

use crate::domain::{CityRecord, Coordinates, DatasetRow};
use crate::errors::{NextStepError, NextStepResult};

/// Cost-of-living index assumed for cities missing from both the file and the
/// reference table.
pub const DEFAULT_COL_INDEX: f64 = 100.0;

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    category: Option<usize>,
    city: Option<usize>,
    state: Option<usize>,
    salary: Option<usize>,
    rent: Option<usize>,
    col: Option<usize>,
    lat: Option<usize>,
    lon: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> NextStepResult<Self> {
        let mut columns = Columns::default();
        for (index, header) in headers.iter().enumerate() {
            let slot = match header.trim().to_ascii_lowercase().as_str() {
                "category" | "role" => &mut columns.category,
                "city" => &mut columns.city,
                "state" => &mut columns.state,
                "salary" => &mut columns.salary,
                "rent" | "rent_index" => &mut columns.rent,
                "col" | "col_index" => &mut columns.col,
                "lat" => &mut columns.lat,
                "lon" => &mut columns.lon,
                _ => continue,
            };
            slot.get_or_insert(index);
        }
        if columns.category.is_none() || columns.city.is_none() || columns.salary.is_none() {
            return Err(NextStepError::Dataset(
                "salary table needs Category, City and Salary columns".into(),
            ));
        }
        Ok(columns)
    }
}

fn text(record: &StringRecord, column: Option<usize>) -> Option<&str> {
    column
        .and_then(|index| record.get(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn number(record: &StringRecord, column: Option<usize>) -> Option<f64> {
    text(record, column)
        .map(|value| value.replace([',', '$'], ""))
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Parses a salary table. Rows without a category, city or positive salary
/// are skipped. Columns the file lacks are filled from `reference` when the
/// city is known there.
pub fn parse_rows<R: Read>(reader: R, reference: &[CityRecord]) -> NextStepResult<Vec<DatasetRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns = Columns::resolve(reader.headers()?)?;

    let mut rows = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        let record = result?;
        let line = line_num + 2;

        let category = text(&record, columns.category);
        let city = text(&record, columns.city);
        let (Some(category), Some(city)) = (category, city) else {
            tracing::warn!(line, "skipping salary row without category or city");
            continue;
        };
        let salary = match number(&record, columns.salary) {
            Some(salary) if salary > 0.0 => salary,
            _ => {
                tracing::warn!(line, category, city, "skipping row without a positive salary");
                continue;
            }
        };

        let known = reference
            .iter()
            .find(|candidate| candidate.name.eq_ignore_ascii_case(city));
        let coordinates = match (number(&record, columns.lat), number(&record, columns.lon)) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => known.map(|city| city.coordinates),
        };

        rows.push(DatasetRow {
            category: category.to_string(),
            city: city.to_string(),
            state: text(&record, columns.state)
                .map(str::to_uppercase)
                .or_else(|| known.map(|city| city.state.clone()))
                .unwrap_or_default(),
            salary,
            rent: number(&record, columns.rent).or_else(|| known.map(|city| city.monthly_rent)),
            col_index: number(&record, columns.col)
                .or_else(|| known.map(|city| city.col_index))
                .unwrap_or(DEFAULT_COL_INDEX),
            coordinates,
        });
    }
    Ok(rows)
}

pub fn load_rows(path: &Path, reference: &[CityRecord]) -> NextStepResult<Vec<DatasetRow>> {
    let file = File::open(path)?;
    let rows = parse_rows(file, reference)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "loaded salary table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::builtin;

    #[test]
    fn minimal_table_is_enriched_from_reference() {
        let data = "Category,City,Salary\nData Scientist,Austin,145000\n";
        let rows = parse_rows(data.as_bytes(), &builtin::cities()).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.state, "TX");
        assert_eq!(row.rent, Some(1700.0));
        assert_eq!(row.col_index, 65.0);
        assert!(row.coordinates.is_some());
    }

    #[test]
    fn unknown_city_degrades_without_failing() {
        let data = "category,city,salary\nCloud Architect,Springfield,\"125,000\"\n";
        let rows = parse_rows(data.as_bytes(), &builtin::cities()).unwrap();
        assert_eq!(rows[0].salary, 125_000.0);
        assert_eq!(rows[0].rent, None);
        assert_eq!(rows[0].coordinates, None);
        assert_eq!(rows[0].col_index, DEFAULT_COL_INDEX);
        assert_eq!(rows[0].state, "");
    }

    #[test]
    fn bad_rows_are_skipped() {
        let data = "Role,City,State,Salary,Rent_Index,COL_Index,Lat,Lon\n\
                    UX Designer,Denver,co,90000,1900,68,39.73,-104.99\n\
                    UX Designer,,CO,90000,1900,68,39.73,-104.99\n\
                    UX Designer,Boulder,CO,-1,2100,75,40.01,-105.27\n\
                    UX Designer,Boulder,CO,abc,2100,75,40.01,-105.27\n";
        let rows = parse_rows(data.as_bytes(), &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].state, "CO");
        assert_eq!(rows[0].coordinates, Some(Coordinates::new(39.73, -104.99)));
    }

    #[test]
    fn missing_required_columns_is_an_error() {
        let data = "City,Salary\nAustin,1\n";
        let err = parse_rows(data.as_bytes(), &[]).unwrap_err();
        assert!(matches!(err, NextStepError::Dataset(_)));
    }
}
