//! Terminal tables for records and reports

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

use crate::records::AcceptedRecord;
use crate::reports::{GridRow, Prediction, WeeklyRow};
use crate::{DAYS_PER_WEEK, WEEKDAY_ABBREVS, WEEKDAYS};

fn table_with_header<I, S>(headers: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(
        headers
            .into_iter()
            .map(|h| Cell::new(h.to_string()).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn count_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Accepted records: Fecha / Diario / Cantidad
pub fn records_table(records: &[AcceptedRecord]) -> Table {
    let mut table = table_with_header(["Fecha", "Diario", "Cantidad de Artículos"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.fecha.format("%Y-%m-%d").to_string()),
            Cell::new(&record.diario),
            count_cell(record.cantidad),
        ]);
    }
    table
}

/// Historical grid: one column per day, "S1 Lu" .. "S6 Do"
pub fn grid_table(rows: &[GridRow]) -> Table {
    let weeks = rows.first().map(|r| r.counts.len() / DAYS_PER_WEEK).unwrap_or(0);
    let mut headers = vec!["Diario".to_string()];
    for week in 1..=weeks {
        headers.extend(WEEKDAY_ABBREVS.iter().map(|day| format!("S{} {}", week, day)));
    }

    let mut table = table_with_header(headers);
    for row in rows {
        let mut cells = vec![Cell::new(&row.diario)];
        cells.extend(row.counts.iter().map(count_cell));
        table.add_row(cells);
    }
    table
}

/// Weekly report: Diario + Lunes .. Domingo
pub fn weekly_table(rows: &[WeeklyRow]) -> Table {
    let mut table = table_with_header(std::iter::once("Diario").chain(WEEKDAYS));
    for row in rows {
        let mut cells = vec![Cell::new(&row.diario)];
        cells.extend(row.counts.iter().map(count_cell));
        table.add_row(cells);
    }
    table
}

/// Predictions with two decimals
pub fn predictions_table(rows: &[Prediction]) -> Table {
    let mut table = table_with_header(["Diario", "Promedio Artículos (Histórico)", "Predicción de Artículos"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.diario),
            count_cell(format!("{:.2}", row.mean)),
            count_cell(format!("{:.2}", row.predicted)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_records_table() {
        let records = vec![AcceptedRecord::new(
            NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            "El Sol",
            120,
        )];
        let out = records_table(&records).to_string();
        assert!(out.contains("Fecha"));
        assert!(out.contains("2024-05-06"));
        assert!(out.contains("El Sol"));
        assert!(out.contains("120"));
    }

    #[test]
    fn test_grid_headers() {
        let rows = vec![GridRow {
            diario: "El Sol".to_string(),
            counts: vec![0; 14],
        }];
        let mut table = grid_table(&rows);
        assert_eq!(table.column_count(), 15);
        let out = table.to_string();
        assert!(out.contains("S1 Lu"));
        assert!(out.contains("S2 Do"));
    }

    #[test]
    fn test_weekly_and_predictions_tables() {
        let weekly = weekly_table(&[WeeklyRow {
            diario: "La Gaceta".to_string(),
            counts: [1, 2, 3, 4, 5, 6, 7],
        }])
        .to_string();
        assert!(weekly.contains("Miércoles"));
        assert!(weekly.contains("Domingo"));

        let preds = predictions_table(&[Prediction {
            diario: "La Gaceta".to_string(),
            mean: 8.0,
            predicted: 9.256,
        }])
        .to_string();
        assert!(preds.contains("8.00"));
        assert!(preds.contains("9.26"));
    }
}
