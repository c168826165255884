use crate::domain::model::{Car, CarList, StyleList};

pub const NO_CARS_MESSAGE: &str = "There are no cars.";
pub const TABLE_HEADERS: [&str; 7] = ["#", "Model", "Brand", "Year", "Price", "Color", "Style"];

/// A single rendered body row of the car table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Car { cells: [String; 7], car: Car },
    Empty(&'static str),
}

/// Compose table rows from a car list payload.
///
/// A zero or missing `total` yields a single placeholder row, whatever
/// `records` contains.
pub fn compose_rows(data: &CarList) -> Vec<TableRow> {
    if data.total == 0 {
        return vec![TableRow::Empty(NO_CARS_MESSAGE)];
    }

    data.records
        .iter()
        .map(|car| TableRow::Car {
            cells: [
                format!("#{}", car.id),
                car.model.clone(),
                car.brand.clone(),
                car.year.to_string(),
                car.price.to_string(),
                car.color.clone(),
                car.style_select.clone(),
            ],
            car: car.clone(),
        })
        .collect()
}

/// Style names in payload order, as offered by the style selector.
pub fn style_options(data: &StyleList) -> Vec<String> {
    data.records.iter().map(|style| style.name.clone()).collect()
}

pub fn delete_confirmation(car: &Car) -> String {
    format!(
        "Are you sure you want to delete {} {} {} {} {} {}\nThis action will delete the car permanently.",
        car.model, car.brand, car.year, car.price, car.color, car.style_select
    )
}

/// Lay rows out as a fixed-width text table.
pub fn format_table(rows: &[TableRow]) -> String {
    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        if let TableRow::Car { cells, .. } = row {
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut lines = vec![pad_row(TABLE_HEADERS.iter().copied(), &widths)];
    let total_width = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    lines.push("-".repeat(total_width));

    for row in rows {
        match row {
            TableRow::Car { cells, .. } => {
                lines.push(pad_row(cells.iter().map(String::as_str), &widths))
            }
            TableRow::Empty(message) => {
                lines.push(format!("{:^total_width$}", message).trim_end().to_string())
            }
        }
    }

    lines.join("\n")
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
