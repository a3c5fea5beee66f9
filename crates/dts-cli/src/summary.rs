use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dts_model::{FieldSchema, SummaryCounts, ValidationSummaryRow};

use crate::commands::WriteOutcome;

pub fn print_validation_summary(rows: &[ValidationSummaryRow]) {
    println!("{}", validation_table(rows));
}

pub fn validation_table(rows: &[ValidationSummaryRow]) -> Table {
    let mut table = Table::new();
    table.set_header(
        ValidationSummaryRow::HEADERS
            .iter()
            .map(|label| header_cell(label))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for index in 1..ValidationSummaryRow::HEADERS.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        let mut cells = vec![Cell::new(&row.field).add_attribute(Attribute::Bold)];
        match &row.counts {
            Some(SummaryCounts {
                total,
                missing,
                duplicates,
                invalid,
                valid,
            }) => {
                cells.push(Cell::new(total));
                cells.push(count_cell(*missing, Color::Yellow));
                cells.push(count_cell(*duplicates, Color::Yellow));
                cells.push(count_cell(*invalid, Color::Red));
                cells.push(count_cell(*valid, Color::Green));
            }
            None => cells.extend(row.cells().into_iter().skip(1).map(dim_cell)),
        }
        table.add_row(cells);
    }
    table
}

pub fn print_schemas(schemas: &[FieldSchema]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Schema"), header_cell("Required fields")]);
    apply_table_style(&mut table);
    for schema in schemas {
        table.add_row(vec![
            Cell::new(schema.name).fg(Color::Blue),
            Cell::new(schema.fields.join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn print_write_outcome(outcome: &WriteOutcome) {
    println!(
        "Wrote {} rows x {} columns to {}",
        outcome.rows,
        outcome.columns,
        outcome.path.display()
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dts_model::SENTINEL_COUNT;

    #[test]
    fn sentinel_rows_render_dashes() {
        let rows = vec![
            ValidationSummaryRow::computed(
                "Phone",
                SummaryCounts {
                    total: 4,
                    missing: 1,
                    duplicates: 2,
                    invalid: 1,
                    valid: 2,
                },
            ),
            ValidationSummaryRow::not_selected("Email"),
        ];
        let mut table = validation_table(&rows);
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("Phone"));
        assert!(rendered.contains("Duplicates"));
        let email_line = rendered
            .lines()
            .find(|line| line.contains("Email"))
            .unwrap();
        assert_eq!(email_line.matches(SENTINEL_COUNT).count(), 5);
    }
}
