use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{FacetField, Record};
use roster_normalization::FLAG_FIELD;
use roster_query::{Facets, SearchOutcome};

const MEMBER_COLUMNS: [&str; 6] = ["Name", "Title", "City", "Country", "Class", "Industry"];

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

fn value_cell(value: &str) -> Cell {
    if value.trim().is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn member_row(member: &Record) -> Vec<Cell> {
    let mut row = vec![Cell::new(member.text(FLAG_FIELD))];
    row.extend(MEMBER_COLUMNS.iter().map(|column| value_cell(&member.text(column))));
    row
}

pub fn print_search(outcome: &SearchOutcome) {
    let mut table = base_table();
    let mut header = vec![header_cell("")];
    header.extend(MEMBER_COLUMNS.iter().map(|column| header_cell(column)));
    table.set_header(header);
    if let Some(column) = table.column_mut(5) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for member in &outcome.members {
        table.add_row(member_row(member));
    }
    println!("{table}");
    println!(
        "Showing {} of {} members",
        outcome.filtered_count, outcome.total_count
    );
}

fn facet_title(field: FacetField) -> &'static str {
    match field {
        FacetField::Country => "Countries",
        FacetField::City => "Cities",
        FacetField::Class => "Classes",
        FacetField::Industry => "Industries",
    }
}

pub fn print_facets(facets: &Facets) {
    let mut table = base_table();
    table.set_header(vec![header_cell("Facet"), header_cell("Count"), header_cell("Values")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for field in FacetField::ALL {
        let values = facets.values(field);
        let listed = if values.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(values.join(", "))
        };
        table.add_row(vec![
            Cell::new(facet_title(field)).add_attribute(Attribute::Bold),
            Cell::new(values.len()),
            listed,
        ]);
    }
    println!("{table}");
}
