//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format categories as a table, in insertion order
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        name: c.name.clone(),
        description: c.description.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
