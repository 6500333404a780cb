//! `pathwise personas`: show the loaded persona catalog.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

/// List personas in a table, or as JSON.
pub fn list_personas(state: &AppState, json: bool) -> Result<()> {
    if json {
        let personas: Vec<serde_json::Value> = state
            .catalog
            .iter()
            .map(|(key, persona)| {
                serde_json::json!({
                    "key": key,
                    "name": persona.name,
                    "description": persona.description,
                    "instructions": persona.instructions,
                    "web_search": persona.web_search,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&personas)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Key").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Web").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    for (key, persona) in state.catalog.iter() {
        let web = if persona.web_search {
            Cell::new("● yes").fg(Color::Green)
        } else {
            Cell::new("○ no").fg(Color::DarkGrey)
        };
        let description = if persona.description.chars().count() > 60 {
            format!("{}...", persona.description.chars().take(57).collect::<String>())
        } else {
            persona.description.clone()
        };

        table.add_row(vec![
            Cell::new(key.as_str()).fg(Color::Cyan),
            Cell::new(&persona.name),
            web,
            Cell::new(description),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} personas loaded from {}",
        style(state.catalog.iter().count()).bold(),
        style(catalog_source(state)).dim()
    );
    println!();
    Ok(())
}

fn catalog_source(state: &AppState) -> String {
    let path = pathwise_infra::filesystem::personas_path(&state.data_dir);
    if path.is_file() {
        path.display().to_string()
    } else {
        "built-in catalog".to_string()
    }
}
