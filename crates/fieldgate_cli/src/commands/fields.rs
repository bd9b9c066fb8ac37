use anyhow::Result;
use fieldgate_recipe::BurgerRecipe;
use serde_json::json;
use tracing::info;

use crate::output;

pub fn execute(format: &str) -> Result<()> {
    info!("Listing declared recipe fields");

    let schema = BurgerRecipe::schema();

    if format == "json" {
        let fields = schema
            .fields()
            .map(|d| {
                json!({
                    "name": d.name(),
                    "constraint": d.describe(),
                })
            })
            .collect::<Vec<_>>();

        let output = json!({ "fields": fields });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    output::print_info(&format!("{} declared fields", schema.len()));
    println!("\nFields:");
    for descriptor in schema.fields() {
        println!("  {:<10} {}", descriptor.name(), descriptor.describe());
    }

    Ok(())
}
