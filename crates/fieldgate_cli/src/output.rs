use colored::*;
use fieldgate_core::FieldError;
use fieldgate_recipe::BurgerRecipe;
use serde_json::json;

pub fn print_recipe_report(recipe: &BurgerRecipe, format: &str) {
    match format {
        "json" => print_json_report(recipe),
        _ => print_text_report(recipe),
    }
}

fn ingredients(recipe: &BurgerRecipe) -> Vec<(String, String)> {
    BurgerRecipe::schema()
        .fields()
        .map(|d| {
            let rendered = recipe
                .get(d.name())
                .map(|v| v.to_string())
                .unwrap_or_else(|_| "unset".to_string());
            (d.name().to_string(), rendered)
        })
        .collect()
}

fn print_text_report(recipe: &BurgerRecipe) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  RECIPE REPORT".bold());
    println!("{}", "═".repeat(60));

    println!("\n{} {}", "✓".green().bold(), "Recipe VALID".green().bold());

    println!("\n{}", "Ingredients:".bold());
    for (name, value) in ingredients(recipe) {
        println!("  {name:<10} {value}");
    }
    println!("{}", "═".repeat(60));
}

fn print_json_report(recipe: &BurgerRecipe) {
    let fields: serde_json::Map<String, serde_json::Value> = ingredients(recipe)
        .into_iter()
        .map(|(name, value)| (name, serde_json::Value::String(value)))
        .collect();

    let output = json!({
        "valid": true,
        "fields": fields,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_failure_report(error: &FieldError, format: &str) {
    match format {
        "json" => {
            let output = json!({
                "valid": false,
                "error": error.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        _ => {
            println!("\n{}", "═".repeat(60));
            println!("{}", "  RECIPE REPORT".bold());
            println!("{}", "═".repeat(60));
            println!("\n{} {}", "✗".red().bold(), "Recipe INVALID".red().bold());
            println!("\n{}", "Errors:".red().bold());
            println!("  1. {}", error.to_string().red());
            println!("{}", "═".repeat(60));
        }
    }
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
