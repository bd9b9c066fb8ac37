use anyhow::{Result, bail};
use fieldgate_recipe::BurgerRecipe;
use tracing::info;

use crate::output;

pub fn execute(
    buns: i64,
    cheese: i64,
    tomatoes: i64,
    cutlets: i64,
    eggs: i64,
    sauce: &str,
    format: &str,
) -> Result<()> {
    info!(
        "Building recipe: buns={}, cheese={}, tomatoes={}, cutlets={}, eggs={}, sauce={}",
        buns, cheese, tomatoes, cutlets, eggs, sauce
    );

    match BurgerRecipe::new(buns, cheese, tomatoes, cutlets, eggs, sauce) {
        Ok(recipe) => {
            output::print_recipe_report(&recipe, format);
            Ok(())
        }
        Err(err) => {
            output::print_failure_report(&err, format);
            bail!("recipe validation failed: {err}")
        }
    }
}
