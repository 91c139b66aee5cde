//! Headless alloy calculator.
//!
//! Loads recipes and configuration, replays slider edits given as
//! `index=percent` arguments and prints the resulting ratios and metal bit
//! counts.
//!
//! ```bash
//! ALLOY_RECIPE=tinbronze ALLOY_TARGET_UNITS=500 alloycalc 0=89
//! ```
mod config;

use anyhow::{Context, Result};

use alloy_calc_content::{ConfigLoader, ContentFactory, RecipeLoader};
use alloy_calc_core::{CalcError, CalculatorSession, ChannelView};
use config::{ClientConfig, Edit};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client_config = ClientConfig::from_env();
    let edits = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Edit>())
        .collect::<Result<Vec<_>>>()?;

    let catalog = match &client_config.catalog_path {
        Some(path) => RecipeLoader::load(path)?,
        None => ContentFactory::embedded_recipes()?,
    };
    let config = match &client_config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => ContentFactory::embedded_config()?,
    };
    tracing::info!(alloys = catalog.len(), "content loaded");

    let mut session = CalculatorSession::new(&catalog, config);
    session.open().map_err(|e| {
        anyhow::anyhow!("cannot open calculator [{}]: {}", e.error_code(), e)
    })?;

    if let Some(wanted) = &client_config.recipe {
        let index = session
            .alloys()
            .iter()
            .position(|recipe| recipe.code == *wanted || recipe.display_name() == wanted.as_str())
            .with_context(|| format!("unknown alloy {wanted:?}"))?;
        session.select_recipe(index)?;
    }

    if let Some(units) = &client_config.target_units {
        if !session.set_target_units(units) {
            tracing::warn!(units = %units, "ignoring target units, expected a positive integer");
        }
    }

    for edit in edits {
        let outcome = session.edit_channel(edit.index, edit.percent)?;
        tracing::info!(
            index = edit.index,
            percent = edit.percent,
            outcome = outcome.as_str(),
            "edit applied"
        );
        if !outcome.is_exact() {
            tracing::warn!(?outcome, "ratios no longer sum to exactly 100%");
        }
    }

    let recipe = session
        .selected_recipe()
        .context("calculator has no selected alloy")?;
    let target = session.target();
    println!(
        "{} ({} units, {} units per bit)",
        recipe.display_name(),
        target.total_units,
        target.units_per_item
    );
    for view in session.views() {
        println!("{}", format_view(&view));
    }

    Ok(())
}

fn format_view(view: &ChannelView) -> String {
    format!(
        "  [{}] {:<10} {:>3}%  ({:>3}..{:<3})  {:>4} x {}",
        view.index,
        view.name,
        view.percent,
        view.bounds.min(),
        view.bounds.max(),
        view.count,
        view.item_code.as_deref().unwrap_or("-"),
    )
}
