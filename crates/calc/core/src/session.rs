//! Calculator session: one open calculator and the events that drive it.
//!
//! The host forwards three kinds of input: a recipe selection, a target
//! quantity, and single-channel edits. After each event it reads
//! [`CalculatorSession::views`] to refresh sliders and item counts.

use crate::allocation::{AllocationError, AllocationState, NormalizeOutcome, PercentBounds};
use crate::cache::CachedSession;
use crate::config::CalculatorConfig;
use crate::error::{CalcError, ErrorSeverity};
use crate::recipe::{AlloyCatalog, AlloyIngredient, AlloyRecipe};
use crate::resolve::Target;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionError {
    #[error("no enabled alloy recipes are available")]
    NoAlloysAvailable,

    #[error("recipe {index} does not exist (recipes: {len})")]
    UnknownRecipe { index: usize, len: usize },

    #[error("no recipe is selected")]
    NoSelection,

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl CalcError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoAlloysAvailable => ErrorSeverity::Unavailable,
            Self::UnknownRecipe { .. } | Self::NoSelection => ErrorSeverity::Validation,
            Self::Allocation(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoAlloysAvailable => "SESSION_NO_ALLOYS",
            Self::UnknownRecipe { .. } => "SESSION_UNKNOWN_RECIPE",
            Self::NoSelection => "SESSION_NO_SELECTION",
            Self::Allocation(err) => err.error_code(),
        }
    }
}

/// Display data for one channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelView {
    pub index: usize,
    pub name: String,
    pub bounds: PercentBounds,
    pub percent: u32,
    /// Discrete items needed for this channel's share of the target.
    pub count: u32,
    /// Code of the discrete item, only when `count > 0`.
    pub item_code: Option<String>,
}

#[derive(Clone, Debug)]
struct Selection {
    recipe_index: usize,
    ingredients: Vec<AlloyIngredient>,
    allocation: AllocationState,
}

/// State behind one open calculator.
#[derive(Clone, Debug)]
pub struct CalculatorSession {
    config: CalculatorConfig,
    alloys: Vec<AlloyRecipe>,
    selection: Option<Selection>,
    target_units: u32,
}

impl CalculatorSession {
    /// Creates a session offering the catalog's selectable recipes.
    pub fn new(catalog: &AlloyCatalog, config: CalculatorConfig) -> Self {
        let target_units = config.default_target_units;
        Self {
            config,
            alloys: catalog.selectable(),
            selection: None,
            target_units,
        }
    }

    /// Selects the first recipe, as a freshly opened calculator does.
    pub fn open(&mut self) -> Result<(), SessionError> {
        if self.alloys.is_empty() {
            return Err(SessionError::NoAlloysAvailable);
        }
        self.select_recipe(0)
    }

    /// Selects recipe `index` and starts a fresh allocation for it.
    pub fn select_recipe(&mut self, index: usize) -> Result<(), SessionError> {
        let recipe = self.alloys.get(index).ok_or(SessionError::UnknownRecipe {
            index,
            len: self.alloys.len(),
        })?;

        let ingredients = recipe.sorted_ingredients();
        let allocation =
            AllocationState::initialized(ingredients.iter().map(AlloyIngredient::bounds));

        tracing::debug!(
            recipe = %recipe.code,
            channels = ingredients.len(),
            "recipe selected"
        );

        self.selection = Some(Selection {
            recipe_index: index,
            ingredients,
            allocation,
        });
        Ok(())
    }

    /// Handles a dropdown value. Values that are not a valid recipe index are
    /// ignored; returns whether the selection changed.
    pub fn select_recipe_code(&mut self, value: &str) -> bool {
        match value.trim().parse::<usize>() {
            Ok(index) => self.select_recipe(index).is_ok(),
            Err(_) => false,
        }
    }

    /// Handles the target quantity input. Only positive integers are
    /// accepted; returns whether the target changed.
    pub fn set_target_units(&mut self, value: &str) -> bool {
        match value.trim().parse::<u32>() {
            Ok(units) if units > 0 => {
                self.target_units = units;
                tracing::debug!(units, "target changed");
                true
            }
            _ => false,
        }
    }

    /// Applies a slider edit to channel `index`.
    pub fn edit_channel(
        &mut self,
        index: usize,
        value: u32,
    ) -> Result<NormalizeOutcome, SessionError> {
        let clamp = self.config.clamp_edits;
        let selection = self.selection.as_mut().ok_or(SessionError::NoSelection)?;
        let outcome = if clamp {
            selection.allocation.set_channel_clamped(index, value)?
        } else {
            selection.allocation.set_channel(index, value)?
        };
        Ok(outcome)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Recipes offered by this session, in display order.
    pub fn alloys(&self) -> &[AlloyRecipe] {
        &self.alloys
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.as_ref().map(|s| s.recipe_index)
    }

    pub fn selected_recipe(&self) -> Option<&AlloyRecipe> {
        self.selected_index().and_then(|index| self.alloys.get(index))
    }

    pub fn allocation(&self) -> Option<&AllocationState> {
        self.selection.as_ref().map(|s| &s.allocation)
    }

    pub fn target(&self) -> Target {
        Target::new(self.target_units, self.config.units_per_item)
    }

    /// Per-channel output for the current selection; empty without one.
    pub fn views(&self) -> Vec<ChannelView> {
        let Some(selection) = &self.selection else {
            return Vec::new();
        };
        let target = self.target();

        selection
            .ingredients
            .iter()
            .zip(selection.allocation.channels())
            .map(|(ingredient, channel)| {
                let count = target.resolve(channel);
                ChannelView {
                    index: channel.index(),
                    name: ingredient.display_name().to_owned(),
                    bounds: channel.bounds(),
                    percent: channel.current(),
                    count,
                    item_code: (count > 0).then(|| ingredient.discrete_item_code()),
                }
            })
            .collect()
    }

    /// Captures the current selection for a [`crate::SessionCache`].
    pub fn snapshot(&self) -> Option<CachedSession> {
        let selection = self.selection.as_ref()?;
        let recipe = self.alloys.get(selection.recipe_index)?;
        Some(CachedSession {
            recipe_code: recipe.code.clone(),
            allocation: selection.allocation.clone(),
            target_units: self.target_units,
        })
    }

    /// Reinstates a cached selection.
    ///
    /// The recipe is looked up by code, and the cached allocation must have
    /// been built for that recipe's current channel bounds. On any mismatch the
    /// session is left untouched and false is returned.
    pub fn restore(&mut self, cached: &CachedSession) -> bool {
        let Some(index) = self
            .alloys
            .iter()
            .position(|recipe| recipe.code == cached.recipe_code)
        else {
            tracing::debug!(recipe = %cached.recipe_code, "cached recipe no longer offered");
            return false;
        };

        let recipe = &self.alloys[index];
        if !cached.allocation.matches_bounds(&recipe.channel_bounds()) {
            tracing::debug!(recipe = %cached.recipe_code, "cached allocation is stale");
            return false;
        }

        self.selection = Some(Selection {
            recipe_index: index,
            ingredients: recipe.sorted_ingredients(),
            allocation: cached.allocation.clone(),
        });
        if cached.target_units > 0 {
            self.target_units = cached.target_units;
        }
        tracing::debug!(recipe = %cached.recipe_code, "cached selection restored");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AlloyCatalog {
        AlloyCatalog::new(vec![
            AlloyRecipe::new(
                "ingot-tinbronze",
                vec![
                    AlloyIngredient::new("ingot-copper", 0.88, 0.92),
                    AlloyIngredient::new("ingot-tin", 0.08, 0.12),
                ],
            ),
            AlloyRecipe::new(
                "ingot-bismuthbronze",
                vec![
                    AlloyIngredient::new("ingot-copper", 0.5, 0.7),
                    AlloyIngredient::new("ingot-zinc", 0.2, 0.3),
                    AlloyIngredient::new("ingot-bismuth", 0.1, 0.2),
                ],
            ),
        ])
    }

    fn opened() -> CalculatorSession {
        let mut session = CalculatorSession::new(&catalog(), CalculatorConfig::default());
        session.open().unwrap();
        session
    }

    #[test]
    fn open_selects_first_recipe_by_name() {
        let session = opened();

        assert_eq!(session.selected_recipe().unwrap().code, "ingot-bismuthbronze");
        let names: Vec<String> = session.views().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["bismuth", "copper", "zinc"]);
    }

    #[test]
    fn open_without_alloys_fails() {
        let mut session = CalculatorSession::new(
            &AlloyCatalog::default(),
            CalculatorConfig::default(),
        );
        assert_eq!(session.open(), Err(SessionError::NoAlloysAvailable));
        assert!(session.views().is_empty());
    }

    #[test]
    fn views_resolve_counts_for_the_target() {
        let mut session = opened();
        assert!(session.select_recipe_code("1"));

        let views = session.views();
        assert_eq!(views[0].percent, 90);
        assert_eq!(views[0].count, 18);
        assert_eq!(views[0].item_code.as_deref(), Some("metalbit-copper"));
        assert_eq!(views[1].count, 2);

        assert!(session.set_target_units("500"));
        assert_eq!(session.views()[0].count, 90);
    }

    #[test]
    fn invalid_inputs_are_ignored() {
        let mut session = opened();

        assert!(!session.select_recipe_code("7"));
        assert!(!session.select_recipe_code("bronze"));
        assert!(!session.set_target_units("0"));
        assert!(!session.set_target_units("-20"));
        assert!(!session.set_target_units("lots"));

        assert_eq!(session.selected_index(), Some(0));
        assert_eq!(session.target().total_units, CalculatorConfig::DEFAULT_TARGET_UNITS);
    }

    #[test]
    fn edits_rebalance_other_channels() {
        let mut session = opened();
        // bismuth 15, copper 60, zinc 25
        session.edit_channel(1, 70).unwrap();

        let allocation = session.allocation().unwrap();
        assert_eq!(allocation.percents()[1], 70);
        assert!(allocation.is_balanced());
        assert!(allocation.channels().iter().all(|c| c.in_bounds()));
    }

    #[test]
    fn edit_errors_surface() {
        let mut session = CalculatorSession::new(&catalog(), CalculatorConfig::default());
        assert_eq!(session.edit_channel(0, 10), Err(SessionError::NoSelection));

        session.open().unwrap();
        let err = session.edit_channel(9, 10).unwrap_err();
        assert_eq!(err.error_code(), "ALLOCATION_UNKNOWN_CHANNEL");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn restore_reuses_matching_allocation() {
        let mut session = opened();
        session.edit_channel(1, 70).unwrap();
        session.set_target_units("250");
        let cached = session.snapshot().unwrap();

        let mut reopened = opened();
        assert!(reopened.restore(&cached));
        assert_eq!(reopened.allocation(), session.allocation());
        assert_eq!(reopened.target().total_units, 250);
    }

    #[test]
    fn restore_discards_stale_allocation() {
        let mut session = opened();
        let mut cached = session.snapshot().unwrap();
        cached.allocation = AllocationState::initialized([PercentBounds::full()]);
        cached.target_units = 900;

        assert!(session.select_recipe_code("1"));
        assert!(session.set_target_units("250"));
        let before = session.allocation().cloned();

        assert!(!session.restore(&cached));
        assert_eq!(session.selected_index(), Some(1));
        assert_eq!(session.target().total_units, 250);
        assert_eq!(session.allocation().cloned(), before);
    }

    #[test]
    fn restore_ignores_unknown_recipe() {
        let mut session = opened();
        let mut cached = session.snapshot().unwrap();
        cached.recipe_code = "ingot-electrum".to_owned();

        assert!(!session.restore(&cached));
        assert_eq!(session.selected_index(), Some(0));
    }
}
