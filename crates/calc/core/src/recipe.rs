//! Alloy recipes and material codes.
//!
//! Material codes are dash-separated, with the material variant last:
//! `ingot-copper` names copper, `ingot-tinbronze` names tin bronze.

use crate::allocation::PercentBounds;

/// Code prefix of the discrete item an ingredient is measured in.
pub const DISCRETE_ITEM_PREFIX: &str = "metalbit";

/// Last dash-separated segment of a material code.
pub fn material_variant(code: &str) -> &str {
    code.rsplit_once('-').map_or(code, |(_, variant)| variant)
}

/// First dash-separated segment of a material code.
pub fn first_code_part(code: &str) -> &str {
    code.split_once('-').map_or(code, |(first, _)| first)
}

/// One metal of an alloy with its allowed share of the melt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlloyIngredient {
    /// Material code of the ingredient ingot, e.g. `ingot-copper`.
    pub code: String,
    /// Lowest allowed fraction, `0.0..=1.0`.
    pub min_ratio: f64,
    /// Highest allowed fraction, `0.0..=1.0`.
    pub max_ratio: f64,
}

impl AlloyIngredient {
    pub fn new(code: impl Into<String>, min_ratio: f64, max_ratio: f64) -> Self {
        Self {
            code: code.into(),
            min_ratio,
            max_ratio,
        }
    }

    pub fn display_name(&self) -> &str {
        material_variant(&self.code)
    }

    /// Ratio range expressed as whole percentages.
    pub fn bounds(&self) -> PercentBounds {
        PercentBounds::from_ratios(self.min_ratio, self.max_ratio)
    }

    /// Code of the discrete item that supplies this metal, e.g. `metalbit-copper`.
    pub fn discrete_item_code(&self) -> String {
        format!("{DISCRETE_ITEM_PREFIX}-{}", self.display_name())
    }
}

/// An alloy and the metals it is smelted from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlloyRecipe {
    /// Material code of the output ingot, e.g. `ingot-tinbronze`.
    pub code: String,
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
    pub ingredients: Vec<AlloyIngredient>,
}

#[cfg(feature = "serde")]
fn enabled_by_default() -> bool {
    true
}

impl AlloyRecipe {
    pub fn new(code: impl Into<String>, ingredients: Vec<AlloyIngredient>) -> Self {
        Self {
            code: code.into(),
            enabled: true,
            ingredients,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn display_name(&self) -> &str {
        material_variant(&self.code)
    }

    /// Enabled and has at least one ingredient.
    pub fn is_selectable(&self) -> bool {
        self.enabled && !self.ingredients.is_empty()
    }

    /// Ingredients ordered by display name. Channel indices follow this order.
    pub fn sorted_ingredients(&self) -> Vec<AlloyIngredient> {
        let mut ingredients = self.ingredients.clone();
        ingredients.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        ingredients
    }

    /// Percent bounds for each channel, in channel order.
    pub fn channel_bounds(&self) -> Vec<PercentBounds> {
        self.sorted_ingredients()
            .iter()
            .map(AlloyIngredient::bounds)
            .collect()
    }
}

/// Every alloy recipe known to the host.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlloyCatalog {
    pub alloys: Vec<AlloyRecipe>,
}

impl AlloyCatalog {
    pub fn new(alloys: Vec<AlloyRecipe>) -> Self {
        Self { alloys }
    }

    /// Recipes the calculator can offer, ordered by display name.
    pub fn selectable(&self) -> Vec<AlloyRecipe> {
        let mut alloys: Vec<AlloyRecipe> = self
            .alloys
            .iter()
            .filter(|recipe| recipe.is_selectable())
            .cloned()
            .collect();
        alloys.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        alloys
    }

    pub fn find(&self, code: &str) -> Option<&AlloyRecipe> {
        self.alloys.iter().find(|recipe| recipe.code == code)
    }

    pub fn len(&self) -> usize {
        self.alloys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alloys.is_empty()
    }
}
