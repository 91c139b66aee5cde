use crate::recipe::first_code_part;

/// What a firepit is currently heating, judged by its input stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FirepitKind {
    #[default]
    None,
    Crucible,
    CookingPot,
}

impl FirepitKind {
    /// Classifies the firepit by the first code segment of its input stack.
    pub fn classify(input_code: Option<&str>) -> Self {
        match input_code.map(first_code_part) {
            Some("crucible") => Self::Crucible,
            Some("claypot") => Self::CookingPot,
            _ => Self::None,
        }
    }

    /// The alloy calculator is attached only to crucibles.
    pub const fn offers_calculator(&self) -> bool {
        matches!(self, Self::Crucible)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Crucible => "crucible",
            Self::CookingPot => "cooking_pot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_first_code_part() {
        assert_eq!(
            FirepitKind::classify(Some("crucible-burned")),
            FirepitKind::Crucible
        );
        assert_eq!(
            FirepitKind::classify(Some("claypot-blue-burned")),
            FirepitKind::CookingPot
        );
        assert_eq!(FirepitKind::classify(Some("bowl-fired")), FirepitKind::None);
        assert_eq!(FirepitKind::classify(None), FirepitKind::None);
    }

    #[test]
    fn only_crucibles_offer_the_calculator() {
        assert!(FirepitKind::Crucible.offers_calculator());
        assert!(!FirepitKind::CookingPot.offers_calculator());
        assert!(!FirepitKind::None.offers_calculator());
    }
}
