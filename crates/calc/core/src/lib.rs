//! Deterministic alloy-ratio logic shared by every calculator front end.
//!
//! `alloy-calc-core` keeps a set of ingredient percentages summing to 100 while
//! the player drags one slider at a time, and converts each share of a target
//! melt into whole metal bits. The host engine owns rendering, input and world
//! access; it feeds events into a [`CalculatorSession`] and reads back
//! [`ChannelView`]s.
pub mod allocation;
pub mod cache;
pub mod config;
pub mod error;
pub mod firepit;
pub mod material;
pub mod recipe;
pub mod resolve;
pub mod session;

pub use allocation::{
    AllocationError, AllocationState, Channel, Direction, NormalizeOutcome, PercentBounds,
};
pub use cache::{BlockPos, CachedSession, SessionCache};
pub use config::CalculatorConfig;
pub use error::{CalcError, ErrorSeverity};
pub use firepit::FirepitKind;
pub use material::{MaterialIndex, MaterialSource};
pub use recipe::{AlloyCatalog, AlloyIngredient, AlloyRecipe, material_variant};
pub use resolve::{Target, resolve_count};
pub use session::{CalculatorSession, ChannelView, SessionError};
