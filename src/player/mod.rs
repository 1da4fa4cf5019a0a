//! Player record and XP bookkeeping

pub mod achievements;
pub mod store;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder name for a player who has not introduced themselves yet
pub const DEFAULT_NAME: &str = "Analyst";

/// The persisted player record: a name and per-category experience points.
///
/// XP only ever goes up, in fixed increments, so the values stay non-negative
/// by construction. The map is ordered so the persisted document and the
/// end-of-session summary come out in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    pub name: String,
    /// Experience points per category
    #[serde(default)]
    pub xp: BTreeMap<String, u32>,
}

impl Default for Player {
    fn default() -> Self {
        Self { name: DEFAULT_NAME.to_string(), xp: BTreeMap::new() }
    }
}

impl Player {
    /// Whether the player still carries the default placeholder name
    pub fn has_default_name(&self) -> bool {
        self.name == DEFAULT_NAME
    }

    /// Add XP to a category, returning the category's new total
    pub fn award(&mut self, category: &str, amount: u32) -> u32 {
        let total = self.xp.entry(category.to_string()).or_insert(0);
        *total += amount;
        *total
    }

    /// Sum of XP across all categories
    pub fn total_xp(&self) -> u32 {
        self.xp.values().sum()
    }
}
