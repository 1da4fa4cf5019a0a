//! Achievement badges derived from a player record
//!
//! Achievements are never stored; they are recomputed from the XP map every
//! time they are needed.

use std::fmt;

use crate::bank::BOSS_CATEGORY;
use crate::player::Player;

/// "Boss" XP required for Boss Slayer (three defeated bosses)
pub const BOSS_SLAYER_XP: u32 = 60;
/// Minimum XP every present category must hold for Sharp Mind
pub const SHARP_MIND_CATEGORY_XP: u32 = 10;
/// Distinct categories required for Master of Domains
pub const MASTER_OF_DOMAINS_CATEGORIES: usize = 8;
/// Total XP required for Veteran Analyst
pub const VETERAN_ANALYST_XP: u32 = 500;

/// A badge a player can earn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    BossSlayer,
    SharpMind,
    MasterOfDomains,
    VeteranAnalyst,
}

impl Achievement {
    /// Short label, as written into the save file
    pub fn label(self) -> &'static str {
        match self {
            Achievement::BossSlayer => "Boss Slayer",
            Achievement::SharpMind => "Sharp Mind",
            Achievement::MasterOfDomains => "Master of Domains",
            Achievement::VeteranAnalyst => "Veteran Analyst",
        }
    }

    /// Icon shown next to the badge in the terminal report
    pub fn icon(self) -> &'static str {
        match self {
            Achievement::BossSlayer => "👑",
            Achievement::SharpMind => "🧠",
            Achievement::MasterOfDomains => "🌐",
            Achievement::VeteranAnalyst => "💼",
        }
    }

    /// One-line description for the terminal report
    pub fn describe(self) -> &'static str {
        match self {
            Achievement::BossSlayer => "Defeated all bosses",
            Achievement::SharpMind => "No incorrect answers",
            Achievement::MasterOfDomains => "XP gained in all major categories",
            Achievement::VeteranAnalyst => "500+ XP earned",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the badges earned by `player`, in fixed evaluation order.
///
/// Rules are independent; any subset may fire. Sharp Mind is judged from the
/// XP map alone (every present category at 10 or more), so an empty map
/// passes it vacuously.
pub fn evaluate(player: &Player) -> Vec<Achievement> {
    let mut earned = Vec::new();

    if player.xp.get(BOSS_CATEGORY).is_some_and(|&xp| xp >= BOSS_SLAYER_XP) {
        earned.push(Achievement::BossSlayer);
    }
    if player.xp.values().all(|&xp| xp >= SHARP_MIND_CATEGORY_XP) {
        earned.push(Achievement::SharpMind);
    }
    if player.xp.len() >= MASTER_OF_DOMAINS_CATEGORIES {
        earned.push(Achievement::MasterOfDomains);
    }
    if player.total_xp() >= VETERAN_ANALYST_XP {
        earned.push(Achievement::VeteranAnalyst);
    }

    earned
}
