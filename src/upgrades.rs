//! Upgrade catalog, pricing and purchase planning.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{
    GameAction, GameError, GameState, PlayerProfile, ProfilePatch, Skill, UpgradeLevels,
};
use crate::store::GameStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Currency {
    Coins,
    Diamonds,
}

impl Currency {
    pub fn label(self) -> &'static str {
        match self {
            Currency::Coins => "coins",
            Currency::Diamonds => "diamonds",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub currency: Currency,
    pub amount: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpgradeDef {
    pub skill: Skill,
    pub name: &'static str,
    pub description: &'static str,
    pub effect: &'static str,
    pub max_level: u32,
    pub currency: Currency,
    pub base_cost: u64,
}

pub static UPGRADE_DEFS: [UpgradeDef; 5] = [
    UpgradeDef {
        skill: Skill::Speed,
        name: "Speed Boost",
        description: "Increases your running speed and agility",
        effect: "+20% speed per level",
        max_level: 10,
        currency: Currency::Coins,
        base_cost: 500,
    },
    UpgradeDef {
        skill: Skill::Magnetism,
        name: "Coin Magnet",
        description: "Attracts coins from a larger distance",
        effect: "+1m attraction radius per level",
        max_level: 8,
        currency: Currency::Coins,
        base_cost: 750,
    },
    UpgradeDef {
        skill: Skill::CoinMultiplier,
        name: "Coin Multiplier",
        description: "Increases coins earned per collection",
        effect: "+50% coin value per level",
        max_level: 5,
        currency: Currency::Diamonds,
        base_cost: 5,
    },
    UpgradeDef {
        skill: Skill::Shield,
        name: "Shield Power",
        description: "Provides protection against obstacles",
        effect: "+1 hit protection per level",
        max_level: 3,
        currency: Currency::Diamonds,
        base_cost: 10,
    },
    UpgradeDef {
        skill: Skill::Jump,
        name: "Jump Height",
        description: "Increases jump height and duration",
        effect: "+25% jump height per level",
        max_level: 7,
        currency: Currency::Coins,
        base_cost: 600,
    },
];

/// One-time unlock price of the double jump.
pub const DOUBLE_JUMP_COST: Cost = Cost {
    currency: Currency::Diamonds,
    amount: 25,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    #[error("{0} is already at its maximum level")]
    MaxLevel(Skill),
    #[error("not enough {currency}: need {needed}, have {available}")]
    Insufficient {
        currency: Currency,
        needed: u64,
        available: u64,
    },
    #[error(transparent)]
    Rejected(#[from] GameError),
}

pub fn upgrade_def(skill: Skill) -> Option<&'static UpgradeDef> {
    UPGRADE_DEFS.iter().find(|d| d.skill == skill)
}

/// `floor(base * 1.5^(level - 1))`, computed in integers.
pub fn cost_at(def: &UpgradeDef, level: u32) -> u64 {
    let steps = level.saturating_sub(1);
    let mut num = u128::from(def.base_cost);
    let mut den: u128 = 1;
    for _ in 0..steps {
        num = num.saturating_mul(3);
        den = den.saturating_mul(2);
    }
    u64::try_from(num / den).unwrap_or(u64::MAX)
}

/// Price of the next level, or `None` when nothing is left to buy.
pub fn next_cost(levels: &UpgradeLevels, skill: Skill) -> Option<Cost> {
    if skill == Skill::DoubleJump {
        return (!levels.double_jump_unlocked).then_some(DOUBLE_JUMP_COST);
    }
    let def = upgrade_def(skill)?;
    let level = levels.level(skill);
    (level < def.max_level).then(|| Cost {
        currency: def.currency,
        amount: cost_at(def, level),
    })
}

pub fn balance(profile: &PlayerProfile, currency: Currency) -> u64 {
    match currency {
        Currency::Coins => profile.coins,
        Currency::Diamonds => profile.diamonds,
    }
}

pub fn can_afford(profile: &PlayerProfile, cost: Cost) -> bool {
    balance(profile, cost.currency) >= cost.amount
}

/// Upgrade levels bought so far; the double jump counts as one.
pub fn total_upgrade_points(levels: &UpgradeLevels) -> u32 {
    Skill::ALL
        .iter()
        .map(|&s| match s {
            Skill::DoubleJump => levels.level(s),
            _ => levels.level(s).saturating_sub(1),
        })
        .sum()
}

fn debit(profile: &PlayerProfile, cost: Cost) -> Result<GameAction, PurchaseError> {
    let available = balance(profile, cost.currency);
    let remaining = available
        .checked_sub(cost.amount)
        .ok_or(PurchaseError::Insufficient {
            currency: cost.currency,
            needed: cost.amount,
            available,
        })?;
    let patch = match cost.currency {
        Currency::Coins => ProfilePatch { coins: Some(remaining), ..Default::default() },
        Currency::Diamonds => ProfilePatch { diamonds: Some(remaining), ..Default::default() },
    };
    Ok(GameAction::UpdateProfile(patch))
}

/// Actions that pay for and apply the next level of `skill`: a debit followed
/// by a one-step `UpgradeSkill`.
pub fn purchase_upgrade_actions(
    state: &GameState,
    skill: Skill,
) -> Result<Vec<GameAction>, PurchaseError> {
    let cost = next_cost(&state.upgrades, skill).ok_or(PurchaseError::MaxLevel(skill))?;
    let level = state.upgrades.level(skill) + 1;
    let actions = vec![
        debit(&state.player, cost)?,
        GameAction::UpgradeSkill { skill, level },
    ];
    // dry run so a caller dispatching one by one never half-applies
    actions
        .iter()
        .cloned()
        .try_fold(state.clone(), |s, a| s.apply(a))?;
    Ok(actions)
}

pub fn purchase_item_actions(
    state: &GameState,
    price: Cost,
) -> Result<Vec<GameAction>, PurchaseError> {
    Ok(vec![debit(&state.player, price)?])
}

pub fn purchase_upgrade(store: &mut GameStore, skill: Skill) -> Result<(), PurchaseError> {
    let actions = purchase_upgrade_actions(&store.state(), skill)?;
    store.dispatch_all(actions)?;
    Ok(())
}

pub fn purchase_item(store: &mut GameStore, price: Cost) -> Result<(), PurchaseError> {
    let actions = purchase_item_actions(&store.state(), price)?;
    store.dispatch_all(actions)?;
    Ok(())
}
