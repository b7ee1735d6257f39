//! Consumables and cosmetics sold for coins or diamonds. Buying one only
//! debits the balance; there is no inventory yet.

use crate::upgrades::{Cost, Currency};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopCategory {
    PowerUps,
    Boosters,
    Characters,
    Trails,
}

impl ShopCategory {
    pub const ALL: [ShopCategory; 4] = [
        ShopCategory::PowerUps,
        ShopCategory::Boosters,
        ShopCategory::Characters,
        ShopCategory::Trails,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShopCategory::PowerUps => "Power-ups",
            ShopCategory::Boosters => "Boosters",
            ShopCategory::Characters => "Characters",
            ShopCategory::Trails => "Trails",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn color(self) -> &'static str {
        match self {
            Rarity::Common => "#8b949e",
            Rarity::Rare => "#58a6ff",
            Rarity::Epic => "#a371f7",
            Rarity::Legendary => "#d4af37",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Cost,
    pub category: ShopCategory,
    pub rarity: Rarity,
}

const fn item(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    currency: Currency,
    amount: u64,
    category: ShopCategory,
    rarity: Rarity,
) -> ShopItem {
    ShopItem {
        id,
        name,
        description,
        price: Cost { currency, amount },
        category,
        rarity,
    }
}

use Currency::{Coins, Diamonds};
use ShopCategory::{Boosters, Characters, PowerUps, Trails};

#[rustfmt::skip]
pub static SHOP_ITEMS: [ShopItem; 11] = [
    item("speed_boost", "Speed Boost", "Increases your running speed for a limited time", Coins, 100, PowerUps, Rarity::Common),
    item("coin_magnet", "Coin Magnet", "Automatically attracts all coins in a large radius", Coins, 150, PowerUps, Rarity::Common),
    item("shield_protection", "Shield Protection", "Protects you from one obstacle collision", Coins, 200, PowerUps, Rarity::Rare),
    item("diamond_rush", "Diamond Rush", "Converts all coins to diamonds temporarily", Diamonds, 5, PowerUps, Rarity::Epic),
    item("double_coins", "2x Coin Booster", "Double coin collection for your next game", Coins, 50, Boosters, Rarity::Common),
    item("score_multiplier", "Score Multiplier", "Increases score by 50% for your next game", Diamonds, 3, Boosters, Rarity::Rare),
    item("lucky_start", "Lucky Start", "Begin your next game with 3 power-ups active", Diamonds, 8, Boosters, Rarity::Epic),
    item("cyber_runner", "Cyber Runner", "Futuristic character with neon trails", Diamonds, 25, Characters, Rarity::Legendary),
    item("ninja_dash", "Ninja Dash", "Stealthy character with enhanced jump ability", Diamonds, 20, Characters, Rarity::Epic),
    item("fire_trail", "Fire Trail", "Leave a blazing trail behind you", Coins, 300, Trails, Rarity::Rare),
    item("rainbow_trail", "Rainbow Trail", "Colorful rainbow trail effect", Diamonds, 10, Trails, Rarity::Epic),
];

pub fn items_in(category: ShopCategory) -> impl Iterator<Item = &'static ShopItem> {
    SHOP_ITEMS.iter().filter(move |i| i.category == category)
}

pub fn find_item(id: &str) -> Option<&'static ShopItem> {
    SHOP_ITEMS.iter().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameAction, ProfilePatch};
    use crate::store::GameStore;
    use crate::upgrades::{PurchaseError, purchase_item_actions};

    #[test]
    fn every_category_has_items() {
        for category in ShopCategory::ALL {
            assert!(items_in(category).count() > 0, "{}", category.label());
        }
        assert_eq!(items_in(PowerUps).count(), 4);
    }

    #[test]
    fn buying_an_item_debits_its_currency() {
        let mut store = GameStore::new();
        store
            .dispatch(GameAction::UpdateProfile(ProfilePatch {
                coins: Some(120),
                diamonds: Some(4),
                ..Default::default()
            }))
            .unwrap();

        let boost = find_item("speed_boost").unwrap();
        let actions = purchase_item_actions(&store.state(), boost.price).unwrap();
        store.dispatch_all(actions).unwrap();
        assert_eq!(store.state().player.coins, 20);
        assert_eq!(store.state().player.diamonds, 4);

        let rush = find_item("diamond_rush").unwrap();
        assert_eq!(
            purchase_item_actions(&store.state(), rush.price),
            Err(PurchaseError::Insufficient { currency: Diamonds, needed: 5, available: 4 })
        );
    }
}
