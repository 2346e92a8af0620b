use serde::{Deserialize, Serialize};

/// Unique identifier for figures, assigned from a counter owned by the state
pub type FigureId = u32;

/// Figure rarity, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Fixed rarity -> power table
    pub fn base_power(self) -> i32 {
        match self {
            Rarity::Common => 10,
            Rarity::Rare => 20,
            Rarity::Epic => 35,
            Rarity::Legendary => 50,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// The fixed set of figure molds a mystery box can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FigureKind {
    Pop,
    Deluxe,
    Exclusive,
    Chase,
    Limited,
}

impl FigureKind {
    pub const ALL: [FigureKind; 5] = [
        FigureKind::Pop,
        FigureKind::Deluxe,
        FigureKind::Exclusive,
        FigureKind::Chase,
        FigureKind::Limited,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Pop => "Pop",
            FigureKind::Deluxe => "Deluxe",
            FigureKind::Exclusive => "Exclusive",
            FigureKind::Chase => "Chase",
            FigureKind::Limited => "Limited",
        }
    }
}

/// A collectible figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    pub id: FigureId,
    pub kind: FigureKind,
    pub rarity: Rarity,
    pub level: u32,
    pub power: i32,
    pub health: i32,
}

impl Figure {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

/// Mystery box purchase tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoxTier {
    Common,
    Rare,
    Legendary,
}

impl BoxTier {
    pub const ALL: [BoxTier; 3] = [BoxTier::Common, BoxTier::Rare, BoxTier::Legendary];

    /// Fixed price in coins
    pub fn price(self) -> u64 {
        match self {
            BoxTier::Common => 100,
            BoxTier::Rare => 250,
            BoxTier::Legendary => 500,
        }
    }

    /// Rarities this tier can reveal, uniform choice
    pub fn rarity_pool(self) -> &'static [Rarity] {
        match self {
            BoxTier::Common => &[Rarity::Common, Rarity::Rare],
            BoxTier::Rare => &[Rarity::Rare, Rarity::Epic],
            BoxTier::Legendary => &[Rarity::Epic, Rarity::Legendary],
        }
    }

    /// Parse the tier key carried by the store buttons (`data-tier`)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "common" => Some(BoxTier::Common),
            "rare" => Some(BoxTier::Rare),
            "legendary" => Some(BoxTier::Legendary),
            _ => None,
        }
    }
}
