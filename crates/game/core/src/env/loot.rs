use crate::state::{Item, ItemKind};

/// Oracle providing the items monsters can drop.
pub trait LootOracle: Send + Sync {
    /// Droppable items in a stable order. An empty slice disables drops.
    fn items(&self) -> &[Item];
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootTable {
    pub items: Vec<Item>,
}

impl LootTable {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Built-in drop table.
    pub fn standard() -> Self {
        Self::new(vec![
            Item::new(ItemKind::Weapon, "Short Sword"),
            Item::new(ItemKind::Weapon, "War Axe"),
            Item::new(ItemKind::Armor, "Leather Armor"),
            Item::new(ItemKind::Armor, "Chain Mail"),
            Item::new(ItemKind::Accessory, "Copper Ring"),
            Item::new(ItemKind::Accessory, "Bone Amulet"),
            Item::new(ItemKind::Consumable, "Healing Potion"),
            Item::new(ItemKind::Consumable, "Mana Potion"),
        ])
    }
}

impl LootOracle for LootTable {
    fn items(&self) -> &[Item] {
        &self.items
    }
}
