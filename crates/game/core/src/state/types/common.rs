use core::fmt;

macro_rules! session_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

session_id!(
    /// Session-scoped identifier of a player character.
    CharacterId
);
session_id!(
    /// Session-scoped identifier of a generated dungeon.
    DungeonId
);
session_id!(
    /// Identifier of a monster, unique across every dungeon of a session.
    MonsterId
);

/// Integer resource meter (life, mana, monster health).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Removes `amount`, clamped at zero. Returns the new current value.
    pub fn drain(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Changes the maximum without refilling; current is clamped to the new maximum.
    pub fn set_maximum(&mut self, maximum: u32) {
        self.maximum = maximum;
        self.current = self.current.min(maximum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_clamps_at_zero() {
        let mut meter = ResourceMeter::full(10);
        assert_eq!(meter.drain(4), 6);
        assert_eq!(meter.drain(40), 0);
        assert!(meter.is_depleted());
    }

    #[test]
    fn raising_maximum_does_not_refill() {
        let mut meter = ResourceMeter::new(5, 10);
        meter.set_maximum(20);
        assert_eq!(meter, ResourceMeter::new(5, 20));
        meter.set_maximum(3);
        assert_eq!(meter, ResourceMeter::new(3, 3));
    }

    #[test]
    fn ids_display_with_hash_prefix() {
        assert_eq!(CharacterId(3).to_string(), "#3");
        assert_eq!(MonsterId(12).to_string(), "#12");
    }
}
