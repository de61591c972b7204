//! Character definitions - passives and ultimates.
//!
//! Characters are pure data: a hit point total, a set of passive traits,
//! and an ultimate described as an ordered list of effect primitives.
//! The rules modules query passives and walk ultimate scripts; adding a
//! character never touches their control flow.

use serde::{Deserialize, Serialize};

/// Unique identifier for a character definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// An always-on character trait.
///
/// Passives are consulted at fixed points by the rules modules; the
/// variants form a closed set so every consultation site is checkable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Passive {
    /// Distance to every other player is always 1.
    DistanceAlwaysOne,
    /// Distance from this player to others is reduced by 1.
    DistanceMinusOne,
    /// Others' distance to this player is raised by 1 (with >2 alive).
    OthersDistancePlusOne,
    /// Attack range is raised by 1 regardless of weapon.
    AttackRangePlusOne,
    /// Attacks ignore armor-granted immunity.
    PierceArmor,
    /// Draw one extra card in the draw phase while at 2 hp or less.
    ExtraDrawWhenHurt,
    /// Attack and fire-scroll damage is raised by 1.
    DamageBoost,
    /// Heal cards restore one extra hp.
    HealBoost,
    /// Begins the game with a conjured iron vest equipped.
    StartsArmored,
    /// At game start every other player loses 1 hp (floored at 1).
    OpeningShockwave,
}

/// Shape of an ultimate: what it is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UltimateKind {
    /// Aimed at one chosen opponent.
    Target,
    /// Affects only the caster.
    SelfCast,
    /// Hits every other living player.
    Aoe,
    /// Touches the whole table.
    Global,
}

/// Activation predicate for an ultimate, evaluated over the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UltimateCondition {
    HpAtMost(i32),
    HandAtLeast(usize),
    /// Current hp below maximum.
    Wounded,
    HasWeapon,
    HasArmor,
}

/// One step of an ultimate script.
///
/// Each op maps onto an effect-resolution primitive; scripts run their
/// ops in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UltimateOp {
    /// Damage the chosen target.
    DamageTarget(i32),
    /// Damage every other living player.
    DamageOthers(i32),
    /// Damage every living player, caster included.
    DamageEveryone(i32),
    HealSelf(i32),
    HealSelfFull,
    DrawSelf(usize),
    /// Draw until the hand holds this many cards.
    DrawSelfUpTo(usize),
    /// The chosen target skips their next turn.
    SkipTargetTurn,
    /// Discard all of the target's equipment (skipped if the target fell).
    StripTargetEquipment,
    /// Every other living player discards up to this many cards.
    OthersDiscard(usize),
}

/// Cooldown applied when an ultimate fires.
pub const ULTIMATE_COOLDOWN: u8 = 10;

/// A character's ultimate ability.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ultimate {
    pub name: String,
    pub kind: UltimateKind,
    pub condition: UltimateCondition,
    pub script: Vec<UltimateOp>,
}

impl Ultimate {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: UltimateKind,
        condition: UltimateCondition,
        script: Vec<UltimateOp>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            condition,
            script,
        }
    }
}

/// Static character definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterDefinition {
    pub id: CharacterId,
    pub name: String,
    pub max_hp: i32,
    pub passives: Vec<Passive>,
    pub ultimate: Ultimate,
}

impl CharacterDefinition {
    /// Check whether this character has a given passive.
    #[must_use]
    pub fn has_passive(&self, passive: Passive) -> bool {
        self.passives.contains(&passive)
    }
}

/// Well-known character IDs for the standard roster.
pub mod character_ids {
    use super::CharacterId;

    pub const GALE: CharacterId = CharacterId::new(0);
    pub const STORM: CharacterId = CharacterId::new(1);
    pub const SHADE: CharacterId = CharacterId::new(2);
    pub const BLOSSOM: CharacterId = CharacterId::new(3);
    pub const DUNE: CharacterId = CharacterId::new(4);
    pub const RAVEN: CharacterId = CharacterId::new(5);
    pub const LOTUS: CharacterId = CharacterId::new(6);
    pub const HERMIT: CharacterId = CharacterId::new(7);
    pub const VIPER: CharacterId = CharacterId::new(8);
    pub const WARDEN: CharacterId = CharacterId::new(9);
    pub const ECLIPSE: CharacterId = CharacterId::new(10);
    pub const FLASH: CharacterId = CharacterId::new(11);
}

/// The standard twelve-character roster.
#[must_use]
pub fn standard_characters() -> Vec<CharacterDefinition> {
    use character_ids::*;
    use UltimateCondition as Cond;
    use UltimateKind as Kind;
    use UltimateOp as Op;

    vec![
        CharacterDefinition {
            id: GALE,
            name: "Gale".to_string(),
            max_hp: 4,
            passives: vec![Passive::ExtraDrawWhenHurt],
            ultimate: Ultimate::new(
                "Spiral Tempest",
                Kind::Target,
                Cond::HpAtMost(2),
                vec![Op::DamageTarget(2)],
            ),
        },
        CharacterDefinition {
            id: STORM,
            name: "Storm".to_string(),
            max_hp: 3,
            passives: vec![Passive::PierceArmor, Passive::AttackRangePlusOne],
            ultimate: Ultimate::new(
                "Thunder Field",
                Kind::Aoe,
                Cond::HandAtLeast(3),
                vec![Op::DamageOthers(1)],
            ),
        },
        CharacterDefinition {
            id: SHADE,
            name: "Shade".to_string(),
            max_hp: 4,
            passives: vec![Passive::DistanceMinusOne],
            ultimate: Ultimate::new(
                "Twin Piercer",
                Kind::Target,
                Cond::HasWeapon,
                vec![Op::DamageTarget(1), Op::StripTargetEquipment],
            ),
        },
        CharacterDefinition {
            id: BLOSSOM,
            name: "Blossom".to_string(),
            max_hp: 4,
            passives: vec![],
            ultimate: Ultimate::new(
                "Second Bloom",
                Kind::SelfCast,
                Cond::Wounded,
                vec![Op::HealSelfFull],
            ),
        },
        CharacterDefinition {
            id: DUNE,
            name: "Dune".to_string(),
            max_hp: 5,
            passives: vec![Passive::StartsArmored],
            ultimate: Ultimate::new(
                "Sand Tomb",
                Kind::Target,
                Cond::HasArmor,
                vec![Op::SkipTargetTurn, Op::DamageTarget(1)],
            ),
        },
        CharacterDefinition {
            id: RAVEN,
            name: "Raven".to_string(),
            max_hp: 3,
            passives: vec![Passive::DamageBoost],
            ultimate: Ultimate::new(
                "Black Flame",
                Kind::Target,
                Cond::HpAtMost(2),
                vec![Op::DamageTarget(2)],
            ),
        },
        CharacterDefinition {
            id: LOTUS,
            name: "Lotus".to_string(),
            max_hp: 5,
            passives: vec![Passive::HealBoost],
            ultimate: Ultimate::new(
                "Vital Surge",
                Kind::SelfCast,
                Cond::HpAtMost(3),
                vec![Op::DrawSelf(2), Op::HealSelf(2)],
            ),
        },
        CharacterDefinition {
            id: HERMIT,
            name: "Hermit".to_string(),
            max_hp: 4,
            passives: vec![],
            ultimate: Ultimate::new(
                "Wildfire Rain",
                Kind::Aoe,
                Cond::HandAtLeast(3),
                vec![Op::DamageOthers(1)],
            ),
        },
        CharacterDefinition {
            id: VIPER,
            name: "Viper".to_string(),
            max_hp: 3,
            passives: vec![],
            ultimate: Ultimate::new(
                "Shed Skin",
                Kind::SelfCast,
                Cond::HpAtMost(1),
                vec![Op::HealSelf(1), Op::DrawSelfUpTo(5)],
            ),
        },
        CharacterDefinition {
            id: WARDEN,
            name: "Warden".to_string(),
            max_hp: 5,
            passives: vec![Passive::OthersDistancePlusOne],
            ultimate: Ultimate::new(
                "Gravity Well",
                Kind::Global,
                Cond::HpAtMost(3),
                vec![Op::OthersDiscard(2)],
            ),
        },
        CharacterDefinition {
            id: ECLIPSE,
            name: "Eclipse".to_string(),
            max_hp: 4,
            passives: vec![Passive::OpeningShockwave],
            ultimate: Ultimate::new(
                "Falling Sky",
                Kind::Global,
                Cond::HpAtMost(2),
                vec![Op::DamageEveryone(1), Op::DrawSelf(3)],
            ),
        },
        CharacterDefinition {
            id: FLASH,
            name: "Flash".to_string(),
            max_hp: 3,
            passives: vec![Passive::DistanceAlwaysOne],
            ultimate: Ultimate::new(
                "Golden Streak",
                Kind::Target,
                Cond::HandAtLeast(3),
                vec![Op::DamageTarget(2)],
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_size() {
        assert_eq!(standard_characters().len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        let roster = standard_characters();
        for (i, a) in roster.iter().enumerate() {
            for b in roster.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "{} and {} share an id", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_hp_totals_are_sane() {
        for character in standard_characters() {
            assert!((3..=5).contains(&character.max_hp), "{}", character.name);
        }
    }

    #[test]
    fn test_target_ultimates_touch_the_target() {
        for character in standard_characters() {
            if character.ultimate.kind == UltimateKind::Target {
                let touches_target = character.ultimate.script.iter().any(|op| {
                    matches!(
                        op,
                        UltimateOp::DamageTarget(_)
                            | UltimateOp::SkipTargetTurn
                            | UltimateOp::StripTargetEquipment
                    )
                });
                assert!(touches_target, "{}", character.name);
            }
        }
    }

    #[test]
    fn test_has_passive() {
        let roster = standard_characters();
        let flash = roster
            .iter()
            .find(|c| c.id == character_ids::FLASH)
            .unwrap();
        assert!(flash.has_passive(Passive::DistanceAlwaysOne));
        assert!(!flash.has_passive(Passive::PierceArmor));
    }
}
