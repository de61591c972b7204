//! Per-seat player state.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardKind, CharacterId, InstanceId, PlayingCard};

/// Seat index identifying a player. Seat 0 is the human in a standard
/// game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// The four equipment slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    OffenseMount,
    DefenseMount,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 4] = [
        EquipSlot::Weapon,
        EquipSlot::Armor,
        EquipSlot::OffenseMount,
        EquipSlot::DefenseMount,
    ];

    /// Which slot an equipment card occupies, if any.
    #[must_use]
    pub const fn for_kind(kind: CardKind) -> Option<EquipSlot> {
        match kind {
            CardKind::EquipWeapon => Some(EquipSlot::Weapon),
            CardKind::EquipArmor => Some(EquipSlot::Armor),
            CardKind::EquipOffenseMount => Some(EquipSlot::OffenseMount),
            CardKind::EquipDefenseMount => Some(EquipSlot::DefenseMount),
            _ => None,
        }
    }
}

/// A player's equipment: at most one card per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<PlayingCard>,
    pub armor: Option<PlayingCard>,
    pub offense_mount: Option<PlayingCard>,
    pub defense_mount: Option<PlayingCard>,
}

impl Equipment {
    /// Access a slot by name.
    #[must_use]
    pub fn slot(&self, slot: EquipSlot) -> Option<&PlayingCard> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
            EquipSlot::OffenseMount => self.offense_mount.as_ref(),
            EquipSlot::DefenseMount => self.defense_mount.as_ref(),
        }
    }

    /// Put a card into a slot, returning the displaced occupant.
    pub fn set(&mut self, slot: EquipSlot, card: PlayingCard) -> Option<PlayingCard> {
        let cell = match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::OffenseMount => &mut self.offense_mount,
            EquipSlot::DefenseMount => &mut self.defense_mount,
        };
        cell.replace(card)
    }

    /// Empty a slot, returning its occupant.
    pub fn take(&mut self, slot: EquipSlot) -> Option<PlayingCard> {
        match slot {
            EquipSlot::Weapon => self.weapon.take(),
            EquipSlot::Armor => self.armor.take(),
            EquipSlot::OffenseMount => self.offense_mount.take(),
            EquipSlot::DefenseMount => self.defense_mount.take(),
        }
    }

    /// Empty every slot, returning the removed cards.
    pub fn take_all(&mut self) -> Vec<PlayingCard> {
        EquipSlot::ALL.iter().filter_map(|&s| self.take(s)).collect()
    }

    /// Iterate over equipped cards.
    pub fn iter(&self) -> impl Iterator<Item = &PlayingCard> {
        EquipSlot::ALL.iter().filter_map(move |&s| self.slot(s))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Is any slot occupied?
    #[must_use]
    pub fn any(&self) -> bool {
        self.iter().next().is_some()
    }
}

/// Ultimate bookkeeping: a cooldown counter and a fired-at-least-once
/// marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UltimateState {
    /// Turns until the ultimate may fire again; decremented at the
    /// owner's turn start, floored at zero.
    pub cooldown: u8,
    /// Whether the ultimate has fired this game.
    pub used: bool,
}

/// One seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub is_ai: bool,
    pub character: CharacterId,
    pub hp: i32,
    pub max_hp: i32,
    /// Hand order is player-visible but carries no rules meaning.
    pub hand: Vec<PlayingCard>,
    pub equipment: Equipment,
    /// Attack cards resolved as played this turn; reset at turn start.
    pub attacks_played: u8,
    /// Set by a control effect; consumed at the victim's next turn start.
    pub skipped_turn: bool,
    pub ultimate: UltimateState,
}

impl Player {
    /// Create a player at full health with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, character: CharacterId, max_hp: i32, is_ai: bool) -> Self {
        Self {
            id,
            is_ai,
            character,
            hp: max_hp,
            max_hp,
            hand: Vec::new(),
            equipment: Equipment::default(),
            attacks_played: 0,
            skipped_turn: false,
            ultimate: UltimateState::default(),
        }
    }

    /// Eliminated players stay seated but are out of the game.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Find a hand card by instance id.
    #[must_use]
    pub fn card_in_hand(&self, instance: InstanceId) -> Option<&PlayingCard> {
        self.hand.iter().find(|c| c.instance == instance)
    }

    /// Remove a hand card by instance id.
    pub fn take_from_hand(&mut self, instance: InstanceId) -> Option<PlayingCard> {
        let pos = self.hand.iter().position(|c| c.instance == instance)?;
        Some(self.hand.remove(pos))
    }

    /// First hand card of the given kind.
    #[must_use]
    pub fn first_of_kind(&self, kind: CardKind) -> Option<&PlayingCard> {
        self.hand.iter().find(|c| c.kind == kind)
    }

    /// Does the hand hold a card of the given kind?
    #[must_use]
    pub fn holds_kind(&self, kind: CardKind) -> bool {
        self.first_of_kind(kind).is_some()
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}
