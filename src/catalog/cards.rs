//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type: its
//! kind, weapon reach, judgement rule. Per-game instance data (suit,
//! rank, unique id) lives in [`PlayingCard`], assigned at deck
//! generation and otherwise inert.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the "type" of card (e.g. the basic attack), not a specific
/// printed copy in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// What a card does when played.
///
/// Basic cards (attack, dodge, heal), scrolls (single-use tricks), and
/// equipment. The rules modules dispatch on this, never on card names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// 1 damage at attack range; answered by a dodge.
    Attack,
    /// Cancels an incoming attack; only playable in a response window.
    Dodge,
    /// Restore 1 hp (character bonuses may raise this).
    Heal,
    /// Draw two cards.
    Draw,
    /// Judgement-gated area damage to all other players.
    Aoe,
    /// Judgement-gated single-target damage.
    DamageScroll,
    /// Force the target to discard a card.
    DiscardScroll,
    /// Take a card from the target (reach 1).
    StealScroll,
    /// Alternating attack-card duel; the side that runs dry takes 1.
    Duel,
    /// Cancels a scroll; only playable in a response window.
    Negate,
    /// The target skips their next turn.
    SkipTurn,
    EquipWeapon,
    EquipArmor,
    EquipOffenseMount,
    EquipDefenseMount,
}

impl CardKind {
    /// Is this an equipment card?
    #[must_use]
    pub const fn is_equipment(self) -> bool {
        matches!(
            self,
            Self::EquipWeapon | Self::EquipArmor | Self::EquipOffenseMount | Self::EquipDefenseMount
        )
    }

    /// Does playing this card require choosing an opponent?
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(
            self,
            Self::Attack
                | Self::Duel
                | Self::DamageScroll
                | Self::StealScroll
                | Self::DiscardScroll
                | Self::SkipTurn
        )
    }

    /// Can this card be played proactively during the PLAY phase?
    ///
    /// Dodge and negate are response-only.
    #[must_use]
    pub const fn is_proactive(self) -> bool {
        !matches!(self, Self::Dodge | Self::Negate)
    }
}

/// One of the four card suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Heart | Self::Diamond)
    }

    /// Spades and clubs are black.
    #[must_use]
    pub const fn is_black(self) -> bool {
        !self.is_red()
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Suit::Spade => "♠",
            Suit::Heart => "♥",
            Suit::Club => "♣",
            Suit::Diamond => "♦",
        };
        write!(f, "{}", glyph)
    }
}

/// Success predicate for judgement-gated scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JudgementRule {
    /// Succeeds on hearts or diamonds.
    RedSuit,
    /// Succeeds on spades or clubs.
    BlackSuit,
}

impl JudgementRule {
    /// Evaluate the rule against a revealed suit.
    #[must_use]
    pub const fn succeeds(self, suit: Suit) -> bool {
        match self {
            Self::RedSuit => suit.is_red(),
            Self::BlackSuit => suit.is_black(),
        }
    }
}

/// Static card definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/logging).
    pub name: String,

    /// What the card does.
    pub kind: CardKind,

    /// Reach granted while equipped (weapons only).
    pub attack_range: Option<u8>,

    /// Judgement predicate (judgement-gated scrolls only).
    pub judgement: Option<JudgementRule>,

    /// Armor flag: grants immunity to black-suited attack cards.
    pub blocks_black_attacks: bool,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            attack_range: None,
            judgement: None,
            blocks_black_attacks: false,
        }
    }

    /// Set the weapon reach (builder pattern).
    #[must_use]
    pub fn with_range(mut self, range: u8) -> Self {
        self.attack_range = Some(range);
        self
    }

    /// Set the judgement rule (builder pattern).
    #[must_use]
    pub fn with_judgement(mut self, rule: JudgementRule) -> Self {
        self.judgement = Some(rule);
        self
    }

    /// Mark as armor that blocks black-suited attacks (builder pattern).
    #[must_use]
    pub fn blocking_black_attacks(mut self) -> Self {
        self.blocks_black_attacks = true;
        self
    }
}

/// A printed card in play: a definition reference plus instance identity.
///
/// `kind` is denormalized from the definition so rules code can dispatch
/// without a catalog lookup. Suit and rank are fixed at deck generation
/// and matter only for judgement display and armor immunity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingCard {
    pub instance: InstanceId,
    pub card: CardId,
    pub kind: CardKind,
    pub suit: Suit,
    /// 1..=13, ace through king.
    pub rank: u8,
}

/// Well-known card IDs for the standard deck.
pub mod card_ids {
    use super::CardId;

    pub const STRIKE: CardId = CardId::new(0);
    pub const SHADOW_STEP: CardId = CardId::new(1);
    pub const HEALING_SALVE: CardId = CardId::new(2);
    pub const CLONE_TACTICS: CardId = CardId::new(3);
    pub const FIRE_SCROLL: CardId = CardId::new(4);
    pub const LIGHTNING_SCROLL: CardId = CardId::new(5);
    pub const SHOWDOWN: CardId = CardId::new(6);
    pub const SNATCH: CardId = CardId::new(7);
    pub const DISMANTLE: CardId = CardId::new(8);
    pub const TRANCE: CardId = CardId::new(9);
    pub const NULLIFY: CardId = CardId::new(10);
    pub const IRON_VEST: CardId = CardId::new(11);
    pub const SPIRIT_WARD: CardId = CardId::new(12);
    pub const KUNAI: CardId = CardId::new(13);
    pub const LONGBLADE: CardId = CardId::new(14);
    pub const WAR_FAN: CardId = CardId::new(15);
    pub const SWIFT_HOUND: CardId = CardId::new(16);
    pub const STONE_TORTOISE: CardId = CardId::new(17);
}

/// The standard card set.
#[must_use]
pub fn standard_cards() -> Vec<CardDefinition> {
    use card_ids::*;
    use CardKind::*;

    vec![
        CardDefinition::new(STRIKE, "Shuriken Strike", Attack),
        CardDefinition::new(SHADOW_STEP, "Shadow Step", Dodge),
        CardDefinition::new(HEALING_SALVE, "Healing Salve", Heal),
        CardDefinition::new(CLONE_TACTICS, "Clone Tactics", Draw),
        CardDefinition::new(FIRE_SCROLL, "Fire Scroll", DamageScroll)
            .with_judgement(JudgementRule::RedSuit),
        CardDefinition::new(LIGHTNING_SCROLL, "Lightning Scroll", Aoe)
            .with_judgement(JudgementRule::BlackSuit),
        CardDefinition::new(SHOWDOWN, "Showdown", Duel),
        CardDefinition::new(SNATCH, "Snatch", StealScroll),
        CardDefinition::new(DISMANTLE, "Dismantle", DiscardScroll),
        CardDefinition::new(TRANCE, "Trance", SkipTurn),
        CardDefinition::new(NULLIFY, "Nullify", Negate),
        CardDefinition::new(IRON_VEST, "Iron Vest", EquipArmor).blocking_black_attacks(),
        CardDefinition::new(SPIRIT_WARD, "Spirit Ward", EquipArmor),
        CardDefinition::new(KUNAI, "Kunai", EquipWeapon).with_range(2),
        CardDefinition::new(LONGBLADE, "Longblade", EquipWeapon).with_range(3),
        CardDefinition::new(WAR_FAN, "War Fan", EquipWeapon).with_range(4),
        CardDefinition::new(SWIFT_HOUND, "Swift Hound", EquipOffenseMount),
        CardDefinition::new(STONE_TORTOISE, "Stone Tortoise", EquipDefenseMount),
    ]
}

/// Copies of each card in the standard 126-card deck.
pub const DECK_COUNTS: &[(CardId, usize)] = &[
    (card_ids::STRIKE, 24),
    (card_ids::SHADOW_STEP, 24),
    (card_ids::HEALING_SALVE, 16),
    (card_ids::CLONE_TACTICS, 12),
    (card_ids::FIRE_SCROLL, 6),
    (card_ids::LIGHTNING_SCROLL, 3),
    (card_ids::SHOWDOWN, 4),
    (card_ids::SNATCH, 6),
    (card_ids::DISMANTLE, 6),
    (card_ids::TRANCE, 3),
    (card_ids::NULLIFY, 7),
    (card_ids::IRON_VEST, 3),
    (card_ids::SPIRIT_WARD, 2),
    (card_ids::KUNAI, 2),
    (card_ids::LONGBLADE, 1),
    (card_ids::WAR_FAN, 1),
    (card_ids::SWIFT_HOUND, 3),
    (card_ids::STONE_TORTOISE, 3),
];

/// Total card count of the standard deck.
#[must_use]
pub fn standard_deck_size() -> usize {
    DECK_COUNTS.iter().map(|(_, n)| n).sum()
}
