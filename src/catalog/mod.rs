//! Static catalog of cards and characters.
//!
//! Loaded once at engine construction; everything in it is immutable.
//! The rules modules consult the catalog for names, weapon reach,
//! judgement rules, passives, and ultimate scripts.

pub mod cards;
pub mod characters;

use rustc_hash::FxHashMap;

pub use cards::{
    card_ids, standard_cards, standard_deck_size, CardDefinition, CardId, CardKind, InstanceId,
    JudgementRule, PlayingCard, Suit, DECK_COUNTS,
};
pub use characters::{
    character_ids, standard_characters, CharacterDefinition, CharacterId, Passive, Ultimate,
    UltimateCondition, UltimateKind, UltimateOp, ULTIMATE_COOLDOWN,
};

/// Registry of card and character definitions.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<CardId, CardDefinition>,
    characters: FxHashMap<CharacterId, CharacterDefinition>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog: full card set and twelve-character roster.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in standard_cards() {
            catalog.register_card(card);
        }
        for character in standard_characters() {
            catalog.register_character(character);
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register_card(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("card {} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Register a character definition.
    ///
    /// Panics if a character with the same ID already exists.
    pub fn register_character(&mut self, character: CharacterDefinition) {
        if self.characters.contains_key(&character.id) {
            panic!("character {} already registered", character.id);
        }
        self.characters.insert(character.id, character);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a character definition by ID.
    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&CharacterDefinition> {
        self.characters.get(&id)
    }

    /// Iterate over all character definitions.
    pub fn characters(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.characters.values()
    }

    /// Number of registered card definitions.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // === Lookup helpers used throughout the rules modules ===

    /// Card display name, or a placeholder for an unknown ID.
    #[must_use]
    pub fn card_name(&self, id: CardId) -> &str {
        self.card(id).map_or("unknown card", |c| c.name.as_str())
    }

    /// Character display name, or a placeholder for an unknown ID.
    #[must_use]
    pub fn character_name(&self, id: CharacterId) -> &str {
        self.character(id).map_or("unknown", |c| c.name.as_str())
    }

    /// Character hit point maximum (0 for an unknown ID).
    #[must_use]
    pub fn character_max_hp(&self, id: CharacterId) -> i32 {
        self.character(id).map_or(0, |c| c.max_hp)
    }

    /// Check whether a character has a passive.
    #[must_use]
    pub fn has_passive(&self, id: CharacterId, passive: Passive) -> bool {
        self.character(id).is_some_and(|c| c.has_passive(passive))
    }

    /// A weapon card's reach, if it is a weapon.
    #[must_use]
    pub fn weapon_range(&self, id: CardId) -> Option<u8> {
        self.card(id).and_then(|c| c.attack_range)
    }

    /// A scroll card's judgement rule, if it has one.
    #[must_use]
    pub fn judgement_rule(&self, id: CardId) -> Option<JudgementRule> {
        self.card(id).and_then(|c| c.judgement)
    }

    /// Does this armor card block black-suited attacks?
    #[must_use]
    pub fn blocks_black_attacks(&self, id: CardId) -> bool {
        self.card(id).is_some_and(|c| c.blocks_black_attacks)
    }

    /// A character's ultimate, if the character exists.
    #[must_use]
    pub fn ultimate(&self, id: CharacterId) -> Option<&Ultimate> {
        self.character(id).map(|c| &c.ultimate)
    }
}
