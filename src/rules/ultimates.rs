//! Ultimate abilities: availability gating and script execution.
//!
//! An ultimate is a data script of effect primitives. Firing one never
//! branches on character identity; new characters only add data.

use crate::catalog::{
    Catalog, Ultimate, UltimateCondition, UltimateKind, UltimateOp, ULTIMATE_COOLDOWN,
};
use crate::core::{EngineError, LogKind};
use crate::rules::{deck, effects};
use crate::state::{GameState, PlayerId};

/// Is a seat's ultimate ready to fire?
///
/// Ready means off cooldown and with its activation condition met. The
/// fired-before marker does not gate reuse.
pub fn availability(state: &GameState, catalog: &Catalog, seat: PlayerId) -> Result<(), EngineError> {
    let player = state.player(seat);
    let Some(ultimate) = catalog.ultimate(player.character) else {
        return Err(EngineError::UltimateUnavailable);
    };
    if player.ultimate.cooldown > 0 {
        return Err(EngineError::UltimateOnCooldown);
    }
    if !condition_met(state, seat, ultimate.condition) {
        return Err(EngineError::UltimateUnavailable);
    }
    Ok(())
}

fn condition_met(state: &GameState, seat: PlayerId, condition: UltimateCondition) -> bool {
    let player = state.player(seat);
    match condition {
        UltimateCondition::HpAtMost(limit) => player.hp <= limit,
        UltimateCondition::HandAtLeast(count) => player.hand_size() >= count,
        UltimateCondition::Wounded => player.hp < player.max_hp,
        UltimateCondition::HasWeapon => player.equipment.weapon.is_some(),
        UltimateCondition::HasArmor => player.equipment.armor.is_some(),
    }
}

/// Fire a seat's ultimate.
///
/// Validates readiness and targeting, then runs the script ops in
/// order. On success the cooldown restarts.
pub fn fire(
    state: &mut GameState,
    catalog: &Catalog,
    seat: PlayerId,
    target: Option<PlayerId>,
) -> Result<(), EngineError> {
    availability(state, catalog, seat)?;

    let character = state.player(seat).character;
    let Some(ultimate) = catalog.ultimate(character) else {
        return Err(EngineError::UltimateUnavailable);
    };
    let ultimate = ultimate.clone();

    let target = validate_target(state, seat, &ultimate, target)?;

    let name = catalog.character_name(character).to_string();
    state.log.push(
        LogKind::Skill,
        format!("{} unleashes {}!", name, ultimate.name),
    );

    let marker = &mut state.player_mut(seat).ultimate;
    marker.cooldown = ULTIMATE_COOLDOWN;
    marker.used = true;

    for op in &ultimate.script {
        run_op(state, catalog, seat, target, *op);
    }
    Ok(())
}

fn validate_target(
    state: &GameState,
    seat: PlayerId,
    ultimate: &Ultimate,
    target: Option<PlayerId>,
) -> Result<Option<PlayerId>, EngineError> {
    if ultimate.kind != UltimateKind::Target {
        return Ok(None);
    }
    let Some(target) = target else {
        return Err(EngineError::TargetRequired);
    };
    if target == seat {
        return Err(EngineError::SelfTarget);
    }
    if !state.is_alive(target) {
        return Err(EngineError::TargetEliminated);
    }
    Ok(Some(target))
}

fn run_op(
    state: &mut GameState,
    catalog: &Catalog,
    seat: PlayerId,
    target: Option<PlayerId>,
    op: UltimateOp,
) {
    match op {
        UltimateOp::DamageTarget(amount) => {
            if let Some(target) = target {
                effects::apply_damage(state, catalog, target, amount);
            }
        }
        UltimateOp::DamageOthers(amount) => {
            for opponent in state.opponents(seat) {
                effects::apply_damage(state, catalog, opponent, amount);
            }
        }
        UltimateOp::DamageEveryone(amount) => {
            for player in state.alive_players() {
                effects::apply_damage(state, catalog, player, amount);
            }
        }
        UltimateOp::HealSelf(amount) => effects::heal(state, catalog, seat, amount),
        UltimateOp::HealSelfFull => {
            let missing = {
                let player = state.player(seat);
                player.max_hp - player.hp
            };
            effects::heal(state, catalog, seat, missing);
        }
        UltimateOp::DrawSelf(count) => {
            deck::draw(state, seat, count);
        }
        UltimateOp::DrawSelfUpTo(target_size) => {
            deck::draw_up_to(state, seat, target_size);
        }
        UltimateOp::SkipTargetTurn => {
            if let Some(target) = target {
                effects::resolve_skip(state, catalog, target);
            }
        }
        UltimateOp::StripTargetEquipment => {
            // A fallen target already surrendered its equipment.
            if let Some(target) = target.filter(|&t| state.is_alive(t)) {
                let mut stripped = state.player_mut(target).equipment.take_all();
                state.discard_pile.append(&mut stripped);
            }
        }
        UltimateOp::OthersDiscard(count) => {
            for opponent in state.opponents(seat) {
                effects::discard_random(state, opponent, count);
            }
        }
    }
}
