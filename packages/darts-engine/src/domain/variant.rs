//! Common contract for the per-variant transition modules.

use crate::domain::action::Action;
use crate::domain::donkey_derby::DonkeyDerbyRules;
use crate::domain::killer::KillerRules;
use crate::domain::options::GameType;
use crate::domain::shanghai::ShanghaiRules;
use crate::domain::state::GameState;
use crate::domain::x01::X01Rules;

/// A variant's pure transition function.
///
/// The dispatcher owns roster, start, end and reset handling; everything that
/// happens during play is routed here. Implementations must leave the state
/// unchanged for actions they do not handle.
pub trait VariantRules {
    /// Variant setup after the shared per-game reset.
    fn start(&self, state: &mut GameState);

    /// In-play transition.
    fn apply(&self, state: &mut GameState, action: &Action);
}

pub fn rules_for(game_type: GameType) -> &'static dyn VariantRules {
    match game_type {
        GameType::X01 => &X01Rules,
        GameType::Killer => &KillerRules,
        GameType::Shanghai => &ShanghaiRules,
        GameType::DonkeyDerby => &DonkeyDerbyRules,
    }
}
