//! Domain layer: pure darts rules and the state they act on.

pub mod action;
pub mod checkout;
pub mod checkout_table;
pub mod dispatch;
pub mod notation;
pub mod options;
pub mod persistence;
pub mod player;
pub mod roster;
pub mod rules;
pub mod score;
pub mod segments;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod throw_buffer;
pub mod variant;

pub mod donkey_derby;
pub mod game_transition;
pub mod killer;
pub mod shanghai;
pub mod x01;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_checkout;
#[cfg(test)]
mod tests_donkey_derby;
#[cfg(test)]
mod tests_props_x01;
#[cfg(test)]
mod tests_shanghai;
#[cfg(test)]
mod tests_x01;

// Re-exports for ergonomics
pub use action::{Action, StartGame};
pub use checkout::{suggest_checkout, Checkout};
pub use dispatch::{apply, reduce};
pub use game_transition::{derive_game_transitions, GameTransition};
pub use notation::{Dart, Multiplier};
pub use options::{
    DartRule, DonkeyDerbyOptions, EntryMode, GameType, KillerOptions, MatchFormat, OutMode,
    X01Options,
};
pub use persistence::PersistedState;
pub use player::{Player, PlayerId, Visit, VisitOutcome};
pub use score::{score_notation, sum_notations};
pub use snapshot::GameSnapshot;
pub use state::{GameState, GameStatus, SessionStats};
pub use throw_buffer::ThrowBuffer;
pub use variant::{rules_for, VariantRules};
