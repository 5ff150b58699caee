//! Game orchestration
//!
//! The session state machine plus its collaborators: the stats reducer, the
//! keyboard accumulator, and the bonus reward gate.

mod keyboard;
mod reward;
mod session;
mod stats;

pub use keyboard::KeyboardState;
pub use reward::{InstantReward, NoReward, RewardGate, RewardOutcome};
pub use session::{
    BONUS_ATTEMPTS, BonusDecision, GameSession, MAX_ATTEMPTS, SessionPhase, SubmitOutcome, today,
};
pub use stats::GameStats;
