//! Game state machine and target selection

mod config;
mod selector;
mod session;

pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig};
pub use selector::select_target;
pub use session::{GameSession, GameState, GuessReport, SessionClosed};
