//! Interactive play

mod letters;
mod messages;
mod session;

pub use letters::LetterStates;
pub use session::{Session, SessionOutcome};
