pub mod editing_session;

pub use editing_session::{EditingSession, EventOutcome, UiEvent};
