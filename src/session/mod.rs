pub mod market;
pub mod state;

pub use market::Market;
pub use state::{AccessToken, SessionState};
