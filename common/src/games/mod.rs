mod observer;
mod session_rng;

pub mod tictactoe;

pub use observer::{BoardObserver, NoopObserver};
pub use session_rng::SessionRng;
