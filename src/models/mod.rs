mod config;
mod state;
mod status;

pub use config::{Config, DbSettings};
pub use state::AppState;
pub use status::ApiStatus;
