mod config;
mod server;
mod state;

pub use config::ServerConfig;
pub use server::{make_app, run_server};
pub use state::ServerState;
