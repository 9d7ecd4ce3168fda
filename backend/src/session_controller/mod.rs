pub mod credentials;
pub mod state;
