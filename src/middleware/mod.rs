pub mod basic_auth;
pub mod logging;
pub mod origin;
