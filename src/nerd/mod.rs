//! FantasyBasketballNerd service: record types and endpoint access.

pub mod http;
pub mod types;
