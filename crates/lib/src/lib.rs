//! Yadobot core library — config, the LINE webhook gateway, the travel
//! search client, and reply building used by the CLI binary.

pub mod config;
pub mod gateway;
pub mod line;
pub mod reply;
pub mod travel;
