//! Command handlers.
//!
//! Each submodule handles one command; handlers only talk to ports.

pub mod media_types;
pub mod serve;
