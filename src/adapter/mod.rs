//! Adapters implementing ports (inbound CLI, outbound calendar and clock).

pub mod inbound;
pub mod outbound;
