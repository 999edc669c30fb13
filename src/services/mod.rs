// Service module exports

pub mod filter;
pub mod geo;
pub mod pipeline;
pub mod projection;
pub mod schedule;
