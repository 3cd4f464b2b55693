#![forbid(unsafe_code)]

pub mod checklist;
pub mod gating;
pub mod links;
pub mod model;
pub mod percent;
