//! confluation のユースケース

pub mod app;
pub mod pacing;
pub mod report;
pub mod research;
