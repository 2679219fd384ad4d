//! pulse のユースケース

pub mod advisor;
pub mod app;
