//! Vendor adapter catalogs. Each module carries one vendor API slice and
//! exposes `catalog()` plus the fixed base URL its binary targets.

pub mod drive;
pub mod github;
pub mod gmail;
