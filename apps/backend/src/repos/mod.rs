//! Repository traits; adapters under `crate::adapters` implement them.

pub mod games;

pub use games::GameStore;
