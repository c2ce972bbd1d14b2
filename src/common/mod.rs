//! Common, shared types.

pub mod arsenal;
pub mod despawn;
pub mod layers;
pub mod rng;
pub mod session;
pub mod silhouette;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod tests;
