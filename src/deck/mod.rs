//! Deck pile management.

mod piles;

pub use piles::Piles;
