//! Combat model: statuses, combatants, and pure damage math.

pub mod damage;

mod combatant;
mod status;

pub use combatant::{DamageOutcome, Enemy, Player};
pub use status::{Status, StatusKind, StatusLedger};
