//! Enemy decision making: intent selection and value rolls.

mod intent;

pub use intent::{Intent, IntentRoll};
