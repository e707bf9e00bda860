//! Effect payloads and their resolution against game state.

mod effect;
mod resolver;

pub use effect::{Effect, EffectKind, EffectSource, Target};
pub use resolver::EffectResolver;
