//! Enemy profile sources.
//!
//! A profile is the cosmetic half of an enemy (name, emoji, description);
//! the numeric half (HP, intents) always comes from `EngineConfig`. The
//! production game may plug in a remote generator; tests and offline play
//! use the built-in preset pool. A source failure never stalls loading,
//! the engine substitutes `fallback_profile`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::GameRng;
use crate::error::ProfileError;

/// Cosmetic identity of an enemy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub name: String,
    pub emoji: String,
    pub description: String,
}

/// Where enemy profiles come from.
pub trait EnemyProfileSource {
    /// Produce a profile for the given level.
    fn generate(
        &mut self,
        level: u32,
        is_boss: bool,
        rng: &mut GameRng,
    ) -> Result<EnemyProfile, ProfileError>;

    /// Produce a profile for a summoned or spawned minion.
    fn generate_minion(&mut self, rng: &mut GameRng) -> Result<EnemyProfile, ProfileError>;
}

/// Deterministic built-in profile pool.
#[derive(Clone, Debug, Default)]
pub struct PresetProfiles;

const NORMALS: &[(&str, &str, &str)] = &[
    ("Cave Slime", "🟢", "A quivering blob that dissolves whatever it touches."),
    ("Gloom Bat", "🦇", "It screeches from the dark before it strikes."),
    ("Rust Golem", "🗿", "Held together by grudges and corroded iron."),
    ("Bog Serpent", "🐍", "Patient, venomous, and always hungry."),
    ("Ember Imp", "👺", "Small, fast, and fond of arson."),
];

const BOSSES: &[(&str, &str, &str)] = &[
    ("Warden of Ash", "🔥", "What remains when a forest refuses to die."),
    ("The Pale King", "👑", "His court is empty; his patience is not."),
    ("Deepwater Maw", "🐙", "It has swallowed braver parties than yours."),
];

const MINIONS: &[(&str, &str, &str)] = &[
    ("Bone Thrall", "💀", "It obeys whoever rattled it awake."),
    ("Shadowling", "🌑", "A scrap of darkness with teeth."),
    ("Spore Crawler", "🍄", "It was a rat once. Mostly."),
];

fn pick(pool: &[(&str, &str, &str)], rng: &mut GameRng) -> EnemyProfile {
    // Pools are non-empty constants.
    let (name, emoji, description) = pool[rng.gen_range_usize(0..pool.len())];
    EnemyProfile {
        name: name.to_string(),
        emoji: emoji.to_string(),
        description: description.to_string(),
    }
}

impl EnemyProfileSource for PresetProfiles {
    fn generate(
        &mut self,
        _level: u32,
        is_boss: bool,
        rng: &mut GameRng,
    ) -> Result<EnemyProfile, ProfileError> {
        let pool = if is_boss { BOSSES } else { NORMALS };
        Ok(pick(pool, rng))
    }

    fn generate_minion(&mut self, rng: &mut GameRng) -> Result<EnemyProfile, ProfileError> {
        Ok(pick(MINIONS, rng))
    }
}

/// Last-resort profile used when a source errors.
#[must_use]
pub fn fallback_profile(level: u32, is_boss: bool) -> EnemyProfile {
    if is_boss {
        EnemyProfile {
            name: format!("Nameless Tyrant L{level}"),
            emoji: "👹".to_string(),
            description: "It needs no introduction.".to_string(),
        }
    } else {
        EnemyProfile {
            name: format!("Lurker L{level}"),
            emoji: "👾".to_string(),
            description: "Something hostile in the dark.".to_string(),
        }
    }
}

/// Generate through a source, falling back on error.
pub fn profile_or_fallback(
    source: &mut dyn EnemyProfileSource,
    level: u32,
    is_boss: bool,
    rng: &mut GameRng,
) -> EnemyProfile {
    match source.generate(level, is_boss, rng) {
        Ok(profile) => profile,
        Err(err) => {
            warn!(level, is_boss, %err, "profile source failed, using fallback");
            fallback_profile(level, is_boss)
        }
    }
}

/// Generate a minion profile through a source, falling back on error.
pub fn minion_or_fallback(source: &mut dyn EnemyProfileSource, rng: &mut GameRng) -> EnemyProfile {
    match source.generate_minion(rng) {
        Ok(profile) => profile,
        Err(err) => {
            warn!(%err, "minion profile source failed, using fallback");
            EnemyProfile {
                name: "Summoned Shade".to_string(),
                emoji: "🌫️".to_string(),
                description: "Called up from nowhere in particular.".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl EnemyProfileSource for FailingSource {
        fn generate(
            &mut self,
            _level: u32,
            _is_boss: bool,
            _rng: &mut GameRng,
        ) -> Result<EnemyProfile, ProfileError> {
            Err(ProfileError::Generation("offline".to_string()))
        }

        fn generate_minion(&mut self, _rng: &mut GameRng) -> Result<EnemyProfile, ProfileError> {
            Err(ProfileError::Generation("offline".to_string()))
        }
    }

    #[test]
    fn test_preset_is_seed_deterministic() {
        let mut a = GameRng::new(12);
        let mut b = GameRng::new(12);
        let mut source = PresetProfiles;
        for level in 1..6 {
            assert_eq!(
                source.generate(level, false, &mut a).unwrap(),
                source.generate(level, false, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_failure_falls_back() {
        let mut rng = GameRng::new(1);
        let profile = profile_or_fallback(&mut FailingSource, 3, true, &mut rng);
        assert_eq!(profile.name, "Nameless Tyrant L3");
    }
}
