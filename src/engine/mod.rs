//! Turn orchestration: state, commands, scheduling, collaborators.

mod commands;
mod events;
mod game;
mod profile;
mod progress;
mod scheduler;
mod snapshot;
mod state;

pub use commands::{Command, CommandRecord, RewardChoice, Rewards};
pub use events::{FeedbackQueue, FeedbackTarget, FloatingText, TextTone, VfxEvent, VfxKind};
pub use game::Game;
pub use profile::{fallback_profile, EnemyProfile, EnemyProfileSource, PresetProfiles};
pub use progress::{MemoryProgress, ProgressStore};
pub use scheduler::{Scheduler, Task};
pub use snapshot::{CardView, EnemyView, PileCardView, PlayerView, SkillView, Snapshot};
pub use state::GameState;
