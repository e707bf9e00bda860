//! The turn engine.
//!
//! `Game` owns the state, the command queue, the virtual-clock scheduler,
//! and the external collaborators (profile source, progress store). All
//! mutation flows through two doors:
//!
//! - `submit` enqueues a command; `tick`/`flush` drain the queue and
//!   validate each command against current state. An accepted play pays its
//!   logical cost (energy, card movement) on the spot and schedules its
//!   effect payloads behind the projectile delay.
//! - The scheduler fires due tasks as the clock advances. `tick(dt)` moves
//!   the clock by a step; `flush` jumps it to each due time in order until
//!   nothing is pending, so tests settle a whole exchange in one call.
//!
//! Delays stagger feedback, never outcomes: the final state after `flush`
//! is identical to stepping the clock millisecond by millisecond.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::ai::{Intent, IntentRoll};
use crate::cards::{catalog, CardInstance, CardRegistry, CardTemplate, CardType};
use crate::combat::{Enemy, Player, StatusKind};
use crate::core::{CardInstanceId, EngineConfig, EntityId, GamePhase};
use crate::deck::Piles;
use crate::effects::{Effect, EffectKind, EffectResolver, EffectSource};
use crate::error::Rejection;
use crate::skills::{Skill, SkillId, SkillKind};

use super::commands::{Command, CommandRecord, RewardChoice, Rewards};
use super::events::{FeedbackTarget, TextTone, VfxKind};
use super::profile::{minion_or_fallback, profile_or_fallback, EnemyProfileSource, PresetProfiles};
use super::progress::{record_level_best_effort, MemoryProgress, ProgressStore};
use super::scheduler::{Scheduler, Task};
use super::snapshot::Snapshot;
use super::state::GameState;

/// The deck-combat engine.
pub struct Game {
    state: GameState,
    registry: CardRegistry,
    scheduler: Scheduler,
    pending: VecDeque<Command>,
    profiles: Box<dyn EnemyProfileSource>,
    progress: Box<dyn ProgressStore>,
    /// Enemy order for the in-progress enemy turn, captured at turn entry.
    /// Enemies summoned mid-turn are not in it and act next turn.
    acting_queue: VecDeque<EntityId>,
    /// Current auto-pass generation; stale AutoPass tasks are ignored.
    auto_pass_token: u64,
    auto_pass_armed: bool,
    victory_pending: bool,
}

impl Game {
    /// New game on the built-in card set with in-process collaborators.
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(config, seed),
            registry: catalog::registry(),
            scheduler: Scheduler::new(),
            pending: VecDeque::new(),
            profiles: Box::new(PresetProfiles),
            progress: Box::new(MemoryProgress::default()),
            acting_queue: VecDeque::new(),
            auto_pass_token: 0,
            auto_pass_armed: false,
            victory_pending: false,
        }
    }

    /// Replace the enemy profile source.
    #[must_use]
    pub fn with_profile_source(mut self, source: Box<dyn EnemyProfileSource>) -> Self {
        self.profiles = source;
        self
    }

    /// Replace the progress store.
    #[must_use]
    pub fn with_progress_store(mut self, store: Box<dyn ProgressStore>) -> Self {
        self.progress = store;
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for tests that need to stage a position.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Whether any deferred work is pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty() && self.scheduler.is_idle()
    }

    /// Read-only view for presentation.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.state,
            self.progress.best_level().unwrap_or_default(),
        )
    }

    /// Enqueue a command. Nothing happens until the next `tick` or `flush`.
    pub fn submit(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Drain pending commands, advance the clock, run everything due.
    pub fn tick(&mut self, dt_ms: u64) {
        self.drain_commands();
        self.scheduler.advance(dt_ms);
        self.run_due_tasks();
        self.state.now_ms = self.scheduler.now();
        self.state.feedback.prune(self.state.now_ms);
    }

    /// Run all deferred work to completion, jumping the clock as needed.
    pub fn flush(&mut self) {
        self.drain_commands();
        self.run_due_tasks();
        while let Some(due) = self.scheduler.next_due() {
            self.scheduler.jump_to(due);
            self.run_due_tasks();
        }
        self.state.now_ms = self.scheduler.now();
        self.state.feedback.prune(self.state.now_ms);
    }

    fn drain_commands(&mut self) {
        while let Some(command) = self.pending.pop_front() {
            self.process(command);
        }
    }

    fn run_due_tasks(&mut self) {
        while let Some(task) = self.scheduler.pop_due() {
            self.state.now_ms = self.scheduler.now();
            self.execute(task);
            self.after_change();
        }
    }

    // === Commands ===

    fn process(&mut self, command: Command) {
        let rejection = self.apply_command(&command).err();
        if let Some(rej) = rejection {
            debug!(?command, %rej, "command rejected");
            let expiry = self.scheduler.now() + self.state.config.floating_text_lifetime_ms;
            self.state
                .feedback
                .push_text(FeedbackTarget::Player, rej.to_string(), TextTone::Info, expiry);
        }
        let record = CommandRecord {
            at_ms: self.scheduler.now(),
            command,
            rejection,
        };
        self.state.history.push_back(record);
        self.after_change();
    }

    fn apply_command(&mut self, command: &Command) -> Result<(), Rejection> {
        match command {
            Command::StartGame => {
                if self.state.phase != GamePhase::StartScreen {
                    return Err(Rejection::WrongPhase);
                }
                self.state.phase = GamePhase::CharacterSelect;
                Ok(())
            }
            Command::SelectCharacter { index } => self.select_character(*index),
            Command::PlayCard { card, target } => self.play_card(*card, *target),
            Command::PlayCombo { card, target } => self.play_combo(*card, *target),
            Command::UseSkill { skill, target } => self.use_skill(*skill, *target),
            Command::EndTurn => {
                if self.state.phase != GamePhase::PlayerTurn {
                    return Err(Rejection::WrongPhase);
                }
                self.end_player_turn();
                Ok(())
            }
            Command::ChooseReward(choice) => self.choose_reward(*choice),
            Command::Restart => {
                if self.state.phase != GamePhase::GameOver {
                    return Err(Rejection::WrongPhase);
                }
                self.restart();
                Ok(())
            }
        }
    }

    fn select_character(&mut self, index: usize) -> Result<(), Rejection> {
        if self.state.phase != GamePhase::CharacterSelect {
            return Err(Rejection::WrongPhase);
        }
        let roster = catalog::roster();
        let spec = roster.get(index).ok_or(Rejection::UnknownCharacter)?;

        let mut player = Player::new(spec.max_hp, spec.max_energy, spec.base_draw_count);
        player.skills = spec.skills.clone();
        player.fixed_starting_hand = spec.fixed_starting_hand.clone();
        self.state.player = player;
        self.state.deck = spec.deck.clone();
        self.state.level = 1;
        info!(character = spec.name, "run started");
        self.start_level(1);
        Ok(())
    }

    fn play_card(
        &mut self,
        card: CardInstanceId,
        target: Option<EntityId>,
    ) -> Result<(), Rejection> {
        if self.state.phase != GamePhase::PlayerTurn {
            return Err(Rejection::WrongPhase);
        }
        let template = self
            .state
            .piles
            .hand_card(card)
            .map(|c| c.template.clone())
            .ok_or(Rejection::CardNotInHand)?;
        if template.cost > self.state.player.current_energy {
            return Err(Rejection::NotEnoughEnergy);
        }
        if template.needs_target() {
            let id = target.ok_or(Rejection::MissingTarget)?;
            if !self.state.is_valid_target(id) {
                return Err(Rejection::InvalidTarget);
            }
        }

        // Logical cost is paid synchronously at acceptance.
        self.state.player.current_energy -= template.cost;
        let instance = self
            .state
            .piles
            .remove_from_hand(card)
            .ok_or(Rejection::CardNotInHand)?;
        self.state.piles.discard(instance);

        self.schedule_play(&template, EffectSource::Card, target, 0);
        Ok(())
    }

    fn play_combo(&mut self, card: CardInstanceId, target: EntityId) -> Result<(), Rejection> {
        if self.state.phase != GamePhase::PlayerTurn {
            return Err(Rejection::WrongPhase);
        }
        let batch = self.state.piles.combo_batch(card);
        if batch.is_empty() {
            return Err(Rejection::CardNotInHand);
        }
        let total_cost: i32 = batch
            .iter()
            .filter_map(|id| self.state.piles.hand_card(*id))
            .map(CardInstance::cost)
            .sum();
        if total_cost > self.state.player.current_energy {
            return Err(Rejection::NotEnoughEnergy);
        }
        if !self.state.is_valid_target(target) {
            return Err(Rejection::InvalidTarget);
        }

        self.state.player.current_energy -= total_cost;
        let gap = self.state.config.combo_gap_ms;
        for (i, id) in batch.into_iter().enumerate() {
            // Batch members came from the hand scan above.
            let Some(instance) = self.state.piles.remove_from_hand(id) else {
                continue;
            };
            let template = instance.template.clone();
            self.state.piles.discard(instance);
            self.schedule_play(&template, EffectSource::Card, Some(target), i as u64 * gap);
        }
        Ok(())
    }

    fn use_skill(&mut self, skill_id: SkillId, target: Option<EntityId>) -> Result<(), Rejection> {
        if self.state.phase != GamePhase::PlayerTurn {
            return Err(Rejection::WrongPhase);
        }
        let idx = self
            .state
            .player
            .skills
            .iter()
            .position(|s| s.id == skill_id)
            .ok_or(Rejection::UnknownSkill)?;

        let (cost, effects) = match &self.state.player.skills[idx].kind {
            SkillKind::Passive { .. } => return Err(Rejection::PassiveSkill),
            SkillKind::Active {
                cost,
                current_cooldown,
                effects,
                ..
            } => {
                if *current_cooldown > 0 {
                    return Err(Rejection::SkillOnCooldown);
                }
                (*cost, effects.clone())
            }
        };
        if cost > self.state.player.current_energy {
            return Err(Rejection::NotEnoughEnergy);
        }
        if effects.iter().any(Effect::needs_target) {
            let id = target.ok_or(Rejection::MissingTarget)?;
            if !self.state.is_valid_target(id) {
                return Err(Rejection::InvalidTarget);
            }
        }

        self.state.player.current_energy -= cost;
        self.state.player.skills[idx].trigger_cooldown();

        let delay = self.state.config.projectile_delay_ms;
        for effect in &effects {
            self.scheduler.schedule_in(
                delay,
                Task::ResolveEffect {
                    effect: *effect,
                    source: EffectSource::Skill,
                    chosen: target,
                },
            );
        }
        Ok(())
    }

    /// Schedule one card's payloads, in declaration order, behind the
    /// projectile delay plus an optional combo offset.
    fn schedule_play(
        &mut self,
        template: &CardTemplate,
        source: EffectSource,
        target: Option<EntityId>,
        extra_delay: u64,
    ) {
        let delay = self.state.config.projectile_delay_ms + extra_delay;
        for effect in &template.effects {
            self.scheduler.schedule_in(
                delay,
                Task::ResolveEffect {
                    effect: *effect,
                    source,
                    chosen: target,
                },
            );
        }
        // Consumption lands at the same due time, after this card's own
        // payloads but before any later card's. The doubled card still sees
        // the status; the next one does not.
        if template.card_type == CardType::Attack
            && extra_delay == 0
            && self.state.player.statuses.has(StatusKind::DoubleNextAttack)
        {
            self.scheduler.schedule_in(delay, Task::ConsumeDoubleAttack);
        }
    }

    fn choose_reward(&mut self, choice: RewardChoice) -> Result<(), Rejection> {
        if self.state.phase != GamePhase::Reward {
            return Err(Rejection::WrongPhase);
        }
        let rewards = self.state.rewards.take().ok_or(Rejection::NoRewardPending)?;

        match choice {
            RewardChoice::Card(index) => {
                let Some(template) = rewards.cards.get(index) else {
                    self.state.rewards = Some(rewards);
                    return Err(Rejection::InvalidRewardChoice);
                };
                self.state.deck.push(template.id);
            }
            RewardChoice::Skill => {
                let Some(skill) = rewards.skill.clone() else {
                    self.state.rewards = Some(rewards);
                    return Err(Rejection::InvalidRewardChoice);
                };
                self.state.player.skills.push(skill);
            }
            RewardChoice::Skip => {}
        }

        self.state.level += 1;
        let heal = self.state.config.reward_heal;
        self.state.player.heal(heal);
        record_level_best_effort(self.progress.as_mut(), self.state.level);
        self.start_level(self.state.level);
        Ok(())
    }

    fn restart(&mut self) {
        self.scheduler.clear();
        self.pending.clear();
        self.acting_queue.clear();
        self.disarm_auto_pass();
        self.victory_pending = false;

        self.state.enemies.clear();
        self.state.piles = Piles::default();
        self.state.deck.clear();
        self.state.rewards = None;
        self.state.feedback.clear();
        self.state.level = 1;
        self.state.turn_count = 1;
        self.state.phase = GamePhase::CharacterSelect;
        info!("restarted");
    }

    // === Turn machine ===

    fn start_level(&mut self, level: u32) {
        self.state.phase = GamePhase::Loading;
        self.scheduler.clear();
        self.acting_queue.clear();
        self.disarm_auto_pass();
        self.victory_pending = false;
        self.state.feedback.clear();

        self.state.player.block = 0;

        self.state.enemies.clear();
        let is_boss = self.state.config.is_boss_level(level);
        let profile = profile_or_fallback(
            self.profiles.as_mut(),
            level,
            is_boss,
            &mut self.state.rng,
        );
        let hp = self.state.config.enemy_hp(level, is_boss);
        let opening = IntentRoll::opening(&self.state.config, level);

        let id = self.state.mint_entity_id();
        let mut lead = Enemy::new(id, profile.name, profile.emoji, profile.description, hp, is_boss);
        lead.intent = opening.intent;
        lead.intent_value = opening.value;
        self.state.enemies.push(lead);

        if is_boss {
            let minion_count = self.state.rng.gen_range(1..3);
            let minion_hp = self.state.config.minion_hp(hp);
            for _ in 0..minion_count {
                let profile = minion_or_fallback(self.profiles.as_mut(), &mut self.state.rng);
                let id = self.state.mint_entity_id();
                let mut minion = Enemy::new(
                    id,
                    profile.name,
                    profile.emoji,
                    profile.description,
                    minion_hp,
                    false,
                );
                minion.intent = opening.intent;
                minion.intent_value = opening.value;
                self.state.enemies.push(minion);
            }
        }

        let instances: Vec<CardInstance> = self
            .state
            .deck
            .clone()
            .into_iter()
            .map(|template_id| {
                let template = self.registry.get_unchecked(template_id).clone();
                let id = self.state.mint_instance_id();
                CardInstance::new(id, template)
            })
            .collect();
        let fixed = self.state.player.fixed_starting_hand.clone();
        let draw_count = self.state.player.base_draw_count;
        self.state.piles = Piles::deal(instances, &fixed, draw_count, &mut self.state.rng);

        self.state.turn_count = 1;
        info!(
            level,
            is_boss,
            enemies = self.state.enemies.len(),
            "level started"
        );
        self.begin_player_turn();
    }

    fn begin_player_turn(&mut self) {
        self.state.phase = GamePhase::PlayerTurn;
        self.disarm_auto_pass();

        let player = &mut self.state.player;
        player.block = 0;
        player.current_energy = player.max_energy;

        let burn = player.statuses.get(StatusKind::Burn);
        if burn > 0 {
            player.lose_hp(burn);
            let expiry = self.scheduler.now() + self.state.config.floating_text_lifetime_ms;
            self.state.feedback.push_text(
                FeedbackTarget::Player,
                format!("-{burn} Burn"),
                TextTone::Damage,
                expiry,
            );
        }

        self.state.player.statuses.tick_decay();
        for skill in &mut self.state.player.skills {
            skill.tick_cooldown();
        }

        let draw_count = self.state.player.base_draw_count;
        self.state.piles.top_up(draw_count, &mut self.state.rng);
    }

    fn end_player_turn(&mut self) {
        self.apply_hand_end_passives();
        self.state.phase = GamePhase::EnemyTurn;
        self.disarm_auto_pass();

        // Enrage: deep turns make every living enemy stronger before acting.
        if self.state.turn_count > self.state.config.enrage_turn {
            let gain = self.state.config.enrage_strength;
            let expiry = self.scheduler.now() + self.state.config.floating_text_lifetime_ms;
            for enemy in self.state.enemies.iter_mut().filter(|e| e.is_alive()) {
                enemy.statuses.apply(StatusKind::Strength, gain);
                self.state.feedback.push_text(
                    FeedbackTarget::Enemy(enemy.id),
                    format!("+{gain} Strength"),
                    TextTone::Status,
                    expiry,
                );
            }
        }

        // Enemy turn entry: block resets and Burn ticks on the owner's turn.
        let expiry = self.scheduler.now() + self.state.config.floating_text_lifetime_ms;
        for enemy in self.state.enemies.iter_mut().filter(|e| e.is_alive()) {
            enemy.block = 0;
            let burn = enemy.statuses.get(StatusKind::Burn);
            if burn > 0 {
                enemy.lose_hp(burn);
                self.state.feedback.push_text(
                    FeedbackTarget::Enemy(enemy.id),
                    format!("-{burn} Burn"),
                    TextTone::Damage,
                    expiry,
                );
            }
        }

        self.acting_queue = self.state.living_enemy_ids().into();
        self.scheduler
            .schedule_in(self.state.config.enemy_act_gap_ms, Task::EnemyAct);
    }

    fn apply_hand_end_passives(&mut self) {
        use crate::cards::HandPassiveKind;

        let mut heal = 0;
        let mut block = 0;
        for card in &self.state.piles.hand {
            if let Some(passive) = &card.template.hand_passive {
                match passive.kind {
                    HandPassiveKind::HealOnTurnEnd => heal += passive.value,
                    HandPassiveKind::BlockOnTurnEnd => block += passive.value,
                    HandPassiveKind::DamageBoost => {}
                }
            }
        }
        if heal > 0 {
            self.state.player.heal(heal);
        }
        if block > 0 {
            self.state.player.gain_block(block);
        }
    }

    fn enemy_act(&mut self) {
        // Enemies that died since turn entry are skipped without a gap.
        let (id, intent, value, is_boss, max_hp, frozen) = loop {
            let Some(id) = self.acting_queue.pop_front() else {
                self.finish_enemy_turn();
                return;
            };
            if let Some(enemy) = self.state.enemy(id).filter(|e| e.is_alive()) {
                break (
                    id,
                    enemy.intent,
                    enemy.intent_value,
                    enemy.is_boss,
                    enemy.max_hp,
                    enemy.is_frozen(),
                );
            }
        };

        if frozen {
            let expiry = self.scheduler.now() + self.state.config.floating_text_lifetime_ms;
            self.state.feedback.push_text(
                FeedbackTarget::Enemy(id),
                "Frozen",
                TextTone::Status,
                expiry,
            );
        } else {
            match intent {
                Intent::Attack => {
                    EffectResolver::resolve(
                        &mut self.state,
                        Effect {
                            kind: EffectKind::Damage(value),
                            target: crate::effects::Target::Player,
                        },
                        EffectSource::Enemy(id),
                        None,
                    );
                }
                Intent::Defend | Intent::Buff => {
                    let block = self.state.config.buff_block;
                    let expiry =
                        self.scheduler.now() + self.state.config.vfx_lifetime_ms;
                    if let Some(enemy) = self.state.enemy_mut(id) {
                        enemy.gain_block(block);
                    }
                    self.state
                        .feedback
                        .push_vfx(FeedbackTarget::Enemy(id), VfxKind::Sparkle, expiry);
                }
                Intent::Summon => self.summon_minion(id, max_hp),
                Intent::Special => {
                    let base =
                        (f64::from(value) * self.state.config.special_multiplier).floor() as i32;
                    EffectResolver::resolve(
                        &mut self.state,
                        Effect {
                            kind: EffectKind::Damage(base),
                            target: crate::effects::Target::Player,
                        },
                        EffectSource::Enemy(id),
                        None,
                    );
                }
            }

            let living = self.state.living_enemy_count();
            let roll = IntentRoll::reroll(
                &mut self.state.rng,
                &self.state.config,
                self.state.level,
                is_boss,
                living,
            );
            if let Some(enemy) = self.state.enemy_mut(id) {
                enemy.intent = roll.intent;
                enemy.intent_value = roll.value;
            }
        }

        if self.acting_queue.is_empty() {
            self.finish_enemy_turn();
        } else {
            self.scheduler
                .schedule_in(self.state.config.enemy_act_gap_ms, Task::EnemyAct);
        }
    }

    /// Summon is a documented no-op at the enemy cap.
    fn summon_minion(&mut self, summoner: EntityId, summoner_max_hp: i32) {
        if self.state.living_enemy_count() >= self.state.config.max_enemies {
            return;
        }
        let profile = minion_or_fallback(self.profiles.as_mut(), &mut self.state.rng);
        let opening = IntentRoll::opening(&self.state.config, self.state.level);
        let hp = self.state.config.minion_hp(summoner_max_hp);
        let id = self.state.mint_entity_id();
        let mut minion = Enemy::new(
            id,
            profile.name,
            profile.emoji,
            profile.description,
            hp,
            false,
        );
        minion.intent = opening.intent;
        minion.intent_value = opening.value;
        self.state.enemies.push(minion);

        let expiry = self.scheduler.now() + self.state.config.vfx_lifetime_ms;
        self.state
            .feedback
            .push_vfx(FeedbackTarget::Enemy(summoner), VfxKind::Sparkle, expiry);
        debug!(summoner = summoner.raw(), minion = id.raw(), "minion summoned");
    }

    fn finish_enemy_turn(&mut self) {
        // Enemy statuses run out at the end of their own turn, so a Freeze
        // or Weak applied during the player turn covers one full enemy turn.
        for enemy in self.state.enemies.iter_mut().filter(|e| e.is_alive()) {
            enemy.statuses.tick_decay();
        }
        self.state.turn_count += 1;
        self.begin_player_turn();
    }

    // === Tasks ===

    fn execute(&mut self, task: Task) {
        if self.state.phase == GamePhase::GameOver {
            return;
        }
        match task {
            Task::ResolveEffect {
                effect,
                source,
                chosen,
            } => EffectResolver::resolve(&mut self.state, effect, source, chosen),
            Task::ConsumeDoubleAttack => EffectResolver::consume_double_attack(&mut self.state),
            Task::EnemyAct => {
                if self.state.phase == GamePhase::EnemyTurn {
                    self.enemy_act();
                }
            }
            Task::EnterReward => self.enter_reward(),
            Task::AutoPass { token } => self.auto_pass(token),
        }
    }

    fn enter_reward(&mut self) {
        if !self.victory_pending {
            return;
        }
        self.victory_pending = false;

        let mut pool = catalog::reward_card_pool();
        self.state.rng.shuffle(&mut pool);
        let cards: Vec<CardTemplate> = pool
            .into_iter()
            .take(self.state.config.reward_card_count)
            .map(|id| self.registry.get_unchecked(id).clone())
            .collect();

        let skill = if self.state.boss_present() {
            let owned: Vec<_> = self.state.player.skills.iter().map(|s| s.id).collect();
            let candidates: Vec<Skill> = catalog::reward_skill_pool()
                .into_iter()
                .filter(|s| !owned.contains(&s.id))
                .collect();
            self.state
                .rng
                .choose(&candidates)
                .cloned()
        } else {
            None
        };

        self.state.rewards = Some(Rewards { cards, skill });
        self.state.phase = GamePhase::Reward;
        info!(level = self.state.level, "victory");
    }

    // === Outcome checks ===

    fn after_change(&mut self) {
        match self.state.phase {
            GamePhase::PlayerTurn | GamePhase::EnemyTurn => {}
            _ => return,
        }

        // Defeat is immediate and terminal.
        if self.state.player.is_defeated() {
            self.state.phase = GamePhase::GameOver;
            self.scheduler.clear();
            self.pending.clear();
            self.acting_queue.clear();
            info!(level = self.state.level, turn = self.state.turn_count, "defeat");
            return;
        }

        // Victory waits out a short delay before the reward screen.
        if self.state.all_enemies_defeated() && !self.victory_pending {
            self.victory_pending = true;
            self.scheduler
                .schedule_in(self.state.config.victory_delay_ms, Task::EnterReward);
            return;
        }

        self.arm_auto_pass_if_stuck();
    }

    fn arm_auto_pass_if_stuck(&mut self) {
        if self.auto_pass_armed
            || self.state.phase != GamePhase::PlayerTurn
            || self.state.has_playable_action()
            || self.state.living_enemy_count() == 0
        {
            return;
        }
        self.auto_pass_token += 1;
        self.auto_pass_armed = true;
        self.scheduler.schedule_in(
            self.state.config.auto_pass_delay_ms,
            Task::AutoPass {
                token: self.auto_pass_token,
            },
        );
    }

    fn auto_pass(&mut self, token: u64) {
        if token != self.auto_pass_token {
            return;
        }
        self.auto_pass_armed = false;
        if self.state.phase == GamePhase::PlayerTurn
            && !self.state.has_playable_action()
            && self.state.living_enemy_count() > 0
        {
            debug!(turn = self.state.turn_count, "auto-passing stuck turn");
            self.end_player_turn();
        }
    }

    fn disarm_auto_pass(&mut self) {
        self.auto_pass_token += 1;
        self.auto_pass_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_flow_to_player_turn() {
        let mut game = Game::new(EngineConfig::default(), 7);
        game.submit(Command::StartGame);
        game.submit(Command::SelectCharacter { index: 0 });
        game.tick(0);

        assert_eq!(game.state().phase, GamePhase::PlayerTurn);
        assert_eq!(game.state().turn_count, 1);
        assert!(!game.state().enemies.is_empty());
        assert_eq!(game.state().piles.hand.len(), 4);
    }

    #[test]
    fn test_commands_outside_phase_are_rejected() {
        let mut game = Game::new(EngineConfig::default(), 7);
        game.submit(Command::EndTurn);
        game.tick(0);

        assert_eq!(game.state().phase, GamePhase::StartScreen);
        let record = game.state().history.last().unwrap();
        assert_eq!(record.rejection, Some(Rejection::WrongPhase));
    }

    #[test]
    fn test_level_one_is_not_boss() {
        let mut game = Game::new(EngineConfig::default(), 7);
        game.submit(Command::StartGame);
        game.submit(Command::SelectCharacter { index: 1 });
        game.tick(0);

        assert_eq!(game.state().enemies.len(), 1);
        assert!(!game.state().enemies[0].is_boss);
        assert_eq!(game.state().enemies[0].intent, Intent::Attack);
        assert_eq!(game.state().enemies[0].intent_value, 7);
    }
}
