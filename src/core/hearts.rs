use super::constants::{
    COMPLETION_MESSAGES, HEARTS_PER_TAP_MAX, HEARTS_PER_TAP_MIN, HEART_GOAL, HEART_JITTER,
    HEART_SIZE_MAX, HEART_SIZE_MIN, HEART_SPAWN_STAGGER_SEC,
};
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct HeartParticle {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation_degrees: f32,
    pub spawn_delay_seconds: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    pub score: u32,
    pub is_complete: bool,
    pub completion_message: &'static str,
}

/// Sound the frontend should play in response to a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCue {
    Tap,
    Completion,
}

pub type ParticleBatch = SmallVec<[u64; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct TapOutcome {
    /// Ids to remove once the visual lifetime elapses.
    pub batch: ParticleBatch,
    pub cues: SmallVec<[GameCue; 2]>,
    pub just_completed: bool,
}

pub struct HeartGame {
    state: GameState,
    particles: Vec<HeartParticle>,
    next_id: u64,
    completion_cue_played: bool,
    rng: StdRng,
}

impl HeartGame {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::default(),
            particles: Vec::new(),
            next_id: 0,
            completion_cue_played: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn particles(&self) -> &[HeartParticle] {
        &self.particles
    }

    /// Live particles belonging to one tap batch, in spawn order.
    pub fn batch_particles<'a>(
        &'a self,
        ids: &'a [u64],
    ) -> impl Iterator<Item = &'a HeartParticle> + 'a {
        self.particles.iter().filter(move |p| ids.contains(&p.id))
    }

    /// Progress towards the goal in percent, capped at 100.
    pub fn progress_percent(&self) -> f32 {
        (self.state.score as f32 / HEART_GOAL as f32 * 100.0).min(100.0)
    }

    /// Click / touch-start at surface position (x, y). Returns `None` once complete.
    pub fn tap(&mut self, x: f32, y: f32) -> Option<TapOutcome> {
        if self.state.is_complete {
            return None;
        }
        let count = self.rng.gen_range(HEARTS_PER_TAP_MIN..=HEARTS_PER_TAP_MAX);
        let mut batch = ParticleBatch::new();
        for i in 0..count {
            let id = self.next_id;
            self.next_id += 1;
            self.particles.push(HeartParticle {
                id,
                x: x + self.rng.gen_range(-HEART_JITTER..=HEART_JITTER),
                y: y + self.rng.gen_range(-HEART_JITTER..=HEART_JITTER),
                size: self.rng.gen_range(HEART_SIZE_MIN..=HEART_SIZE_MAX),
                rotation_degrees: self.rng.gen_range(0.0..360.0),
                spawn_delay_seconds: i as f32 * HEART_SPAWN_STAGGER_SEC,
            });
            batch.push(id);
        }
        self.state.score += count;

        let mut cues = SmallVec::new();
        cues.push(GameCue::Tap);
        let mut just_completed = false;
        if self.state.score >= HEART_GOAL && !self.state.is_complete {
            self.state.is_complete = true;
            self.state.completion_message = COMPLETION_MESSAGES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(COMPLETION_MESSAGES[0]);
            just_completed = true;
            if !self.completion_cue_played {
                self.completion_cue_played = true;
                cues.push(GameCue::Completion);
            }
            log::info!(
                "[game] complete at score {}: {}",
                self.state.score,
                self.state.completion_message
            );
        }
        Some(TapOutcome {
            batch,
            cues,
            just_completed,
        })
    }

    /// Drop the given particles; ids that are already gone are skipped.
    pub fn remove_particles(&mut self, ids: &[u64]) {
        self.particles.retain(|p| !ids.contains(&p.id));
    }

    pub fn reset(&mut self) {
        self.state = GameState::default();
        self.particles.clear();
        self.completion_cue_played = false;
    }
}
