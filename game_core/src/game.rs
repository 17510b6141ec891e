//! Simulation owner
//!
//! [`Game`] holds every piece of mutable session state and exposes the
//! session transitions: jump, advance, crash, answer and reset.

use hecs::{Entity, World};
use log::info;

use crate::quiz::{QuizOverlay, Verdict};
use crate::storage::{load_high_score, save_high_score, HighScoreStore};
use crate::{
    create_bird, step, Bird, Config, Events, Field, GameRng, InputQueue, Pipe, QuestionBank,
    Score, SessionAction, SessionFsm, SessionState, Snapshot, Time, TransitionResult,
};

pub struct Game<S: HighScoreStore> {
    pub world: World,
    pub bird: Entity,
    pub time: Time,
    pub field: Field,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
    pub fsm: SessionFsm,
    pub bank: QuestionBank,
    pub quiz: Option<QuizOverlay>,
    pub store: S,
    next_pipe_seq: u32,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(config: Config, store: S, seed: u64) -> Self {
        let high = load_high_score(&store);
        let field = Field::new(&config);
        let mut world = World::new();
        let bird = create_bird(&mut world, config.bird_start_y);

        let mut game = Self {
            world,
            bird,
            time: Time::new(),
            field,
            config,
            score: Score::new(high),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            fsm: SessionFsm::new(),
            bank: QuestionBank::new(),
            quiz: None,
            store,
            next_pipe_seq: 0,
        };
        game.reset_round(false);
        game
    }

    pub fn state(&self) -> SessionState {
        self.fsm.state()
    }

    /// Jump input. Starts the run from Idle; otherwise latches one impulse
    /// for the next tick. Ignored once crashed.
    pub fn jump(&mut self) -> bool {
        match self.fsm.state() {
            SessionState::Idle => {
                self.fsm.transition(SessionAction::Jump);
                self.time.discard_remainder();
                true
            }
            SessionState::Running => {
                self.input.push_jump();
                true
            }
            SessionState::AwaitingAnswer | SessionState::Over => false,
        }
    }

    /// Feed one display frame worth of time. Returns the ticks simulated.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !self.fsm.is_running() {
            self.time.discard_remainder();
            return 0;
        }

        let due = self.time.accumulate(frame_dt);
        let mut ran = 0;
        for _ in 0..due {
            ran += 1;
            if !self.tick() {
                break;
            }
        }
        ran
    }

    /// Run a single fixed tick. Returns whether the session is still running.
    pub fn tick(&mut self) -> bool {
        if !self.fsm.is_running() {
            return false;
        }

        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
            &mut self.next_pipe_seq,
        );
        self.time.tick += 1;

        if self.events.crashed() {
            self.crash();
            return false;
        }
        true
    }

    /// Running -> AwaitingAnswer: freeze, persist a beaten high score and
    /// draw a question.
    fn crash(&mut self) {
        if !self.fsm.transition(SessionAction::Crash).success {
            return;
        }
        self.input.clear();
        self.time.discard_remainder();

        if self.score.is_new_high() {
            self.score.high = self.score.current;
            save_high_score(&mut self.store, self.score.current);
        }

        let question = self.bank.pick_random(&mut self.rng);
        info!(
            "crashed at score {} ({})",
            self.score.current,
            if self.events.hit_pipe { "pipe" } else { "bounds" }
        );
        self.quiz = Some(QuizOverlay::new(question));
    }

    /// Pick a quiz option. The verdict tells the caller how long to show
    /// the reveal before calling [`Game::resolve_quiz`].
    pub fn select_answer(&mut self, option: usize) -> Option<Verdict> {
        if self.fsm.state() != SessionState::AwaitingAnswer {
            return None;
        }
        self.quiz.as_mut()?.select(option)
    }

    /// Apply the locked-in quiz answer
    pub fn resolve_quiz(&mut self) -> Option<TransitionResult> {
        let verdict = self.quiz.as_ref()?.verdict()?;
        Some(self.answer(verdict.correct))
    }

    /// External answer signal: revive on a correct answer, end on a wrong one
    pub fn answer(&mut self, correct: bool) -> TransitionResult {
        let action = if correct {
            SessionAction::AnswerCorrect
        } else {
            SessionAction::AnswerIncorrect
        };
        let result = self.fsm.transition(action);
        if result.success {
            self.quiz = None;
            if correct {
                self.reset_round(self.config.revive_keeps_score);
            }
        }
        result
    }

    /// Over -> Idle with a fresh round and zero score
    pub fn reset(&mut self) -> TransitionResult {
        let result = self.fsm.transition(SessionAction::Reset);
        if result.success {
            self.quiz = None;
            self.reset_round(false);
        }
        result
    }

    /// Put the bird back at the start and reseed the pipes
    fn reset_round(&mut self, keep_score: bool) {
        self.world.clear();
        self.bird = create_bird(&mut self.world, self.config.bird_start_y);
        self.next_pipe_seq = 0;
        self.events.clear();
        crate::systems::spawn_pipes(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.next_pipe_seq,
            &mut self.rng,
            &mut self.events,
        );
        self.input.clear();
        self.time.discard_remainder();
        if !keep_score {
            self.score.current = 0;
        }
    }

    /// Container width changed
    pub fn resize(&mut self, container_width: f32) {
        self.field.resize(container_width, &self.config);
    }

    pub fn bird_state(&self) -> Bird {
        self.world
            .get::<&Bird>(self.bird)
            .map(|bird| *bird)
            .unwrap_or_else(|_| Bird::new(self.config.bird_start_y))
    }

    /// Pipes oldest first
    pub fn pipes(&self) -> Vec<Pipe> {
        let mut pipes: Vec<Pipe> = self
            .world
            .query::<&Pipe>()
            .iter()
            .map(|(_e, pipe)| *pipe)
            .collect();
        pipes.sort_by_key(|pipe| pipe.seq);
        pipes
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.fsm.state(),
            &self.field,
            &self.config,
            &self.bird_state(),
            &self.pipes(),
            self.score.current,
            self.score.high,
        )
    }
}
