//! The round controller.
//!
//! `Game` owns the participant list, the countdown, the RNG, and the timer
//! scheduler. It is constructed explicitly and driven explicitly: callers
//! advance the virtual clock with `advance`, submit guesses through
//! `handle_action`, and drain `ViewEvent`s for the rendering layer. No
//! global state, no wall-clock timers.
//!
//! ## Cycle lifecycle
//!
//! A cycle-setup pass runs once at construction and again on every tick
//! that leaves time on the countdown:
//!
//! 1. Every participant gets a fresh uniform target/limb assignment, a
//!    mirrored countdown value, and cleared selection state.
//! 2. One participant is chosen uniformly at random as the cycle's actor.
//!    With the configured probability (0.6 by default) the action they must
//!    perform is their own assignment; otherwise it is drawn uniformly from
//!    all four pairs.
//! 3. Two one-shots are armed: the alert hide (+3 s) and the actor reveal
//!    (+5 s). Until the reveal fires, nobody is marked selected.
//!
//! On reveal the actor is marked selected and their assigned action is
//! auto-submitted through `handle_action`, the same path manual guesses
//! take. A tick that exhausts the countdown cancels the repeating tick and
//! every pending cycle one-shot before computing the report, so no timer
//! mutates participant state after the game has ended.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::core::{
    ActionOutcome, ActionPair, ConfigError, GameConfig, GameRng, Limb, Participant, RejectReason,
    Target,
};
use crate::timing::{Scheduler, TimerId};
use crate::view::{GameView, ViewEvent};

use super::report::GameReport;

/// What a pending timer means to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
    /// Repeating countdown tick, period = cycle length.
    Tick,
    /// One-shot actor reveal for the current cycle.
    RevealActor,
    /// One-shot alert hide for the current cycle.
    HideAlert,
    /// One-shot expiry of the end-of-game report.
    ExpireReport,
}

/// Actor choice made at cycle setup, installed when the reveal fires.
#[derive(Clone, Copy, Debug)]
struct PendingReveal {
    actor: usize,
    action: ActionPair,
}

/// The game's round controller.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    participants: Vec<Participant>,
    remaining_time: u32,
    rng: GameRng,
    scheduler: Scheduler<TimerKind>,
    tick_timer: Option<TimerId>,
    cycle_timers: Vec<TimerId>,
    pending_reveal: Option<PendingReveal>,
    started: bool,
    finished: bool,
    report: Option<GameReport>,
    events: VecDeque<ViewEvent>,
}

impl Game {
    /// Create a game and run the first cycle-setup pass.
    ///
    /// Participants are named `User1..UserN` in display order. The repeating
    /// tick is not armed until `start`, but the first cycle's one-shots are,
    /// so advancing the clock past the reveal delay reveals the first actor
    /// even before `start`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let participants = (1..=config.participant_count)
            .map(|i| Participant::new(format!("User{i}")))
            .collect();

        let mut game = Self {
            remaining_time: config.total_duration,
            config,
            participants,
            rng: GameRng::new(seed),
            scheduler: Scheduler::new(),
            tick_timer: None,
            cycle_timers: Vec::new(),
            pending_reveal: None,
            started: false,
            finished: false,
            report: None,
            events: VecDeque::new(),
        };
        game.setup_cycle();
        Ok(game)
    }

    /// Arm the repeating countdown tick and signal the rendering layer.
    ///
    /// Calling `start` more than once is a no-op.
    pub fn start(&mut self) {
        if self.started || self.finished {
            return;
        }
        self.started = true;
        self.tick_timer = Some(
            self.scheduler
                .schedule_repeating(u64::from(self.config.cycle_length), TimerKind::Tick),
        );
        info!(
            participants = self.participants.len(),
            duration = self.config.total_duration,
            "game started"
        );
        self.events.push_back(ViewEvent::GameStarted);
        self.events.push_back(ViewEvent::ParticipantsChanged);
    }

    /// Advance the virtual clock by `seconds`, firing due timers in order.
    ///
    /// Each timer's handler runs before the next timer fires, so a tick's
    /// cycle setup can arm one-shots that fire later in the same window.
    pub fn advance(&mut self, seconds: u64) {
        let target = self.scheduler.now() + seconds;
        while let Some(fired) = self.scheduler.fire_next(target) {
            match fired.kind {
                TimerKind::Tick => self.on_tick(),
                TimerKind::RevealActor => self.on_reveal(),
                TimerKind::HideAlert => self.events.push_back(ViewEvent::AlertHidden),
                TimerKind::ExpireReport => self.events.push_back(ViewEvent::ReportExpired),
            }
        }
        self.scheduler.set_now(target);
    }

    /// Submit a guess for the named participant.
    ///
    /// The single score-mutation path: manual guesses and the actor's
    /// auto-submitted action both land here. A guess is rejected, with no
    /// state change, for an unknown name or a participant who has already
    /// guessed this cycle.
    pub fn handle_action(&mut self, name: &str, target: Target, limb: Limb) -> ActionOutcome {
        let Some(participant) = self.participants.iter_mut().find(|p| p.name() == name) else {
            debug!(name, "guess for unknown participant ignored");
            return ActionOutcome::Rejected(RejectReason::UnknownParticipant);
        };
        if participant.has_selected() {
            debug!(name, "repeat guess ignored");
            return ActionOutcome::Rejected(RejectReason::AlreadySelected);
        }

        let correct = target == participant.target() && limb == participant.limb();
        participant.update_points(correct);
        participant.mark_guessed();
        debug!(name, correct, points = participant.points(), "guess scored");
        self.events.push_back(ViewEvent::ParticipantsChanged);
        ActionOutcome::Accepted { correct }
    }

    /// Participants in display order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Look up a participant by name.
    #[must_use]
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name() == name)
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// Current virtual clock value in seconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Whether the countdown has run out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The end-of-game report, once the game has finished.
    #[must_use]
    pub fn report(&self) -> Option<&GameReport> {
        self.report.as_ref()
    }

    /// Snapshot the current render state.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::of(&self.participants, self.remaining_time)
    }

    /// Take all queued view events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        self.events.drain(..).collect()
    }

    fn on_tick(&mut self) {
        self.remaining_time = self.remaining_time.saturating_sub(self.config.cycle_length);
        debug!(remaining = self.remaining_time, "tick");
        if self.remaining_time == 0 {
            self.finish();
        } else {
            self.setup_cycle();
        }
    }

    /// Assign fresh targets and limbs, pick the cycle's actor, and arm the
    /// cycle one-shots.
    fn setup_cycle(&mut self) {
        for id in self.cycle_timers.drain(..) {
            self.scheduler.cancel(id);
        }

        self.events.push_back(ViewEvent::AlertShown);

        for participant in &mut self.participants {
            participant.set_target(self.rng.random_target());
            participant.set_limb(self.rng.random_limb());
            participant.set_remaining_time(self.remaining_time);
            participant.reset_selection();
        }

        let actor = self.rng.random_index(self.participants.len());
        let action = if self.rng.chance(self.config.trivial_probability) {
            self.participants[actor].assignment()
        } else {
            self.rng.random_pair()
        };
        self.pending_reveal = Some(PendingReveal { actor, action });
        debug!(
            actor = self.participants[actor].name(),
            %action,
            "cycle set up"
        );

        let hide = self
            .scheduler
            .schedule_once(u64::from(self.config.alert_duration), TimerKind::HideAlert);
        let reveal = self
            .scheduler
            .schedule_once(u64::from(self.config.reveal_delay), TimerKind::RevealActor);
        self.cycle_timers = vec![hide, reveal];

        self.events.push_back(ViewEvent::CycleStarted);
        self.events.push_back(ViewEvent::ParticipantsChanged);
    }

    /// Install the cycle's actor and auto-submit their assigned action.
    fn on_reveal(&mut self) {
        let Some(PendingReveal { actor, action }) = self.pending_reveal.take() else {
            return;
        };
        let name = self.participants[actor].name().to_string();
        self.participants[actor].mark_selected(action);
        debug!(actor = %name, %action, "actor revealed");
        self.events.push_back(ViewEvent::ActorRevealed {
            name: name.clone(),
            action,
        });

        let outcome = self.handle_action(&name, action.target, action.limb);
        if !outcome.is_accepted() {
            debug!(actor = %name, ?outcome, "auto-submission not scored");
        }
    }

    /// Terminal transition: stop every timer, zero the mirrored countdowns,
    /// and publish the report.
    fn finish(&mut self) {
        if let Some(id) = self.tick_timer.take() {
            self.scheduler.cancel(id);
        }
        for id in self.cycle_timers.drain(..) {
            self.scheduler.cancel(id);
        }
        self.pending_reveal = None;

        for participant in &mut self.participants {
            participant.set_remaining_time(0);
        }
        self.finished = true;

        let report = GameReport::from_participants(&self.participants);
        info!(%report, "game ended");
        self.events.push_back(ViewEvent::GameEnded(report.clone()));
        self.report = Some(report);

        self.scheduler
            .schedule_once(u64::from(self.config.report_duration), TimerKind::ExpireReport);
    }
}
