//! Frame-callback glue around a [`Session`].
//!
//! The host calls `tick(dt)` once per animation frame. The runner converts
//! the variable delta into fixed simulation steps, dispatches outbound
//! sounds/events to the sinks, and rebuilds the draw list. Dropping the
//! runner tears the session down; nothing survives it.

use dash_engine::{
    build_draw_list, AnimClip, AnimLatch, DrawList, FixedTimestep, InputEvent, InputQueue,
    RunEvent, Session, SessionSnapshot,
};

use crate::sinks::{AudioSink, NullAudioSink, NullScoreSink, ScoreSink};

pub struct SessionRunner<S: ScoreSink = NullScoreSink, A: AudioSink = NullAudioSink> {
    session: Session,
    input: InputQueue,
    draw_list: DrawList,
    timestep: FixedTimestep,
    anim: AnimLatch,
    last_clip_change: Option<AnimClip>,
    score_sink: S,
    audio_sink: A,
}

impl SessionRunner<NullScoreSink, NullAudioSink> {
    /// Runner with no outbound wiring — scores dropped, audio silent.
    pub fn new(session: Session) -> Self {
        Self::with_sinks(session, NullScoreSink, NullAudioSink)
    }
}

impl<S: ScoreSink, A: AudioSink> SessionRunner<S, A> {
    pub fn with_sinks(session: Session, score_sink: S, audio_sink: A) -> Self {
        let cfg = session.config();
        let timestep = FixedTimestep::new(cfg.fixed_dt, cfg.max_steps_per_frame);
        let max_instances = cfg.max_instances;
        Self {
            session,
            input: InputQueue::new(),
            draw_list: DrawList::with_capacity(max_instances),
            timestep,
            anim: AnimLatch::new(),
            last_clip_change: None,
            score_sink,
            audio_sink,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply input once, step the simulation the fixed
    /// number of times the delta covers, dispatch outbound, rebuild draws.
    pub fn tick(&mut self, dt: f32) {
        self.session.handle_input(&self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.session.step();
        }

        // Fire-and-forget audio.
        for cue in self.session.take_sounds() {
            self.audio_sink.play(cue);
        }

        // The one persistence seam: final score, once per run. Failures
        // are logged and dropped; gameplay never sees them.
        for event in self.session.take_events() {
            if let RunEvent::GameOver { final_score } = event {
                if let Err(err) = self.score_sink.persist(final_score) {
                    log::warn!("score persist failed, {final_score} points dropped: {err}");
                }
            }
        }

        // Clip changes are edges, not levels: the sprite layer only hears
        // about transitions.
        let clip = dash_engine::clip_for(self.session.status(), self.session.player().airborne);
        self.last_clip_change = self.anim.apply(clip);

        // Rendering continues while paused; it redraws the frozen state.
        build_draw_list(&self.session, &mut self.draw_list);
    }

    /// The clip change from the most recent tick, if any.
    pub fn clip_change(&self) -> Option<AnimClip> {
        self.last_clip_change
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn score_sink(&self) -> &S {
        &self.score_sink
    }

    pub fn audio_sink(&self) -> &A {
        &self.audio_sink
    }
}
