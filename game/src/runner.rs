use anyhow::{Result, anyhow};
use gridmon_input::{Key, ScriptStep};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::event::GameEvent;
use crate::handler::GameHandler;
use crate::session::Session;

/// Something that drives a session forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// Elapsed milliseconds
    Tick(u32),
}

impl From<ScriptStep> for Input {
    fn from(step: ScriptStep) -> Self {
        match step {
            ScriptStep::Press(key) => Input::Key(key),
            ScriptStep::Wait(ms) => Input::Tick(ms),
        }
    }
}

/// Cloneable handle for feeding input to a running session.
///
/// This can be passed to handlers and input sources and cloned freely.
#[derive(Clone)]
pub struct InputHandle {
    tx: mpsc::UnboundedSender<Input>,
}

impl InputHandle {
    fn send(&self, input: Input) -> Result<()> {
        self.tx
            .send(input)
            .map_err(|_| anyhow!("Session stopped"))
    }

    pub fn press(&self, key: Key) -> Result<()> {
        self.send(Input::Key(key))
    }

    pub fn tick(&self, dt_ms: u32) -> Result<()> {
        self.send(Input::Tick(dt_ms))
    }

    /// Queue a whole key script
    pub fn play(&self, steps: impl IntoIterator<Item = ScriptStep>) -> Result<()> {
        steps.into_iter().try_for_each(|step| self.send(step.into()))
    }
}

/// Owns a session and applies input to it, dispatching events to a handler.
pub struct Runner {
    incoming: mpsc::UnboundedReceiver<Input>,
    session: Session,
}

/// Create a runner and the handle that feeds it
pub fn channel(session: Session) -> (Runner, InputHandle) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        Runner {
            incoming: rx,
            session,
        },
        InputHandle { tx },
    )
}

impl Runner {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run the input loop, dispatching events to the handler.
    ///
    /// This will run until every `InputHandle` is dropped or the handler
    /// asks to stop after an error.
    pub async fn run<H: GameHandler>(&mut self, handler: &mut H) -> Result<()> {
        while let Some(input) = self.incoming.recv().await {
            let events = match input {
                Input::Key(key) => match self.session.press(key) {
                    Ok(events) => events,
                    Err(e) => {
                        warn!(%key, error = %e, "key rejected");
                        if handler.on_error(&e).await {
                            continue;
                        }
                        return Err(e.into());
                    }
                },
                Input::Tick(dt_ms) => self.session.tick(dt_ms),
            };

            for event in events {
                dispatch_event(handler, &event).await;
            }
        }
        debug!("input closed, runner stopping");
        Ok(())
    }
}

/// Dispatch a single event to the appropriate handler method
async fn dispatch_event<H: GameHandler>(handler: &mut H, event: &GameEvent) {
    match event {
        GameEvent::SceneChanged { from, to } => {
            handler.on_scene_changed(*from, *to).await;
        }
        GameEvent::RoundStarted {
            round,
            player,
            enemy,
            ..
        } => {
            handler.on_round_started(*round, player, enemy).await;
        }
        GameEvent::PlayerMoved { from, to } => {
            handler.on_player_moved(*from, *to).await;
        }
        GameEvent::Hit(hit) => {
            handler.on_hit(hit).await;
        }
        GameEvent::EnemyFainted { name } => {
            handler.on_enemy_fainted(name).await;
        }
        GameEvent::RewardsOffered { options } => {
            handler.on_rewards_offered(options).await;
        }
        _ => {}
    }
    handler.on_event(event).await;
}
