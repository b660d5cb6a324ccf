//! Client controller, the state machine driving screens and network traffic.
//!
//! The controller owns one unbounded channel. Every network request runs in
//! its own task and reports back as a [`NetEvent`]; the render loop drains
//! the channel between frames. Screens never touch the network, they only
//! emit [`ScreenTransition`] values for the controller to act on.

use crossterm::event::{self, Event, KeyEventKind};
use hexfill::{ApiError, Color, GameApi, GameId, Session};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument, warn};

use crate::config::ClientConfig;
use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, NewGameScreen, PendingScreen};
use crate::store::SessionStore;

/// Result of a network request, reported back to the render loop.
#[derive(Debug)]
pub enum NetEvent {
    /// A create-game request finished.
    Created(Result<GameId, ApiError>),
    /// A fetch-game request finished.
    Loaded(Result<Session, ApiError>),
    /// A submit-move request finished. `Ok(None)` is a rejection.
    MoveResolved(Result<Option<Session>, ApiError>),
}

/// Active screen in the client state machine.
#[derive(Debug)]
enum ActiveScreen {
    NewGame(NewGameScreen),
    Pending(PendingScreen),
    Game(GameScreen),
}

/// Controller that drives the client state machine.
///
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug)]
pub struct Controller {
    api: GameApi,
    store: SessionStore,
    config: ClientConfig,
    event_tx: mpsc::UnboundedSender<NetEvent>,
    event_rx: mpsc::UnboundedReceiver<NetEvent>,
    game_id: Option<GameId>,
    screen: ActiveScreen,
}

impl Controller {
    /// Creates a controller from resolved configuration.
    #[instrument(skip(config))]
    pub fn new(config: ClientConfig) -> Self {
        info!(server_url = %config.server_url(), "Creating Controller");
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            api: GameApi::new(config.server_url().clone()),
            store: SessionStore::new(config.session_file().clone()),
            config,
            event_tx,
            event_rx,
            game_id: None,
            screen: ActiveScreen::NewGame(NewGameScreen::new()),
        }
    }

    /// Runs the client event loop until the user quits.
    ///
    /// Bootstraps from the session store, then alternates rendering,
    /// draining network events, and handling input.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        self.bootstrap()?;

        loop {
            terminal.draw(|frame| match &self.screen {
                ActiveScreen::NewGame(s) => s.render(frame),
                ActiveScreen::Pending(s) => s.render(frame),
                ActiveScreen::Game(s) => s.render(frame),
            })?;

            while let Ok(event) = self.event_rx.try_recv() {
                self.handle_net_event(event);
            }

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    // Skip key release events (crossterm fires both).
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    let transition = match &mut self.screen {
                        ActiveScreen::NewGame(s) => s.handle_key(key),
                        ActiveScreen::Pending(s) => s.handle_key(key),
                        ActiveScreen::Game(s) => s.handle_key(key),
                    };
                    if !self.apply_transition(transition) {
                        info!("Client quitting");
                        return Ok(());
                    }
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Decides the first screen from the session store.
    ///
    /// A stored id goes straight to a fetch; no stored id means board-size
    /// selection. A store that cannot be read at all is a fatal start error.
    #[instrument(skip(self))]
    fn bootstrap(&mut self) -> anyhow::Result<()> {
        match self.store.load()? {
            Some(id) => {
                info!(game_id = %id, "Resuming stored game");
                self.spawn_fetch(id);
            }
            None => {
                info!("No stored game, offering board sizes");
                self.screen = ActiveScreen::NewGame(NewGameScreen::new());
            }
        }
        Ok(())
    }

    /// Applies a screen transition. Returns `false` to quit.
    #[instrument(skip(self, transition))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::Quit => return false,
            ScreenTransition::CreateGame { width, height } => {
                info!(width, height, "Creating game");
                self.spawn_create(width, height);
            }
            ScreenTransition::SubmitMove { color } => {
                if let Some(id) = self.game_id.clone() {
                    self.spawn_move(id, color);
                } else {
                    // Screens only emit moves while attached to a game.
                    warn!("Move requested without an attached game");
                }
            }
            ScreenTransition::StartOver => {
                if let Err(e) = self.store.clear() {
                    warn!(error = %e, "Failed to clear the session store");
                }
                self.game_id = None;
                info!("Returning to board-size selection");
                self.screen = ActiveScreen::NewGame(NewGameScreen::new());
            }
        }
        true
    }

    /// Folds a finished network request into the state machine.
    ///
    /// Events that no longer match the active screen (the user started over
    /// while a request was in flight) are logged and dropped.
    #[instrument(skip(self, event))]
    fn handle_net_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::Created(Ok(id)) => {
                info!(game_id = %id, "Game created, persisting id");
                if let Err(e) = self.store.save(&id) {
                    // Play continues; only resuming after exit is lost.
                    warn!(error = %e, "Failed to persist the game id");
                }
                self.spawn_fetch(id);
            }
            NetEvent::Created(Err(e)) => {
                warn!(error = %e, "Create failed");
                let mut screen = NewGameScreen::new();
                screen.set_status(format!("Could not create a game: {}", e.message));
                self.screen = ActiveScreen::NewGame(screen);
            }
            NetEvent::Loaded(Ok(session)) => match &self.game_id {
                Some(id) => {
                    info!(game_id = %id, "Game loaded");
                    self.screen = ActiveScreen::Game(GameScreen::new(
                        id.clone(),
                        session,
                        *self.config.cell_width(),
                        *self.config.cell_height(),
                    ));
                }
                None => debug!("Dropping stale load result"),
            },
            NetEvent::Loaded(Err(e)) => {
                error!(error = %e, "Load failed");
                if matches!(self.screen, ActiveScreen::Pending(_)) {
                    self.screen = ActiveScreen::Pending(PendingScreen::failed(format!(
                        "Failed to load game: {}",
                        e.message
                    )));
                }
            }
            NetEvent::MoveResolved(outcome) => {
                let ActiveScreen::Game(screen) = &mut self.screen else {
                    debug!("Dropping stale move result");
                    return;
                };
                match outcome {
                    Ok(Some(session)) => screen.apply_snapshot(session),
                    Ok(None) => {
                        warn!("Move rejected by the service");
                        screen.move_failed("Move rejected by the service.");
                    }
                    Err(e) => {
                        warn!(error = %e, "Move failed");
                        screen.move_failed(&format!("Move failed: {}", e.message));
                    }
                }
            }
        }
    }

    /// Creates a game on the service in a background task.
    fn spawn_create(&mut self, width: u16, height: u16) {
        self.screen = ActiveScreen::Pending(PendingScreen::loading("Creating game..."));
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.create_game(width, height).await;
            // The receiver only closes on shutdown.
            let _ = tx.send(NetEvent::Created(result));
        });
    }

    /// Fetches the current snapshot of `id` in a background task.
    fn spawn_fetch(&mut self, id: GameId) {
        self.screen =
            ActiveScreen::Pending(PendingScreen::loading(format!("Loading game {id}...")));
        self.game_id = Some(id.clone());
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_game(&id).await;
            let _ = tx.send(NetEvent::Loaded(result));
        });
    }

    /// Submits a move in a background task.
    fn spawn_move(&mut self, id: GameId, color: Color) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.submit_move(&id, color).await;
            let _ = tx.send(NetEvent::MoveResolved(result));
        });
    }
}
