//! Console host session
//!
//! Plays the role of the surrounding application: it owns the input surface,
//! feeds it pointer and key events, presses the panel's buttons, and receives
//! applied configurations over a channel.

use crate::config::PanelLayout;
use crate::controller::{ChannelTarget, PanelController, PanelState};
use crate::host::command::HostCommand;
use crate::input::{InputEvent, InputSurface, Rect};
use crate::params::{ArticleParams, FieldChange};
use parking_lot::Mutex;
use std::sync::{Arc, mpsc};
use tracing::{debug, warn};

/// Applied configurations buffered between two commands
const APPLY_QUEUE_CAPACITY: usize = 16;

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Panel visibility after a toggle
    Visibility(bool),
    /// An input event was dispatched
    Dispatched {
        /// Listeners that received the event
        delivered: usize,
        /// Visibility afterwards
        open: bool,
    },
    /// The draft changed
    Edited(FieldChange),
    /// The host received a configuration
    Applied(ArticleParams),
    /// Current state, for rendering
    State(PanelState),
    /// Panel layout changed
    Moved(Rect),
    /// Usage requested
    Help,
    /// Session should end
    Quit,
}

/// A panel embedded in the console host
pub struct Session {
    controller: PanelController,
    surface: InputSurface,
    layout: Arc<Mutex<Rect>>,
    applied_rx: mpsc::Receiver<ArticleParams>,
    /// Last configuration the host applied
    live: ArticleParams,
}

impl Session {
    /// Create a session with the panel closed and defaults applied
    pub fn new(layout: PanelLayout) -> Self {
        let surface = InputSurface::new();
        let layout = Arc::new(Mutex::new(layout.rect()));
        let (applied_tx, applied_rx) = mpsc::sync_channel(APPLY_QUEUE_CAPACITY);

        let region = Arc::clone(&layout);
        let controller = PanelController::new(
            surface.clone(),
            move || Some(*region.lock()),
            ChannelTarget(applied_tx),
        );

        Self {
            controller,
            surface,
            layout,
            applied_rx,
            live: ArticleParams::default(),
        }
    }

    /// Execute one command
    pub fn execute(&mut self, command: HostCommand) -> Response {
        debug!("Executing {:?}", command);

        match command {
            HostCommand::Toggle => Response::Visibility(self.controller.toggle()),
            HostCommand::Click(position) => {
                self.dispatch(&InputEvent::PointerDown { position })
            }
            HostCommand::Key(key) => self.dispatch(&InputEvent::KeyDown { key }),
            HostCommand::Set(change) => {
                self.controller.set_field(change);
                Response::Edited(change)
            }
            HostCommand::Submit => {
                self.controller.submit();
                self.take_applied()
            }
            HostCommand::Reset => {
                self.controller.reset_to_default();
                self.take_applied()
            }
            HostCommand::Show => Response::State(self.controller.state()),
            HostCommand::Move(rect) => {
                *self.layout.lock() = rect;
                Response::Moved(rect)
            }
            HostCommand::Help => Response::Help,
            HostCommand::Quit => Response::Quit,
        }
    }

    fn dispatch(&self, event: &InputEvent) -> Response {
        let delivered = self.surface.dispatch(event);
        Response::Dispatched {
            delivered,
            open: self.controller.is_open(),
        }
    }

    fn take_applied(&mut self) -> Response {
        // submit/reset send synchronously, so the newest value is already queued
        while let Ok(params) = self.applied_rx.try_recv() {
            self.live = params;
        }
        Response::Applied(self.live)
    }

    /// Configuration the host currently displays
    pub fn live(&self) -> ArticleParams {
        self.live
    }

    /// Panel state
    pub fn state(&self) -> PanelState {
        self.controller.state()
    }

    /// Live listeners on the session's input surface
    pub fn listener_count(&self) -> usize {
        self.surface.listener_count()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.controller.is_open() {
            warn!("Session ended with the panel open");
        }
    }
}
