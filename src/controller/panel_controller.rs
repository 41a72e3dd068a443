//! Panel controller implementation
//!
//! Owns the panel visibility flag, the configuration draft, and the dismissal
//! watcher whose lifetime is tied to the visibility flag.

use crate::input::{InputSurface, Rect};
use crate::params::{ArticleParams, FieldChange};
use crate::watcher::{DismissReason, DismissalWatcher};
use parking_lot::Mutex;
use std::fmt;
use std::sync::mpsc::{self, TrySendError};
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

/// Receiver of confirmed configurations
///
/// Called synchronously by [`PanelController::submit`] and
/// [`PanelController::reset_to_default`]. A call back into either method from
/// inside `apply` is skipped with a warning.
pub trait ApplyTarget: Send {
    /// Apply `params` to the host
    fn apply(&mut self, params: ArticleParams);
}

impl<F> ApplyTarget for F
where
    F: FnMut(ArticleParams) + Send,
{
    fn apply(&mut self, params: ArticleParams) {
        self(params);
    }
}

/// Apply target forwarding each configuration over a channel
///
/// Never blocks: when the channel is full the configuration is dropped with a
/// warning, so the receiver should drain it between panel operations.
pub struct ChannelTarget(pub mpsc::SyncSender<ArticleParams>);

impl ApplyTarget for ChannelTarget {
    fn apply(&mut self, params: ArticleParams) {
        match self.0.try_send(params) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!("Host channel full, dropping applied configuration: {:?}", params);
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!("Host channel disconnected, applied configuration not delivered");
            }
        }
    }
}

/// Supplies the panel's rendered region, queried once per open cycle
pub trait RegionSource: Send + Sync {
    /// Current panel rectangle, or `None` if the panel is not laid out
    fn current_region(&self) -> Option<Rect>;
}

impl<F> RegionSource for F
where
    F: Fn() -> Option<Rect> + Send + Sync,
{
    fn current_region(&self) -> Option<Rect> {
        self()
    }
}

/// Panel state snapshot for renderers and the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    /// Whether the panel is open
    pub open: bool,
    /// Uncommitted configuration
    pub draft: ArticleParams,
    /// How many times the panel was closed by the dismissal watcher
    pub dismissals: u64,
}

/// What closed the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseCause {
    /// The toggle trigger
    Toggle,
    /// A direct call to [`PanelController::close`]
    Programmatic,
    /// The dismissal watcher
    Dismissed(DismissReason),
}

impl fmt::Display for CloseCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseCause::Toggle => f.write_str("toggle"),
            CloseCause::Programmatic => f.write_str("programmatic"),
            CloseCause::Dismissed(reason) => write!(f, "dismissed: {reason}"),
        }
    }
}

struct PanelInner {
    open: bool,
    draft: ArticleParams,
    /// Present exactly while `open` is true
    watcher: Option<DismissalWatcher>,
    dismissals: u64,
}

/// Side panel controller
pub struct PanelController {
    inner: Arc<Mutex<PanelInner>>,
    surface: InputSurface,
    region: Box<dyn RegionSource>,
    host: Mutex<Box<dyn ApplyTarget>>,
}

impl PanelController {
    /// Create a closed panel with the default draft
    pub fn new<R, A>(surface: InputSurface, region: R, host: A) -> Self
    where
        R: RegionSource + 'static,
        A: ApplyTarget + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(PanelInner {
                open: false,
                draft: ArticleParams::default(),
                watcher: None,
                dismissals: 0,
            })),
            surface,
            region: Box::new(region),
            host: Mutex::new(Box::new(host)),
        }
    }

    /// Flip visibility and return the new value
    ///
    /// Opening captures the panel region and activates a fresh dismissal watcher;
    /// closing drops it.
    pub fn toggle(&self) -> bool {
        if self.is_open() {
            close_panel(&self.inner, CloseCause::Toggle);
            false
        } else {
            self.open();
            true
        }
    }

    /// Close the panel if it is open; returns whether it was open
    pub fn close(&self) -> bool {
        close_panel(&self.inner, CloseCause::Programmatic)
    }

    fn open(&self) {
        // Queried before locking so the region source may read controller state
        let region = self.region.current_region();

        let mut inner = self.inner.lock();
        if inner.open {
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        inner.watcher = Some(DismissalWatcher::activate(
            &self.surface,
            region,
            move |reason| dismiss(&weak, reason),
        ));
        inner.open = true;
        info!("Panel opened (region {:?})", region);
    }

    /// Replace one field of the draft; the host is not notified
    pub fn set_field(&self, change: FieldChange) {
        let mut inner = self.inner.lock();
        inner.draft.apply_change(change);
        debug!("Draft {} set to {}", change.key(), change.option().key);
    }

    /// Hand a snapshot of the draft to the host; visibility is unchanged
    pub fn submit(&self) {
        let snapshot = self.inner.lock().draft;
        info!("Applying configuration: {:?}", snapshot);
        self.apply_to_host(snapshot);
    }

    /// Reset the draft to the default and apply the default to the host immediately
    pub fn reset_to_default(&self) {
        let defaults = ArticleParams::default();
        self.inner.lock().draft = defaults;
        info!("Draft reset to defaults, applying");
        self.apply_to_host(defaults);
    }

    fn apply_to_host(&self, params: ArticleParams) {
        // Held only while the host runs; failing here means `apply` re-entered us
        let Some(mut host) = self.host.try_lock() else {
            warn!("Host applied a configuration from inside apply; skipping nested apply");
            return;
        };
        host.apply(params);
    }

    /// Whether the panel is open
    pub fn is_open(&self) -> bool {
        self.inner.lock().open
    }

    /// Current draft
    pub fn draft(&self) -> ArticleParams {
        self.inner.lock().draft
    }

    /// Number of closes caused by the dismissal watcher
    pub fn dismissal_count(&self) -> u64 {
        self.inner.lock().dismissals
    }

    /// Whether a dismissal watcher is currently alive
    pub fn has_watcher(&self) -> bool {
        self.inner.lock().watcher.is_some()
    }

    /// Snapshot of visibility and draft
    pub fn state(&self) -> PanelState {
        let inner = self.inner.lock();
        PanelState {
            open: inner.open,
            draft: inner.draft,
            dismissals: inner.dismissals,
        }
    }

    /// Input surface the watcher subscribes to
    pub fn surface(&self) -> &InputSurface {
        &self.surface
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        let mut inner = self.inner.lock();
        if inner.watcher.take().is_some() {
            debug!("Panel controller dropped while open; watcher released");
        }
        inner.open = false;
    }
}

impl fmt::Debug for PanelController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelController")
            .field("state", &self.state())
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

fn dismiss(inner: &Weak<Mutex<PanelInner>>, reason: DismissReason) {
    // Controller already gone: its drop released the watcher
    let Some(inner) = inner.upgrade() else {
        return;
    };
    close_panel(&inner, CloseCause::Dismissed(reason));
}

/// Release the watcher and mark the panel closed in one critical section
fn close_panel(inner: &Mutex<PanelInner>, cause: CloseCause) -> bool {
    let mut inner = inner.lock();
    if !inner.open {
        debug!("Close ({}) ignored, panel already closed", cause);
        return false;
    }

    inner.watcher = None;
    inner.open = false;
    if matches!(cause, CloseCause::Dismissed(_)) {
        inner.dismissals += 1;
    }
    info!("Panel closed ({})", cause);
    true
}
