//! The gradient element: owns the displayed gradient and drives transitions.
//!
//! [`GradientElement`] talks to the outside world through two seams. A
//! [`RenderTarget`] receives style strings, and a [`FrameScheduler`] runs
//! [`GradientElement::frame`] before the next repaint. Only one frame request
//! is outstanding at a time. Every call to [`GradientElement::set`],
//! [`GradientElement::interpolate`] or [`GradientElement::transition`] starts
//! a new generation, and a frame carrying an older [`FrameToken`] is ignored,
//! so a scheduler that cannot cancel in time never applies stale state.

use core::fmt;

use fade_gradient::LinearGradient;
use tracing::{debug, trace};

use crate::animation::{Transition, TransitionOptions};

/// Something that can display a gradient style string.
pub trait RenderTarget {
    /// Replaces the background style with `style`.
    fn set_background(&mut self, style: &str);
}

/// Schedules [`GradientElement::frame`] calls before the next repaint.
pub trait FrameScheduler {
    /// Identifies a scheduled frame so it can be cancelled.
    type Handle;

    /// Requests one call to [`GradientElement::frame`] with `token` and the
    /// frame timestamp.
    fn request_frame(&mut self, token: FrameToken) -> Self::Handle;

    /// Cancels a frame request. Cancelling a frame that already ran or was
    /// already cancelled must be harmless.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Generation marker passed through a frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    /// The generation this token belongs to.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Outcome of a [`GradientElement::frame`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStatus {
    /// The token was superseded; nothing changed.
    Stale,
    /// A frame was rendered and another one was requested.
    Running {
        /// Linear progress after this frame, before easing.
        progress: f64,
    },
    /// The final frame was rendered.
    Finished,
}

/// Displays a [`LinearGradient`] on a render target and animates changes.
pub struct GradientElement<T, S: FrameScheduler> {
    target: T,
    scheduler: S,
    current: LinearGradient,
    generation: u64,
    pending: Option<S::Handle>,
    transition: Option<Transition>,
}

impl<T: RenderTarget, S: FrameScheduler> GradientElement<T, S> {
    /// Creates an element and immediately renders `background`.
    pub fn new(target: T, scheduler: S, background: LinearGradient) -> Self {
        let mut element = Self {
            target,
            scheduler,
            current: background,
            generation: 0,
            pending: None,
            transition: None,
        };
        element.apply();
        element
    }

    /// Shows `to` right away, stopping any running transition.
    pub fn set(&mut self, to: LinearGradient) {
        self.cancel();
        self.current = to;
        self.apply();
    }

    /// Shows the blend of `from` and `to` at `progress` right away, stopping
    /// any running transition.
    pub fn interpolate(&mut self, from: &LinearGradient, to: &LinearGradient, progress: f64) {
        self.set(from.interpolate(to, progress));
    }

    /// Starts animating from the currently displayed gradient towards `to`.
    ///
    /// A running transition is replaced; the new one starts from whatever is
    /// on screen at this moment.
    pub fn transition(&mut self, to: LinearGradient, options: TransitionOptions) {
        self.cancel();
        debug!(
            duration = options.duration,
            eased = options.easing.is_some(),
            "starting gradient transition"
        );
        self.transition = Some(Transition::new(self.current.clone(), to, options));
        self.pending = Some(self.scheduler.request_frame(self.token()));
    }

    /// Advances the running transition. Called by the [`FrameScheduler`]
    /// with the token it was given and the frame timestamp.
    pub fn frame(&mut self, token: FrameToken, timestamp: f64) -> FrameStatus {
        if token != self.token() {
            trace!(generation = token.generation(), "ignoring stale frame");
            return FrameStatus::Stale;
        }
        let Some(transition) = self.transition.as_mut() else {
            trace!("frame without a running transition");
            return FrameStatus::Stale;
        };

        self.pending = None;
        let progress = transition.advance(timestamp);
        let finished = transition.is_finished();
        self.current = transition.gradient();
        self.apply();
        trace!(progress, timestamp, "rendered transition frame");

        if finished {
            self.transition = None;
            debug!("gradient transition finished");
            FrameStatus::Finished
        } else {
            self.pending = Some(self.scheduler.request_frame(token));
            FrameStatus::Running { progress }
        }
    }

    /// The gradient currently on screen.
    #[must_use]
    pub const fn current(&self) -> &LinearGradient {
        &self.current
    }

    /// Whether a transition is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The render target.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// The frame scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler.
    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    const fn token(&self) -> FrameToken {
        FrameToken(self.generation)
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.transition.take().is_some() {
            debug!("preempted running gradient transition");
        }
    }

    fn apply(&mut self) {
        let style = self.current.to_string();
        self.target.set_background(&style);
    }
}

impl<T, S: FrameScheduler> fmt::Debug for GradientElement<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientElement")
            .field("current", &self.current)
            .field("generation", &self.generation)
            .field("animating", &self.transition.is_some())
            .finish_non_exhaustive()
    }
}
