//! Hero slideshow.
//!
//! [`Slideshow`] is the plain state machine: which slide is showing and
//! whether hovering has paused it. [`SlideshowTimer`] drives it from a
//! single tokio task on a fixed interval and publishes the visible index
//! through a `watch` channel.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Errors constructing a slideshow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlideshowError {
    #[error("slideshow needs at least one slide")]
    NoSlides,
    #[error("slideshow interval must be greater than zero")]
    ZeroInterval,
}

/// Visible-slide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    slide_count: usize,
    current: usize,
    pause_on_hover: bool,
    hovered: bool,
}

impl Slideshow {
    /// A slideshow over `slide_count` slides, starting at the first.
    ///
    /// # Errors
    ///
    /// Returns [`SlideshowError::NoSlides`] if `slide_count` is zero.
    pub const fn new(slide_count: usize, pause_on_hover: bool) -> Result<Self, SlideshowError> {
        if slide_count == 0 {
            return Err(SlideshowError::NoSlides);
        }
        Ok(Self {
            slide_count,
            current: 0,
            pause_on_hover,
            hovered: false,
        })
    }

    /// Index of the visible slide.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether a tick would currently be ignored.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.pause_on_hover && self.hovered
    }

    pub const fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Move to the next slide, wrapping after the last. Does nothing while
    /// paused. Returns the visible index.
    pub const fn advance(&mut self) -> usize {
        if !self.is_paused() {
            self.current = (self.current + 1) % self.slide_count;
        }
        self.current
    }
}

/// A running slideshow.
///
/// Must be created inside a tokio runtime. Dropping the timer stops it.
#[derive(Debug)]
pub struct SlideshowTimer {
    index_rx: watch::Receiver<usize>,
    hover_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SlideshowTimer {
    /// Start cycling `slideshow` every `interval`. The first change happens
    /// one interval after the call.
    ///
    /// # Errors
    ///
    /// Returns [`SlideshowError::ZeroInterval`] if `interval` is zero.
    pub fn spawn(mut slideshow: Slideshow, interval: Duration) -> Result<Self, SlideshowError> {
        if interval.is_zero() {
            return Err(SlideshowError::ZeroInterval);
        }

        let (index_tx, index_rx) = watch::channel(slideshow.current());
        let (hover_tx, hover_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                slideshow.set_hovered(*hover_rx.borrow());
                if slideshow.is_paused() {
                    continue;
                }
                let index = slideshow.advance();
                tracing::trace!(index, "slide advanced");
                if index_tx.send(index).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            index_rx,
            hover_tx,
            handle,
        })
    }

    /// Index of the visible slide.
    #[must_use]
    pub fn current(&self) -> usize {
        *self.index_rx.borrow()
    }

    /// Watch the visible index.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_rx.clone()
    }

    /// Pointer entered the hero region.
    pub fn pointer_enter(&self) {
        self.hover_tx.send_replace(true);
    }

    /// Pointer left the hero region.
    pub fn pointer_leave(&self) {
        self.hover_tx.send_replace(false);
    }

    /// Stop cycling. The last index stays visible.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for SlideshowTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
