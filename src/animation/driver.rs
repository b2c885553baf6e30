// src/animation/driver.rs
//
// Owns the scroll subscription for one tracked container: maps scroll
// offsets to normalized progress between two markers, optionally smooths
// it, resolves the cursor and forwards it to the listener. dispose() is
// idempotent and guarantees no callback fires afterward, even for ticks
// already in flight.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::animation::{resolve, EntranceSweep, ProgressSmoother, SegmentLayout};
use crate::models::{CursorState, PathError, PathTable};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DriverError {
    #[error("update tick arrived after dispose")]
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Attached,
    Updating,
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerEdge {
    Top,
    Bottom,
}

/// Where a container edge must sit in the viewport for progress to reach an
/// endpoint. `viewport_anchor` is a fraction of the viewport height:
/// 0.0 = top edge, 1.0 = bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub edge: ContainerEdge,
    pub viewport_anchor: f32,
}

impl Marker {
    pub fn top_center() -> Self {
        Self {
            edge: ContainerEdge::Top,
            viewport_anchor: 0.5,
        }
    }

    pub fn bottom_center() -> Self {
        Self {
            edge: ContainerEdge::Bottom,
            viewport_anchor: 0.5,
        }
    }

    /// Parses the config shorthand: an edge word plus an anchor word,
    /// e.g. "top center", "bottom bottom", "top 30%".
    pub fn parse(text: &str) -> Option<Self> {
        let mut words = text.split_whitespace();

        let edge = match words.next()? {
            "top" => ContainerEdge::Top,
            "bottom" => ContainerEdge::Bottom,
            _ => return None,
        };
        let viewport_anchor = match words.next()? {
            "top" => 0.0,
            "center" => 0.5,
            "bottom" => 1.0,
            other => other.strip_suffix('%')?.parse::<f32>().ok()? / 100.0,
        };

        if words.next().is_some() {
            return None;
        }
        Some(Self {
            edge,
            viewport_anchor,
        })
    }

    /// Scroll offset at which this marker lines up.
    fn scroll_position(&self, container: ContainerBounds, viewport_height: f32) -> f32 {
        let edge_y = match self.edge {
            ContainerEdge::Top => container.top,
            ContainerEdge::Bottom => container.top + container.height,
        };
        edge_y - viewport_height * self.viewport_anchor
    }
}

/// The tracked container's extent in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub top: f32,
    pub height: f32,
}

/// One scroll observation, as delivered by the host on every tick.
#[derive(Debug, Clone, Copy)]
pub struct ScrollFrame {
    pub offset: f32,
    pub container: ContainerBounds,
    pub viewport_height: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct SmoothingConfig {
    pub enabled: bool,
    pub duration_ms: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct EntranceConfig {
    pub enabled: bool,
    pub duration_secs: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    pub start: Marker,
    pub end: Marker,
    pub smoothing: SmoothingConfig,
    pub entrance: EntranceConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            start: Marker::top_center(),
            end: Marker::bottom_center(),
            smoothing: SmoothingConfig {
                enabled: true,
                duration_ms: 1000.0,
            },
            entrance: EntranceConfig {
                enabled: true,
                duration_secs: 2.0,
            },
        }
    }
}

/// Cancellation token for one subscription. Cloneable; dropping it does not
/// dispose, calling dispose() does, any number of times.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    alive: Rc<Cell<bool>>,
}

impl DriverHandle {
    pub fn dispose(&self) {
        self.alive.set(false);
    }

    pub fn is_disposed(&self) -> bool {
        !self.alive.get()
    }
}

struct Attachment {
    table: PathTable,
    layout: Box<dyn SegmentLayout>,
    config: DriverConfig,
    on_update: Box<dyn FnMut(CursorState)>,
    smoother: ProgressSmoother,
    sweep: Option<EntranceSweep>,
    last_state: Option<CursorState>,
    alive: Rc<Cell<bool>>,
    ticked: bool,
}

#[derive(Default)]
pub struct ProgressDriver {
    attachment: Option<Attachment>,
}

impl ProgressDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes the listener to resolved cursor updates for one container.
    /// A previous subscription, if any, is disposed first.
    pub fn attach(
        &mut self,
        table: PathTable,
        layout: Box<dyn SegmentLayout>,
        config: DriverConfig,
        on_update: Box<dyn FnMut(CursorState)>,
    ) -> DriverHandle {
        self.detach();

        let alive = Rc::new(Cell::new(true));
        let sweep = if config.entrance.enabled {
            Some(EntranceSweep::new(config.entrance.duration_secs))
        } else {
            None
        };

        self.attachment = Some(Attachment {
            table,
            layout,
            smoother: ProgressSmoother::new(config.smoothing.duration_ms),
            config,
            on_update,
            sweep,
            last_state: None,
            alive: Rc::clone(&alive),
            ticked: false,
        });

        DriverHandle { alive }
    }

    /// Disposes the current subscription, if any. Idempotent.
    pub fn detach(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            attachment.alive.set(false);
        }
    }

    pub fn state(&self) -> DriverState {
        match &self.attachment {
            None => DriverState::Idle,
            Some(attachment) if !attachment.alive.get() => DriverState::Detached,
            Some(attachment) if attachment.ticked => DriverState::Updating,
            Some(_) => DriverState::Attached,
        }
    }

    /// The most recently forwarded cursor, kept across failed resolves.
    pub fn last_state(&self) -> Option<CursorState> {
        self.attachment.as_ref().and_then(|a| a.last_state)
    }

    /// Feeds one scroll observation through the pipeline. A tick that lands
    /// after dispose is the expected cancellation race and is dropped
    /// without surfacing anything.
    pub fn observe(&mut self, frame: ScrollFrame, dt: f32) {
        let _ = self.tick(frame, dt);
    }

    fn tick(&mut self, frame: ScrollFrame, dt: f32) -> Result<(), DriverError> {
        let attachment = self.attachment.as_mut().ok_or(DriverError::Detached)?;
        if !attachment.alive.get() {
            return Err(DriverError::Detached);
        }
        attachment.ticked = true;

        let raw = raw_progress(&attachment.config, frame);

        let mut swept = None;
        if let Some(sweep) = attachment.sweep.as_mut() {
            swept = sweep.advance(dt);
            if sweep.is_complete() {
                attachment.sweep = None;
            }
        }

        let progress = if let Some(value) = swept {
            // the sweep drives directly; keep the smoother in step so the
            // hand-off back to scroll progress does not jump
            attachment.smoother.snap_to(value);
            value
        } else if attachment.config.smoothing.enabled {
            attachment.smoother.set_target(raw);
            attachment.smoother.advance(dt)
        } else {
            raw
        };

        match resolve(&attachment.table, attachment.layout.as_ref(), progress) {
            Ok(state) => {
                attachment.last_state = Some(state);
                (attachment.on_update)(state);
            }
            // no usable segments this tick: skip the update, keep the last
            // known cursor, stay subscribed
            Err(PathError::EmptyPath) => {}
            // degenerate segments cannot get past PathTable::new
            Err(PathError::DegenerateSegment { .. }) => {}
        }

        Ok(())
    }
}

fn raw_progress(config: &DriverConfig, frame: ScrollFrame) -> f32 {
    let start = config
        .start
        .scroll_position(frame.container, frame.viewport_height);
    let end = config
        .end
        .scroll_position(frame.container, frame.viewport_height);

    let span = end - start;
    if span <= f32::EPSILON {
        return if frame.offset >= start { 1.0 } else { 0.0 };
    }
    ((frame.offset - start) / span).clamp(0.0, 1.0)
}
