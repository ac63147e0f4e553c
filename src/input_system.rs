use crate::hit_region::{HitRegionRegistry, RegionAction};
use sdl2::event::{Event, WindowEvent};
use sdl2::EventPump;
use std::time::{Duration, Instant};

/// Minimum time between two accepted clicks
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Window-level events the frame loop cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEvent {
    /// Window close button / OS quit request
    Quit,
    /// Drawable area changed size
    Resized(u32, u32),
}

/// Pointer position and left-button state, sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

impl PointerState {
    pub fn new(x: i32, y: i32, pressed: bool) -> Self {
        PointerState { x, y, pressed }
    }
}

/// Result of feeding one pointer sample to the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEdge {
    /// No release this frame
    Idle,
    /// Released, but too soon after the last accepted click
    Dropped,
    /// Released and accepted as a click
    Accepted,
}

/// Turns press/release samples into debounced clicks
///
/// A click only fires on the pressed → released transition. It is accepted
/// if at least `window` has passed since the last accepted click; otherwise
/// it is dropped and never retried.
#[derive(Debug, Clone)]
pub struct ClickDebouncer {
    was_pressed: bool,
    last_accepted: Option<Instant>,
    window: Duration,
}

impl ClickDebouncer {
    pub fn new(window: Duration) -> Self {
        ClickDebouncer {
            was_pressed: false,
            last_accepted: None,
            window,
        }
    }

    pub fn observe(&mut self, pressed: bool, now: Instant) -> ClickEdge {
        let released = self.was_pressed && !pressed;
        self.was_pressed = pressed;

        if !released {
            return ClickEdge::Idle;
        }

        let ready = match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => true,
        };

        if ready {
            self.last_accepted = Some(now);
            ClickEdge::Accepted
        } else {
            ClickEdge::Dropped
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for ClickDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

/// Cursor hint sent back to the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    Pointer,
}

/// Outcome of one frame of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Action of the region that received an accepted click, if any
    pub action: Option<RegionAction>,
    /// Pointer is over some region (no debounce involved)
    pub hovering: bool,
}

impl DispatchResult {
    pub fn cursor(&self) -> CursorShape {
        if self.hovering {
            CursorShape::Pointer
        } else {
            CursorShape::Default
        }
    }
}

/// Resolves pointer samples against the current frame's regions
///
/// # Architecture
///
/// Each frame:
/// 1. Feed the pointer sample to the debouncer
/// 2. On an accepted click, hit-test the registry at the pointer position
/// 3. Independently compute hover for cursor feedback
///
/// The dispatcher only reports the action; applying it to the session is
/// the controller's job.
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    debouncer: ClickDebouncer,
}

impl InputDispatcher {
    pub fn new(debounce: Duration) -> Self {
        InputDispatcher {
            debouncer: ClickDebouncer::new(debounce),
        }
    }

    pub fn dispatch(
        &mut self,
        pointer: PointerState,
        now: Instant,
        registry: &HitRegionRegistry,
    ) -> DispatchResult {
        let action = match self.debouncer.observe(pointer.pressed, now) {
            ClickEdge::Accepted => {
                let action = registry
                    .hit_test(pointer.x, pointer.y)
                    .map(|region| region.action);
                log::debug!("Click at ({}, {}) -> {:?}", pointer.x, pointer.y, action);
                action
            }
            ClickEdge::Dropped => {
                log::debug!("Click at ({}, {}) dropped by debounce", pointer.x, pointer.y);
                None
            }
            ClickEdge::Idle => None,
        };

        DispatchResult {
            action,
            hovering: registry.is_hovering(pointer.x, pointer.y),
        }
    }
}

/// Drains SDL2's event queue, keeping only quit and resize
pub fn poll_system_events(event_pump: &mut EventPump) -> Vec<SystemEvent> {
    let mut events = Vec::new();

    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => events.push(SystemEvent::Quit),
            Event::Window {
                win_event: WindowEvent::Resized(w, h) | WindowEvent::SizeChanged(w, h),
                ..
            } => {
                events.push(SystemEvent::Resized(w.max(0) as u32, h.max(0) as u32));
            }
            _ => {
                // Pointer state is sampled separately; everything else is ignored
            }
        }
    }

    events
}

/// Reads the current pointer position and left-button state
pub fn sample_pointer(event_pump: &EventPump) -> PointerState {
    let mouse = event_pump.mouse_state();
    PointerState::new(mouse.x(), mouse.y(), mouse.left())
}
