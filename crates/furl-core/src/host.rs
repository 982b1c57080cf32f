//! Host seam.
//!
//! The widget layer does not render, lay out, or keep time itself.
//! Everything it needs from its environment goes through [`Host`]:
//! next-frame callback scheduling, rendered-bounds measurement of a mounted
//! subtree, and a monotonic clock for the interpolation engine. A platform
//! runner implements this against its compositor; [`ManualHost`] implements
//! it for tests and headless runs.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use web_time::Instant;

use crate::geometry::{Rect, Size};

pub type FrameCallback = Box<dyn FnOnce()>;

pub trait Host {
    /// Monotonic time source that timed interpolation runs read.
    fn now(&self) -> Instant;

    /// Run `callback` on the next display-refresh tick.
    fn schedule_frame(&self, callback: FrameCallback);

    /// Rendered bounds of a mounted content subtree, or `None` when the
    /// host can no longer resolve the handle.
    fn measure(&self, node: &NodeRef) -> Option<Rect>;
}

/// Opaque capability handle for a mounted content subtree. Minted and
/// interpreted by the host; meaningless once the subtree is torn down.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(u64);

/// A host you can drive deterministically: frames run when you pump them,
/// time passes when you advance it. Backs the widget tests and the demo.
pub struct ManualHost {
    now: Cell<Instant>,
    frames: RefCell<VecDeque<FrameCallback>>,
    nodes: RefCell<HashMap<NodeRef, Rect>>,
    next_node: Cell<u64>,
    measure_calls: Cell<u64>,
}

impl Default for ManualHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualHost {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
            frames: RefCell::new(VecDeque::new()),
            nodes: RefCell::new(HashMap::new()),
            next_node: Cell::new(1),
            measure_calls: Cell::new(0),
        }
    }

    /// Mount a content subtree with the given natural size.
    pub fn register_node(&self, size: Size) -> NodeRef {
        let node = NodeRef(self.next_node.get());
        self.next_node.set(self.next_node.get() + 1);
        self.nodes.borrow_mut().insert(node.clone(), Rect::from_size(size));
        node
    }

    /// Change a mounted subtree's natural size.
    pub fn resize_node(&self, node: &NodeRef, size: Size) {
        if let Some(rect) = self.nodes.borrow_mut().get_mut(node) {
            *rect = Rect::from_size(size);
        }
    }

    /// Tear a subtree down; later measurements of it resolve to `None`.
    pub fn remove_node(&self, node: &NodeRef) {
        self.nodes.borrow_mut().remove(node);
    }

    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }

    /// Number of frame callbacks currently queued.
    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// How many measurements have been asked of this host.
    pub fn measure_calls(&self) -> u64 {
        self.measure_calls.get()
    }

    /// Drain the callbacks queued before this call. Callbacks they schedule
    /// land on the next frame. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let drained: Vec<FrameCallback> = self.frames.borrow_mut().drain(..).collect();
        let ran = drained.len();
        for callback in drained {
            callback();
        }
        ran
    }

    /// Advance in `frame`-sized steps, running each frame, until nothing is
    /// scheduled. Returns the number of frames pumped.
    pub fn run_until_idle(&self, frame: Duration) -> usize {
        let mut frames = 0usize;
        while self.pending_frames() > 0 {
            self.advance(frame);
            self.run_frame();
            frames += 1;
            if frames > 100_000 {
                log::warn!("manual host still busy after {frames} frames; giving up");
                break;
            }
        }
        frames
    }
}

impl Host for ManualHost {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn schedule_frame(&self, callback: FrameCallback) {
        self.frames.borrow_mut().push_back(callback);
    }

    fn measure(&self, node: &NodeRef) -> Option<Rect> {
        self.measure_calls.set(self.measure_calls.get() + 1);
        self.nodes.borrow().get(node).copied()
    }
}
