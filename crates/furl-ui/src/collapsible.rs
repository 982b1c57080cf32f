//! # Collapsible container
//!
//! A container that expands and collapses its content by animating a height
//! value the host clips to. The interesting part is the
//! measure-then-animate machine in [`CollapsibleState`]:
//!
//! - Expanding content that has not been measured first renders it
//!   off-screen for one frame (absolute position, zero opacity) and asks
//!   the host for its natural bounds.
//! - The height then runs a fixed 150 ms ease-in-out tween toward the
//!   target. Collapse targets of zero get their own interpolation run,
//!   configured independently of the expand run.
//! - Layout changes reported while expanded and idle snap the height to
//!   the new content height without a remeasure cycle. Reports arriving
//!   while measuring, animating, or collapsed are dropped, which keeps the
//!   observer from feeding the animation back into itself.
//!
//! State is shared the usual way:
//!
//! ```rust
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use furl_core::prelude::*;
//! use furl_ui::{Collapsible, CollapsibleProps, CollapsibleState};
//!
//! let host = Rc::new(ManualHost::new());
//! let node = host.register_node(Size { width: 320.0, height: 200.0 });
//!
//! let state = CollapsibleState::new(host.clone(), CollapsibleProps::default());
//! state.attach_content(node);
//!
//! let expanded = CollapsibleProps { collapsed: false, ..CollapsibleProps::default() };
//! let view = Collapsible(expanded, &state, View::new(ViewKind::Box));
//! assert!(view.modifier.height.is_none()); // still measuring
//!
//! host.run_until_idle(Duration::from_millis(16));
//! assert_eq!(state.height(), 200.0);
//! ```
//!
//! The widget never mutates itself after [`CollapsibleState::unmount`]:
//! frame and completion callbacks check the flag and bail.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use furl_core::animation::{AnimatedValue, AnimationSpec, Completion, Easing};
use furl_core::host::{Host, NodeRef};
use furl_core::modifier::{Modifier, PointerEvents, PositionType};
use furl_core::view::{View, ViewKind};

/// Vertical placement of content inside the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Configuration of a [`Collapsible`].
///
/// `duration` and `easing` describe the nominal transition, but the height
/// transition currently runs a fixed 150 ms ease-in-out tween regardless.
/// `align` and `on_animation_end` are likewise accepted without being
/// consumed by the measurement/animation machine.
#[derive(Clone)]
pub struct CollapsibleProps {
    pub collapsed: bool,
    pub collapsed_height: f32,
    pub duration: Duration,
    pub easing: Easing,
    pub align: Align,
    pub enable_pointer_events: bool,
    pub on_animation_end: Option<Rc<dyn Fn()>>,
}

impl Default for CollapsibleProps {
    fn default() -> Self {
        Self {
            collapsed: true,
            collapsed_height: 0.0,
            duration: Duration::from_millis(120),
            easing: Easing::EaseOutCubic,
            align: Align::Top,
            enable_pointer_events: false,
            on_animation_end: None,
        }
    }
}

const TRANSITION_MS: u64 = 150;

fn transition_spec() -> AnimationSpec {
    AnimationSpec::tween(Duration::from_millis(TRANSITION_MS), Easing::EaseInOut)
}

/// The measure-then-animate machine behind [`Collapsible`].
///
/// Cheap to clone; clones share one widget instance.
pub struct CollapsibleState {
    inner: Rc<StateInner>,
}

impl Clone for CollapsibleState {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct StateInner {
    host: Rc<dyn Host>,
    props: RefCell<CollapsibleProps>,
    measured: Cell<bool>,
    measuring: Cell<bool>,
    animating: Cell<bool>,
    content_height: Cell<f32>,
    height: AnimatedValue<f32>,
    content_node: RefCell<Option<NodeRef>>,
    unmounted: Cell<bool>,
}

impl CollapsibleState {
    pub fn new(host: Rc<dyn Host>, props: CollapsibleProps) -> Self {
        let height = AnimatedValue::new(props.collapsed_height);
        Self {
            inner: Rc::new(StateInner {
                host,
                props: RefCell::new(props),
                measured: Cell::new(false),
                measuring: Cell::new(false),
                animating: Cell::new(false),
                content_height: Cell::new(0.0),
                height,
                content_node: RefCell::new(None),
                unmounted: Cell::new(false),
            }),
        }
    }

    /// Host notification: the content subtree is mounted.
    pub fn attach_content(&self, node: NodeRef) {
        *self.inner.content_node.borrow_mut() = Some(node);
    }

    /// Host notification: the content subtree is gone.
    pub fn detach_content(&self) {
        *self.inner.content_node.borrow_mut() = None;
    }

    /// Marks the instance destroyed and releases the content handle.
    /// Callbacks still in flight observe the flag and leave state untouched.
    pub fn unmount(&self) {
        self.inner.unmounted.set(true);
        self.detach_content();
    }

    pub fn height(&self) -> f32 {
        self.inner.height.get()
    }

    pub fn content_height(&self) -> f32 {
        self.inner.content_height.get()
    }

    pub fn is_measured(&self) -> bool {
        self.inner.measured.get()
    }

    pub fn is_measuring(&self) -> bool {
        self.inner.measuring.get()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.animating.get()
    }

    pub fn is_unmounted(&self) -> bool {
        self.inner.unmounted.get()
    }

    pub fn content_node(&self) -> Option<NodeRef> {
        self.inner.content_node.borrow().clone()
    }

    fn props(&self) -> CollapsibleProps {
        self.inner.props.borrow().clone()
    }

    /// Commit the next props and reconcile against the previous ones.
    ///
    /// A `collapsed` flip invalidates the last measurement before the
    /// transition re-runs, so expansion always re-measures after a
    /// collapse/expand cycle. A `collapsed_height` change while collapsed
    /// snaps the height with no transition.
    pub fn update(&self, next: CollapsibleProps) {
        let (collapsed_changed, collapsed_height_changed) = {
            let prev = self.inner.props.borrow();
            (
                prev.collapsed != next.collapsed,
                prev.collapsed_height != next.collapsed_height,
            )
        };
        let collapsed = next.collapsed;
        let collapsed_height = next.collapsed_height;
        *self.inner.props.borrow_mut() = next;

        if collapsed_changed {
            self.inner.measured.set(false);
            self.apply_collapsed(collapsed);
        } else if collapsed && collapsed_height_changed {
            self.inner.height.set_value(collapsed_height);
        }
    }

    /// Layout report from the host for the content subtree.
    ///
    /// Dropped while animating, collapsed, or measuring, and when the
    /// height is unchanged; otherwise the height snaps to the new content
    /// height with no remeasure cycle.
    pub fn handle_layout_change(&self, measured_height: f32) {
        if self.inner.animating.get()
            || self.props().collapsed
            || self.inner.measuring.get()
            || self.inner.content_height.get() == measured_height
        {
            return;
        }
        self.inner.height.set_value(measured_height);
        self.inner.content_height.set(measured_height);
    }

    fn apply_collapsed(&self, collapsed: bool) {
        if collapsed {
            self.transition_to_height(self.props().collapsed_height);
        } else if self.content_node().is_none() {
            // Nothing mounted to measure; a cached measurement still lets
            // us expand, otherwise there is nothing to expand to.
            if self.inner.measured.get() {
                self.transition_to_height(self.inner.content_height.get());
            }
        } else {
            let state = self.clone();
            self.measure_content(move |content_height| {
                state.transition_to_height(content_height);
            });
        }
    }

    /// One-frame off-screen measurement of the content's natural height.
    fn measure_content(&self, on_done: impl FnOnce(f32) + 'static) {
        self.inner.measuring.set(true);
        let state = self.clone();
        self.inner.host.schedule_frame(Box::new(move || {
            if state.is_unmounted() {
                return;
            }
            let Some(node) = state.content_node() else {
                state.inner.measuring.set(false);
                on_done(state.props().collapsed_height);
                return;
            };
            match state.inner.host.measure(&node) {
                Some(bounds) => {
                    state.inner.measuring.set(false);
                    state.inner.measured.set(true);
                    state.inner.content_height.set(bounds.h);
                    on_done(bounds.h);
                }
                None => {
                    log::warn!("collapsible: content measurement unavailable");
                }
            }
        }));
    }

    fn transition_to_height(&self, target: f32) {
        // Expand and collapse are independently configured runs over the
        // same value; a zero target always takes the collapse run.
        let expand = (target, transition_spec());
        let collapse = (0.0, transition_spec());
        let (to, spec) = if target == 0.0 { collapse } else { expand };

        self.inner.animating.set(true);
        log::debug!(
            "collapsible: transition {:.1} -> {:.1}",
            self.inner.height.get(),
            to
        );

        let state = self.clone();
        self.inner.height.animate_to(
            &self.inner.host,
            to,
            spec,
            move |completion: Completion| {
                if state.is_unmounted() {
                    return;
                }
                if completion.finished {
                    state.inner.animating.set(false);
                }
            },
        );
    }
}

/// Animated collapsible container.
///
/// Commits `props` into `state`, then builds the two-layer tree the host
/// renders: an outer container clipped to the animated height once that
/// height is known, and an inner content subtree the host can measure and
/// observe. While collapsed the container rejects pointer interaction
/// unless `enable_pointer_events` is set.
pub fn Collapsible(props: CollapsibleProps, state: &CollapsibleState, content: View) -> View {
    state.update(props.clone());

    let measuring = state.is_measuring();
    let has_known_height = !measuring && (state.is_measured() || props.collapsed);

    let mut outer = Modifier::new();
    if has_known_height {
        outer = outer.height(state.height()).clip();
    }
    let pointer_events = if props.collapsed && !props.enable_pointer_events {
        PointerEvents::None
    } else {
        PointerEvents::Auto
    };
    outer = outer.pointer_events(pointer_events);

    let mut inner = Modifier::new();
    if measuring {
        // Off-screen render; the measurement pass must never flash.
        inner = inner.position(PositionType::Absolute).alpha(0.0);
    }
    if !state.is_animating() {
        let observer = state.clone();
        inner = inner.on_layout(move |bounds| observer.handle_layout_change(bounds.h));
    }

    let content_view = View::new(ViewKind::Content {
        node: state.content_node(),
    })
    .modifier(inner)
    .child(content);

    View::new(ViewKind::Container)
        .modifier(outer)
        .child(content_view)
}
