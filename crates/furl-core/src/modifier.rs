use std::rc::Rc;

use crate::geometry::Rect;

/// Whether a view participates in pointer interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionType {
    Relative,
    Absolute,
}

#[derive(Clone, Default)]
pub struct Modifier {
    pub height: Option<f32>,
    pub clip: bool,
    pub alpha: Option<f32>,
    pub position: Option<PositionType>,
    pub pointer_events: Option<PointerEvents>,
    pub on_layout: Option<Rc<dyn Fn(Rect)>>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Clip children to this view's bounds (overflow hidden).
    pub fn clip(mut self) -> Self {
        self.clip = true;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn position(mut self, position: PositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = Some(pointer_events);
        self
    }

    /// Observe changes to this view's rendered bounds.
    pub fn on_layout(mut self, f: impl Fn(Rect) + 'static) -> Self {
        self.on_layout = Some(Rc::new(f));
        self
    }
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("height", &self.height)
            .field("clip", &self.clip)
            .field("alpha", &self.alpha)
            .field("position", &self.position)
            .field("pointer_events", &self.pointer_events)
            .field("on_layout", &self.on_layout.as_ref().map(|_| "..."))
            .finish()
    }
}
