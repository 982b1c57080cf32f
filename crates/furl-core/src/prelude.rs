pub use crate::animation::{
    AnimatedValue, AnimationSpec, Completion, Easing, Interpolate, UnknownEasing,
};
pub use crate::geometry::{Rect, Size};
pub use crate::host::{FrameCallback, Host, ManualHost, NodeRef};
pub use crate::modifier::{Modifier, PointerEvents, PositionType};
pub use crate::view::{View, ViewKind};
