use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use web_time::Instant;

use crate::host::Host;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseOutCubic,
}

impl Easing {
    pub fn ease(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown easing name: {0}")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Easing::Linear),
            "ease-in" | "easeIn" => Ok(Easing::EaseIn),
            "ease-out" | "easeOut" => Ok(Easing::EaseOut),
            "ease-in-out" | "easeInOut" => Ok(Easing::EaseInOut),
            "ease-out-cubic" | "easeOutCubic" => Ok(Easing::EaseOutCubic),
            other => Err(UnknownEasing(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(150),
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// Outcome of a timed run, delivered exactly once to its completion callback.
/// `finished` is false when the run was superseded before reaching its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    pub finished: bool,
}

type CompletionFn = Box<dyn FnOnce(Completion)>;

/// A value the host drives toward a target over time.
///
/// Writes take one of two paths: [`set_value`](AnimatedValue::set_value) is
/// instantaneous, [`animate_to`](AnimatedValue::animate_to) starts a timed
/// run stepped on host frames. Handles are cheap to clone and share the
/// underlying value.
pub struct AnimatedValue<T: Interpolate + Copy + 'static> {
    inner: Rc<RefCell<ValueInner<T>>>,
}

impl<T: Interpolate + Copy + 'static> Clone for AnimatedValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct ValueInner<T> {
    current: T,
    run: Option<Run<T>>,
    next_generation: u64,
}

struct Run<T> {
    from: T,
    to: T,
    spec: AnimationSpec,
    started_at: Instant,
    generation: u64,
    on_complete: Option<CompletionFn>,
}

enum StepOutcome {
    Done(Option<CompletionFn>),
    Ongoing,
    Stale,
}

impl<T: Interpolate + Copy + 'static> AnimatedValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ValueInner {
                current: initial,
                run: None,
                next_generation: 0,
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().current
    }

    /// Instantaneous write; no interpolation run is involved.
    pub fn set_value(&self, value: T) {
        self.inner.borrow_mut().current = value;
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().run.is_some()
    }

    /// Start a timed run toward `to`. A run already in flight is superseded:
    /// its completion fires immediately with `finished: false`, and any tick
    /// it still has scheduled does nothing.
    pub fn animate_to(
        &self,
        host: &Rc<dyn Host>,
        to: T,
        spec: AnimationSpec,
        on_complete: impl FnOnce(Completion) + 'static,
    ) {
        let (superseded, generation) = {
            let mut inner = self.inner.borrow_mut();
            let superseded = inner.run.take().and_then(|mut run| run.on_complete.take());
            let generation = inner.next_generation;
            inner.next_generation += 1;
            inner.run = Some(Run {
                from: inner.current,
                to,
                spec,
                started_at: host.now(),
                generation,
                on_complete: Some(Box::new(on_complete)),
            });
            (superseded, generation)
        };
        if let Some(complete) = superseded {
            complete(Completion { finished: false });
        }
        self.schedule_step(host, generation);
    }

    fn schedule_step(&self, host: &Rc<dyn Host>, generation: u64) {
        let value = self.clone();
        let step_host = Rc::clone(host);
        host.schedule_frame(Box::new(move || value.step(&step_host, generation)));
    }

    fn step(&self, host: &Rc<dyn Host>, generation: u64) {
        let outcome = {
            let mut inner = self.inner.borrow_mut();
            let snapshot = inner
                .run
                .as_ref()
                .map(|run| (run.generation, run.from, run.to, run.spec, run.started_at));
            match snapshot {
                Some((run_generation, from, to, spec, started_at))
                    if run_generation == generation =>
                {
                    let elapsed = host.now().saturating_duration_since(started_at);
                    if elapsed >= spec.duration {
                        inner.current = to;
                        let complete = inner.run.take().and_then(|mut run| run.on_complete.take());
                        StepOutcome::Done(complete)
                    } else {
                        let t = elapsed.as_secs_f32() / spec.duration.as_secs_f32();
                        inner.current = from.interpolate(&to, spec.easing.ease(t));
                        StepOutcome::Ongoing
                    }
                }
                // A newer run owns the value; this tick belongs to history.
                _ => StepOutcome::Stale,
            }
        };
        match outcome {
            StepOutcome::Done(Some(complete)) => complete(Completion { finished: true }),
            StepOutcome::Done(None) => {}
            StepOutcome::Ongoing => self.schedule_step(host, generation),
            StepOutcome::Stale => {}
        }
    }
}
