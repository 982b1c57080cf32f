#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::animation::{AnimatedValue, AnimationSpec, Completion, Easing};
    use crate::geometry::{Rect, Size};
    use crate::host::{Host, ManualHost};

    fn host() -> Rc<ManualHost> {
        Rc::new(ManualHost::new())
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutCubic,
        ] {
            assert!(easing.ease(0.0).abs() < 1e-6);
            assert!((easing.ease(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_easing_midpoints() {
        assert!((Easing::Linear.ease(0.5) - 0.5).abs() < 1e-6);
        assert!((Easing::EaseInOut.ease(0.5) - 0.5).abs() < 1e-6);
        assert!(Easing::EaseIn.ease(0.5) < 0.5);
        assert!(Easing::EaseOut.ease(0.5) > 0.5);
        assert!(Easing::EaseOutCubic.ease(0.5) > 0.5);
    }

    #[test]
    fn test_easing_parse() {
        assert_eq!("linear".parse::<Easing>().unwrap(), Easing::Linear);
        assert_eq!("ease-in-out".parse::<Easing>().unwrap(), Easing::EaseInOut);
        assert_eq!("easeOutCubic".parse::<Easing>().unwrap(), Easing::EaseOutCubic);
        assert!("bounce".parse::<Easing>().is_err());
    }

    #[test]
    fn test_timed_run_is_deterministic() {
        let host = host();
        let driver: Rc<dyn Host> = host.clone();
        let value = AnimatedValue::new(0.0f32);
        value.animate_to(
            &driver,
            10.0,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
            |_| {},
        );

        host.advance(Duration::from_millis(250));
        host.run_frame();
        assert!((value.get() - 2.5).abs() < 0.01);
        assert!(value.is_running());

        host.advance(Duration::from_millis(750));
        host.run_frame();
        assert!((value.get() - 10.0).abs() < 0.001);
        assert!(!value.is_running());
    }

    #[test]
    fn test_completion_fires_once_with_finished() {
        let host = host();
        let driver: Rc<dyn Host> = host.clone();
        let value = AnimatedValue::new(0.0f32);

        let outcome: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));
        value.animate_to(&driver, 1.0, AnimationSpec::default(), {
            let outcome = outcome.clone();
            move |completion: Completion| outcome.set(Some(completion.finished))
        });

        host.run_until_idle(Duration::from_millis(16));
        assert_eq!(outcome.get(), Some(true));
    }

    #[test]
    fn test_superseded_run_reports_interrupted() {
        let host = host();
        let driver: Rc<dyn Host> = host.clone();
        let value = AnimatedValue::new(0.0f32);

        let first: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));
        value.animate_to(&driver, 100.0, AnimationSpec::default(), {
            let first = first.clone();
            move |completion: Completion| first.set(Some(completion.finished))
        });

        host.advance(Duration::from_millis(16));
        host.run_frame();
        assert!(first.get().is_none());

        let second: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));
        value.animate_to(&driver, 0.0, AnimationSpec::default(), {
            let second = second.clone();
            move |completion: Completion| second.set(Some(completion.finished))
        });
        assert_eq!(first.get(), Some(false));

        host.run_until_idle(Duration::from_millis(16));
        assert_eq!(second.get(), Some(true));
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    fn test_set_value_is_instantaneous() {
        let host = host();
        let value = AnimatedValue::new(5.0f32);
        value.set_value(9.0);
        assert_eq!(value.get(), 9.0);
        assert_eq!(host.pending_frames(), 0);
    }

    #[test]
    fn test_manual_host_measures_registered_nodes() {
        let host = host();
        let node = host.register_node(Size {
            width: 320.0,
            height: 200.0,
        });
        assert_eq!(
            host.measure(&node),
            Some(Rect {
                x: 0.0,
                y: 0.0,
                w: 320.0,
                h: 200.0
            })
        );
        assert_eq!(host.measure_calls(), 1);

        host.resize_node(
            &node,
            Size {
                width: 320.0,
                height: 260.0,
            },
        );
        assert_eq!(host.measure(&node).map(|bounds| bounds.h), Some(260.0));

        host.remove_node(&node);
        assert_eq!(host.measure(&node), None);
    }

    #[test]
    fn test_rect_from_size_round_trips() {
        let size = Size {
            width: 120.0,
            height: 48.0,
        };
        assert_eq!(Rect::from_size(size).size(), size);
    }
}
