//! Integration tests for boxfit-core.

use boxfit_core::{fit_ratio, total_fit, Config, Dimension, Error, FitRatio, FitState};
use std::cell::RefCell;
use std::rc::Rc;

mod scenario_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_container_and_item() {
        let state = FitState::new();
        let fit = state.fit();

        assert_relative_eq!(fit.width, 6.0);
        assert_relative_eq!(fit.height, 1.2);
        assert_relative_eq!(fit.depth, 4.0 / 3.0);
        assert_eq!(state.total_fit(), 6);
    }

    #[test]
    fn test_zero_item_width_is_filtered() {
        let mut state = FitState::new();
        state.set_container(Dimension::new(120.0, 150.0, 95.0));
        state.set_item(Dimension::new(0.0, 50.0, 30.0));

        assert_eq!(state.fit().width, f64::INFINITY);
        // floor(3.0) * floor(3.1666)
        assert_eq!(state.total_fit(), 9);
    }

    #[test]
    fn test_all_zero_item_yields_identity() {
        let mut state = FitState::new();
        state.set_item(Dimension::new(0.0, 0.0, 0.0));

        assert!(!state.fit().is_finite());
        assert_eq!(state.total_fit(), 1);
    }

    #[test]
    fn test_container_smaller_on_one_axis() {
        let mut state = FitState::new();
        state.set_container(Dimension::new(120.0, 60.0, 10.0));

        assert!(state.fit().depth < 1.0);
        assert_eq!(state.total_fit(), 0);
    }

    #[test]
    fn test_fit_equals_division_for_positive_pairs() {
        let pairs = [
            (Dimension::new(1.0, 1.0, 1.0), Dimension::new(3.0, 7.0, 11.0)),
            (Dimension::new(99.9, 0.5, 1e6), Dimension::new(0.1, 0.25, 3.0)),
            (Dimension::new(42.0, 42.0, 42.0), Dimension::new(42.0, 42.0, 42.0)),
        ];

        for (container, item) in pairs {
            let fit = fit_ratio(&container, &item);
            assert_relative_eq!(fit.width, container.width / item.width);
            assert_relative_eq!(fit.height, container.height / item.height);
            assert_relative_eq!(fit.depth, container.depth / item.depth);

            let expected = fit.width.floor() * fit.height.floor() * fit.depth.floor();
            assert_eq!(total_fit(&fit), expected as i64);
        }
    }
}

mod reactivity_tests {
    use super::*;

    #[test]
    fn test_resetting_same_value_notifies_with_same_result() {
        let mut state = FitState::new();
        let totals = Rc::new(RefCell::new(Vec::new()));
        let containers = Rc::new(RefCell::new(0));

        let sink = totals.clone();
        state.subscribe_total_fit(move |t| sink.borrow_mut().push(*t));
        let c = containers.clone();
        state.subscribe_container(move |_| *c.borrow_mut() += 1);

        let before = state.snapshot();
        state.set_container(state.container());
        state.set_container(state.container());

        assert_eq!(state.snapshot(), before);
        assert_eq!(*containers.borrow(), 3);
        assert_eq!(*totals.borrow(), vec![6, 6, 6]);
    }

    #[test]
    fn test_item_subscribers_only_see_item_changes() {
        let mut state = FitState::new();
        let items = Rc::new(RefCell::new(Vec::new()));

        let sink = items.clone();
        state.subscribe_item(move |d| sink.borrow_mut().push(d.width));

        state.set_container(Dimension::new(1.0, 2.0, 3.0));
        state.set_item(Dimension::new(5.0, 5.0, 5.0));

        assert_eq!(*items.borrow(), vec![20.0, 5.0]);
    }

    #[test]
    fn test_multiple_states_are_independent() {
        let mut a = FitState::new();
        let b = FitState::new();

        a.set_item(Dimension::new(120.0, 60.0, 40.0));
        assert_eq!(a.total_fit(), 1);
        assert_eq!(b.total_fit(), 6);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_custom_initial_values() {
        let config = Config::new()
            .with_container(Dimension::from([100.0, 100.0, 100.0]))
            .with_item(Dimension::from([10.0, 25.0, 50.0]))
            .with_repeat(false);
        let state = FitState::with_config(config).unwrap();

        assert!(!state.repeat());
        assert_eq!(state.fit(), FitRatio::new(10.0, 4.0, 2.0));
        assert_eq!(state.total_fit(), 80);
    }

    #[test]
    fn test_validation_policy_rejects_nan() {
        let mut state = FitState::with_config(Config::new().with_validation(true)).unwrap();

        let result = state.try_set_item(Dimension::new(f64::NAN, 1.0, 1.0));
        assert_eq!(
            result,
            Err(Error::InvalidDimension("width must be finite, got NaN".into()))
        );
        assert_eq!(state.item(), Dimension::default_item());
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_snapshot_json() {
        let state = FitState::new();
        let json = serde_json::to_value(state.snapshot()).unwrap();

        assert_eq!(json["container"]["width"], 120.0);
        assert_eq!(json["item"]["depth"], 30.0);
        assert_eq!(json["repeat"], true);
        assert_eq!(json["total_fit"], 6);
    }

    #[test]
    fn test_config_partial_json() {
        let config: Config = serde_json::from_str(
            r#"{ "item": { "width": 10.0, "height": 10.0, "depth": 10.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.container, Dimension::default_container());
        assert_eq!(config.item, Dimension::new(10.0, 10.0, 10.0));
        assert!(config.repeat);
    }
}
