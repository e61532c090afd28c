//! Tests for the component contract and callbacks

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::component::{callback, Callback, Component, ComponentError};

// A simple test widget with props and internal state
#[derive(Debug)]
struct Counter {
    label: String,
    step: u32,
    count: u32,
}

#[derive(Debug, Clone)]
struct CounterProps {
    label: String,
    step: Option<u32>,
}

impl Component for Counter {
    type Props = CounterProps;

    fn create(props: Self::Props) -> Self {
        Self {
            label: props.label,
            step: props.step.unwrap_or(1),
            count: 0,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.label = props.label;
        self.step = props.step.unwrap_or(self.step);
        Ok(())
    }
}

impl Counter {
    fn bump(&mut self) {
        self.count += self.step;
    }
}

#[test]
fn create_applies_prop_defaults() {
    let widget = Counter::create(CounterProps {
        label: "Likes".to_string(),
        step: None,
    });
    assert_eq!(widget.label, "Likes");
    assert_eq!(widget.step, 1);
}

#[test]
fn update_keeps_internal_state() {
    let mut widget = Counter::create(CounterProps {
        label: "Likes".to_string(),
        step: Some(2),
    });
    widget.bump();
    widget.bump();
    assert_eq!(widget.count, 4);

    widget
        .update(CounterProps {
            label: "Stars".to_string(),
            step: None,
        })
        .expect("update should succeed");

    assert_eq!(widget.label, "Stars");
    assert_eq!(widget.step, 2);
    assert_eq!(widget.count, 4);
}

#[test]
fn callback_invokes_the_wrapped_function() {
    let hits = Arc::new(AtomicUsize::new(0));
    let recorded = hits.clone();
    let on_retry: Callback<()> = callback(move |()| {
        recorded.fetch_add(1, Ordering::SeqCst);
    });

    on_retry.call(());
    on_retry.call(());
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn cloned_callbacks_share_the_function() {
    let hits = Arc::new(AtomicUsize::new(0));
    let recorded = hits.clone();
    let original: Callback<u32, u32> = Callback::new(move |value| {
        recorded.fetch_add(1, Ordering::SeqCst);
        value * 2
    });

    let clone = original.clone();
    assert_eq!(original.call(3), 6);
    assert_eq!(clone.call(4), 8);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
