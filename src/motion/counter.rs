//! Count-up animation for `[data-counter]` stats.
//!
//! The displayed value is a pure function of elapsed ticks, so the interval
//! in the browser and the tests drive the same [`CountUp::step`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Document, HtmlElement, Window};

use super::dom::{self, Observer};
use super::timers::TimerSlots;
use crate::config::CounterConfig;
use crate::error::{MotionError, Result};

pub fn parse_target(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| MotionError::InvalidCounterTarget {
            raw: raw.to_string(),
        })
}

/// In-flight count from 0 to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    tick_ms: u32,
    total_ticks: u32,
    elapsed_ms: u64,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let tick_ms = tick_ms.max(1);
        Self {
            target,
            tick_ms,
            total_ticks: (duration_ms / tick_ms).max(1),
            elapsed_ms: 0,
        }
    }

    pub fn step(self, elapsed_ms: u32) -> Self {
        Self {
            elapsed_ms: self.elapsed_ms + u64::from(elapsed_ms),
            ..self
        }
    }

    pub fn ticks(&self) -> u64 {
        self.elapsed_ms / u64::from(self.tick_ms)
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn is_done(&self) -> bool {
        let ticks = self.ticks();
        ticks >= 1 && (self.target == 0 || ticks >= u64::from(self.total_ticks))
    }

    /// `floor(target * ticks / total_ticks)`, clamped to the target once done. Computed
    /// in integers so the last tick lands on the target exactly.
    pub fn value(&self) -> u64 {
        if self.is_done() {
            return self.target;
        }
        let scaled = u128::from(self.target) * u128::from(self.ticks());
        (scaled / u128::from(self.total_ticks)) as u64
    }
}

/// Per-element trigger state. `counted` flips once, when the count starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    target: u64,
    counted: bool,
}

impl CounterState {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            counted: false,
        }
    }

    pub fn trigger(&mut self, duration_ms: u32, tick_ms: u32) -> Option<CountUp> {
        if self.counted {
            return None;
        }
        self.counted = true;
        Some(CountUp::new(self.target, duration_ms, tick_ms))
    }
}

struct Shared {
    elements: Vec<HtmlElement>,
    // `None` marks an element whose target did not parse.
    states: RefCell<Vec<Option<CounterState>>>,
    running: RefCell<TimerSlots<Interval>>,
    config: CounterConfig,
}

impl Shared {
    fn start(self: &Rc<Self>, index: usize) -> Result<()> {
        let count = match self.states.borrow_mut().get_mut(index) {
            Some(Some(state)) => state.trigger(self.config.duration_ms, self.config.tick_ms),
            _ => None,
        };
        let Some(mut count) = count else {
            return Ok(());
        };
        let element = self.elements[index].clone();
        element.class_list().add_1(&self.config.counted_class)?;

        let shared = Rc::downgrade(self);
        let interval = Interval::new(count.tick_ms(), move || {
            count = count.step(count.tick_ms());
            element.set_text_content(Some(&count.value().to_string()));
            if count.is_done() {
                if let Some(shared) = shared.upgrade() {
                    shared.finish(index);
                }
            }
        });
        self.running.borrow_mut().replace(index, interval);
        Ok(())
    }

    fn finish(&self, index: usize) {
        // The interval is still on the stack here; drop it on the next turn.
        if let Some(interval) = self.running.borrow_mut().take(index) {
            Timeout::new(0, move || drop(interval)).forget();
        }
    }
}

pub struct CounterAnimation {
    shared: Rc<Shared>,
    _observer: Option<Observer>,
}

impl CounterAnimation {
    pub fn attach(window: &Window, document: &Document, config: &CounterConfig) -> Result<Self> {
        let elements = dom::query_all(document, &config.selector)?;
        let states = elements
            .iter()
            .map(|el| {
                let raw = el.get_attribute(&config.attribute).unwrap_or_default();
                match parse_target(&raw) {
                    Ok(target) => Some(CounterState::new(target)),
                    Err(e) => {
                        log::warn!("Skipping counter: {}", e);
                        None
                    }
                }
            })
            .collect();
        let shared = Rc::new(Shared {
            running: RefCell::new(TimerSlots::new(elements.len())),
            elements,
            states: RefCell::new(states),
            config: config.clone(),
        });

        let observer = if shared.elements.is_empty() {
            None
        } else {
            let observed = shared.clone();
            Observer::new(window, config.threshold, None, &shared.elements, move |entry| {
                if !entry.is_intersecting() {
                    return;
                }
                if let Some(index) = dom::index_of(&observed.elements, &entry.target()) {
                    dom::warn_on_err("counter", observed.start(index));
                }
            })?
        };

        log::debug!("Counters attached to {} elements", shared.elements.len());
        Ok(Self {
            shared,
            _observer: observer,
        })
    }

    /// Elements with a valid target.
    pub fn tracked(&self) -> usize {
        self.shared.states.borrow().iter().flatten().count()
    }

    /// Stops counts still in flight; their elements keep the last value shown.
    pub fn detach(self) {
        let stopped = self.shared.running.borrow_mut().clear();
        if stopped > 0 {
            log::debug!("Stopped {} running counters", stopped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(mut count: CountUp, limit: usize) -> Vec<u64> {
        let mut shown = Vec::new();
        for _ in 0..limit {
            count = count.step(count.tick_ms());
            shown.push(count.value());
            if count.is_done() {
                break;
            }
        }
        shown
    }

    #[test]
    fn hundred_lands_exactly_after_125_ticks() {
        let mut state = CounterState::new(100);
        let mut count = state.trigger(2000, 16).unwrap();
        // 0.8 per tick.
        assert_eq!(count.step(16 * 5).value(), 4);

        count = count.step(125 * 16);
        assert!(count.is_done());
        assert_eq!(count.value().to_string(), "100");

        // Extra ticks change nothing.
        assert_eq!(count.step(16).value(), 100);
        assert_eq!(count.step(16_000).value(), 100);
    }

    #[test]
    fn sequence_is_non_decreasing_and_ends_on_target() {
        for target in [1, 7, 99, 100, 125, 1234, 1_000_000] {
            let shown = run_to_end(CountUp::new(target, 2000, 16), 1000);
            assert_eq!(shown.len(), 125, "target {}", target);
            assert!(shown.windows(2).all(|w| w[0] <= w[1]), "target {}", target);
            assert_eq!(*shown.last().unwrap(), target);
            assert!(shown[..shown.len() - 1].iter().all(|v| *v <= target));
        }
    }

    #[test]
    fn intermediate_values_are_floored() {
        let count = CountUp::new(100, 2000, 16);
        assert_eq!(count.step(16).value(), 0);
        assert_eq!(count.step(32).value(), 1);
        assert_eq!(count.step(16 * 5).value(), 4);
        assert_eq!(count.step(16 * 124).value(), 99);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let count = CountUp::new(0, 2000, 16);
        assert!(!count.is_done());
        let count = count.step(16);
        assert!(count.is_done());
        assert_eq!(count.value(), 0);
        assert_eq!(run_to_end(CountUp::new(0, 2000, 16), 1000), vec![0]);
    }

    #[test]
    fn second_trigger_is_a_no_op() {
        let mut state = CounterState::new(50);
        assert!(state.trigger(2000, 16).is_some());
        assert!(state.trigger(2000, 16).is_none());
        assert!(state.trigger(2000, 16).is_none());
    }

    #[test]
    fn degenerate_timing_still_terminates() {
        let shown = run_to_end(CountUp::new(10, 0, 0), 10);
        assert_eq!(shown, vec![10]);

        let shown = run_to_end(CountUp::new(10, 5, 16), 10);
        assert_eq!(shown, vec![10]);
    }

    #[test]
    fn targets_must_be_plain_integers() {
        assert_eq!(parse_target("100").unwrap(), 100);
        assert_eq!(parse_target(" 42 ").unwrap(), 42);
        assert!(matches!(
            parse_target("12k"),
            Err(MotionError::InvalidCounterTarget { .. })
        ));
        assert!(parse_target("").is_err());
        assert!(parse_target("-5").is_err());
    }
}
