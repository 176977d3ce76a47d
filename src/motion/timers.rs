//! One pending timer per element. gloo timers cancel when dropped, so
//! replacing a slot cancels the earlier timer and clearing the set cancels
//! everything still scheduled.

#[derive(Debug)]
pub struct TimerSlots<T> {
    slots: Vec<Option<T>>,
}

impl<T> TimerSlots<T> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| None).collect(),
        }
    }

    /// Stores `timer` for `index` and hands back whatever it displaced. An
    /// out-of-range index hands `timer` straight back.
    pub fn replace(&mut self, index: usize, timer: T) -> Option<T> {
        match self.slots.get_mut(index) {
            Some(slot) => slot.replace(timer),
            None => Some(timer),
        }
    }

    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Empties every slot, returning how many held a timer.
    pub fn clear(&mut self) -> usize {
        self.slots.iter_mut().filter_map(Option::take).count()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Stands in for a gloo timer: counts how often it was cancelled.
    struct Pending(Rc<Cell<usize>>);

    impl Drop for Pending {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn latest_timer_wins_its_slot() {
        let mut slots = TimerSlots::new(2);
        assert_eq!(slots.replace(0, "first"), None);
        assert_eq!(slots.replace(0, "second"), Some("first"));
        assert_eq!(slots.take(0), Some("second"));
        assert_eq!(slots.take(0), None);
    }

    #[test]
    fn out_of_range_timer_is_handed_back() {
        let mut slots = TimerSlots::new(1);
        assert_eq!(slots.replace(3, 7), Some(7));
        assert_eq!(slots.take(3), None);
        assert_eq!(slots.clear(), 0);
    }

    #[test]
    fn clear_cancels_everything_still_pending() {
        let mut slots = TimerSlots::new(3);
        slots.replace(0, 'a');
        slots.replace(2, 'c');
        assert_eq!(slots.take(2), Some('c'));
        slots.replace(1, 'b');
        assert_eq!(slots.clear(), 2);
        assert_eq!(slots.clear(), 0);
        assert_eq!(slots.take(0), None);
    }

    #[test]
    fn dropping_the_set_cancels_pending_timers() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::new(2);
        slots.replace(0, Pending(cancelled.clone()));
        drop(slots.replace(0, Pending(cancelled.clone())));
        assert_eq!(cancelled.get(), 1);
        slots.replace(1, Pending(cancelled.clone()));
        drop(slots);
        assert_eq!(cancelled.get(), 3);
    }
}
