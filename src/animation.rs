use std::time::Duration;

use slotmap::SecondaryMap;

use crate::element::ElementId;

#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

/// Repeating poll for one element while its animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimer {
    interval: Duration,
    next_due: Instant,
}

impl AnimationTimer {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

/// Cancellable per-element timers, driven by the host through `due`.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    timers: SecondaryMap<ElementId, AnimationTimer>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts polling `element`, replacing any timer it already had.
    pub fn start(&mut self, element: ElementId, interval: Duration, now: Instant) {
        let interval = interval.max(Duration::from_millis(1));
        self.timers.insert(
            element,
            AnimationTimer {
                interval,
                next_due: now + interval,
            },
        );
    }

    pub fn cancel(&mut self, element: ElementId) -> bool {
        self.timers.remove(element).is_some()
    }

    pub fn is_running(&self, element: ElementId) -> bool {
        self.timers.contains_key(element)
    }

    pub fn timer(&self, element: ElementId) -> Option<&AnimationTimer> {
        self.timers.get(element)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Elements whose timer fired by `now`, each reported once per call.
    ///
    /// A timer that fell behind skips the missed frames instead of firing
    /// them back to back.
    pub fn due(&mut self, now: Instant) -> Vec<ElementId> {
        let mut fired = Vec::new();
        for (element, timer) in self.timers.iter_mut() {
            if timer.next_due > now {
                continue;
            }
            timer.next_due += timer.interval;
            if timer.next_due <= now {
                timer.next_due = now + timer.interval;
            }
            fired.push(element);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn elements(count: usize) -> Vec<ElementId> {
        let mut map: SlotMap<ElementId, ()> = SlotMap::with_key();
        (0..count).map(|_| map.insert(())).collect()
    }

    #[test]
    fn fires_once_per_interval() {
        let ids = elements(1);
        let start = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(ids[0], Duration::from_millis(40), start);

        assert!(scheduler.due(start + Duration::from_millis(39)).is_empty());
        assert_eq!(scheduler.due(start + Duration::from_millis(40)), vec![ids[0]]);
        assert!(scheduler.due(start + Duration::from_millis(41)).is_empty());
        assert_eq!(scheduler.due(start + Duration::from_millis(80)), vec![ids[0]]);
    }

    #[test]
    fn late_tick_skips_missed_frames() {
        let ids = elements(1);
        let start = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(ids[0], Duration::from_millis(10), start);

        let late = start + Duration::from_millis(95);
        assert_eq!(scheduler.due(late).len(), 1);
        assert!(scheduler.due(late).is_empty());
        let next = scheduler.timer(ids[0]).map(AnimationTimer::next_due);
        assert_eq!(next, Some(late + Duration::from_millis(10)));
    }

    #[test]
    fn cancel_stops_timer() {
        let ids = elements(2);
        let start = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(ids[0], Duration::from_millis(10), start);
        scheduler.start(ids[1], Duration::from_millis(10), start);

        assert!(scheduler.cancel(ids[0]));
        assert!(!scheduler.cancel(ids[0]));
        assert_eq!(scheduler.due(start + Duration::from_millis(10)), vec![ids[1]]);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn restart_replaces_existing_timer() {
        let ids = elements(1);
        let start = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(ids[0], Duration::from_millis(10), start);
        scheduler.start(ids[0], Duration::from_millis(50), start);
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.due(start + Duration::from_millis(10)).is_empty());
    }
}
