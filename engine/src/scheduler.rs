//! Turn order machinery.

use std::collections::BTreeMap;

use crate::prelude::*;

/// Speed-weighted turn queue.
///
/// Every actor has a next activation time. The actor with the earliest time
/// goes next, ties are broken by insertion order. Repeating actors are
/// requeued at `now + cost` when they're handed out.
#[derive(Clone, Default, Debug)]
pub struct Scheduler {
    now: i64,
    seq: u64,
    queue: BTreeMap<(i64, u64), Entity>,
    entries: HashMap<Entity, Entry>,
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    key: (i64, u64),
    cost: i64,
    repeat: bool,
}

impl Scheduler {
    /// Current scheduler time, the activation time of the latest actor.
    pub fn now(&self) -> i64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, e: Entity) -> bool {
        self.entries.contains_key(&e)
    }

    /// Schedule an actor to act after `cost` time units.
    ///
    /// Adding an actor that is already scheduled reschedules it.
    pub fn add(&mut self, e: Entity, repeat: bool, cost: i64) {
        self.remove(e);
        let cost = cost.max(1);
        let key = self.push(e, self.now + cost);
        self.entries.insert(e, Entry { key, cost, repeat });
    }

    /// Take an actor out of the queue. Does nothing if it wasn't there.
    pub fn remove(&mut self, e: Entity) -> bool {
        if let Some(entry) = self.entries.remove(&e) {
            self.queue.remove(&entry.key);
            true
        } else {
            false
        }
    }

    /// Return the actor whose turn it is and advance time to it.
    pub fn next(&mut self) -> Option<Entity> {
        let ((time, _), e) = self.queue.pop_first()?;
        self.now = time;

        let Some(mut entry) = self.entries.remove(&e) else {
            // Entries and queue are kept in sync, so this shouldn't happen.
            log::warn!("Scheduler::next: {e} had no entry");
            return Some(e);
        };
        if entry.repeat {
            entry.key = self.push(e, self.now + entry.cost);
            self.entries.insert(e, entry);
        }
        Some(e)
    }

    fn push(&mut self, e: Entity, time: i64) -> (i64, u64) {
        let key = (time, self.seq);
        self.seq += 1;
        self.queue.insert(key, e);
        key
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EngineState {
    Running,
    Locked,
}

/// Counting lock for the turn loop.
///
/// The loop runs only when the lock count is zero. It starts out locked, so
/// nothing happens before the game is explicitly started.
#[derive(Clone, Debug)]
pub struct Engine {
    locks: u32,
}

impl Default for Engine {
    fn default() -> Self {
        Engine { locks: 1 }
    }
}

impl Engine {
    pub fn state(&self) -> EngineState {
        if self.locks == 0 {
            EngineState::Running
        } else {
            EngineState::Locked
        }
    }

    pub fn lock(&mut self) {
        self.locks += 1;
    }

    /// Release one lock. Return whether the engine is free to run.
    pub fn unlock(&mut self) -> bool {
        if self.locks == 0 {
            log::warn!("Engine::unlock: engine is not locked");
        }
        self.locks = self.locks.saturating_sub(1);
        self.locks == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn entities(n: usize) -> Vec<Entity> {
        let mut world = hecs::World::new();
        (0..n).map(|_| Entity(world.spawn(()))).collect()
    }

    #[test]
    fn round_robin() {
        let v = entities(3);
        let mut s = Scheduler::default();
        for &e in &v {
            s.add(e, true, 100);
        }

        let order: Vec<Entity> = (0..6).filter_map(|_| s.next()).collect();
        assert_eq!(order, vec![v[0], v[1], v[2], v[0], v[1], v[2]]);
        assert_eq!(s.now(), 200);
    }

    #[test]
    fn speed_weighting() {
        let v = entities(2);
        let (slow, fast) = (v[0], v[1]);
        let mut s = Scheduler::default();
        s.add(slow, true, 100);
        s.add(fast, true, 50);

        let order: Vec<Entity> = (0..6).filter_map(|_| s.next()).collect();
        let fast_turns = order.iter().filter(|&&e| e == fast).count();
        assert_eq!(fast_turns, 4);
    }

    #[test]
    fn removal() {
        let v = entities(3);
        let mut s = Scheduler::default();
        for &e in &v {
            s.add(e, true, 100);
        }

        assert_eq!(s.next(), Some(v[0]));
        // Removing an actor mid-round drops its pending turn.
        assert!(s.remove(v[1]));
        assert!(!s.remove(v[1]));
        assert_eq!(s.next(), Some(v[2]));
        assert_eq!(s.next(), Some(v[0]));

        // Removing the current actor during its own turn stops it from
        // getting requeued.
        s.remove(v[0]);
        assert_eq!(s.next(), Some(v[2]));
        assert_eq!(s.next(), Some(v[2]));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn one_shot() {
        let v = entities(2);
        let mut s = Scheduler::default();
        s.add(v[0], false, 100);
        s.add(v[1], true, 100);
        assert_eq!(s.next(), Some(v[0]));
        assert!(!s.contains(v[0]));
        assert_eq!(s.next(), Some(v[1]));
        assert_eq!(s.next(), Some(v[1]));
    }

    #[test]
    fn engine_lock_counting() {
        let mut engine = Engine::default();
        assert_eq!(engine.state(), EngineState::Locked);

        assert!(engine.unlock());
        assert_eq!(engine.state(), EngineState::Running);

        engine.lock();
        engine.lock();
        assert!(!engine.unlock());
        assert_eq!(engine.state(), EngineState::Locked);
        assert!(engine.unlock());

        // Extra unlocks don't underflow.
        assert!(engine.unlock());
        engine.lock();
        assert_eq!(engine.state(), EngineState::Locked);
    }
}
