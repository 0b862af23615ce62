use bevy_ecs::component::Component;

use crate::model::ActorId;

/// Countdown state of an in-progress conversion.
///
/// `remaining` only means something while `active`. It is signed because a
/// multi-tick decrement can overshoot past zero; completion fires at `<= 0`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionTimer {
    active: bool,
    remaining: i32,
    initiator: Option<ActorId>,
}

impl ConversionTimer {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    pub fn initiator(&self) -> Option<ActorId> {
        self.initiator
    }

    /// Arm the timer. Calling this on an active timer re-arms it with the
    /// new duration and initiator.
    pub fn start(&mut self, initiator: Option<ActorId>, duration: i32) {
        self.active = true;
        self.remaining = duration;
        self.initiator = initiator;
    }

    /// Subtract `amount` and return what is left. The caller checks for
    /// completion.
    pub fn decrement(&mut self, amount: i32) -> i32 {
        self.remaining -= amount;
        self.remaining
    }

    /// Overwrite the remaining ticks without touching the initiator.
    pub fn reschedule(&mut self, remaining: i32) {
        self.remaining = remaining;
    }

    pub fn is_due(&self) -> bool {
        self.active && self.remaining <= 0
    }

    /// Deactivate and clear the timer, handing back who started it.
    pub fn finish(&mut self) -> Option<ActorId> {
        self.active = false;
        self.remaining = 0;
        self.initiator.take()
    }
}

/// Last `converting` value the sync adapter sent to observers.
/// Only the sync adapter writes this.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncedConverting {
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        let timer = ConversionTimer::default();
        assert!(!timer.is_active());
        assert!(timer.initiator().is_none());
        assert!(!timer.is_due());
    }

    #[test]
    fn start_rearms_while_active() {
        let mut timer = ConversionTimer::default();
        timer.start(Some(ActorId(1)), 4000);
        timer.decrement(10);
        timer.start(Some(ActorId(2)), 3600);
        assert!(timer.is_active());
        assert_eq!(timer.remaining(), 3600);
        assert_eq!(timer.initiator(), Some(ActorId(2)));
    }

    #[test]
    fn decrement_may_overshoot() {
        let mut timer = ConversionTimer::default();
        timer.start(None, 2);
        assert_eq!(timer.decrement(1), 1);
        assert!(!timer.is_due());
        assert_eq!(timer.decrement(3), -2);
        assert!(timer.is_due());
    }

    #[test]
    fn finish_clears_state() {
        let mut timer = ConversionTimer::default();
        timer.start(Some(ActorId(7)), 10);
        assert_eq!(timer.finish(), Some(ActorId(7)));
        assert!(!timer.is_active());
        assert!(timer.initiator().is_none());
    }
}
