/// Delay and sound countdown timers.
///
/// `tick` is driven by the host's fixed 60 Hz clock, not by instruction
/// stepping, and keeps running while the interpreter waits on FX0A.
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self { delay: 0, sound: 0 }
    }

    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_floor_at_zero() {
        let mut timers = Timers::new();
        timers.delay = 2;
        timers.sound = 1;
        timers.tick();
        assert_eq!((timers.delay, timers.sound), (1, 0));
        timers.tick();
        timers.tick();
        assert_eq!((timers.delay, timers.sound), (0, 0));
    }

    #[test]
    fn sound_is_audible_while_nonzero() {
        let mut timers = Timers::new();
        assert!(!timers.sound_active());
        timers.sound = 1;
        assert!(timers.sound_active());
        timers.tick();
        assert!(!timers.sound_active());
    }
}
