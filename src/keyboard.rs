use minifb::Key;

/// Key-down state of the 16-key hex pad as the interpreter sees it.
pub trait Keyboard {
    /// Whether pad key 0x0-0xF is currently held. Values above 0xF report
    /// unpressed.
    fn is_pressed(&self, key: u8) -> bool;
}

/// Held-key state sampled once per frame from the window.
pub struct Keypad {
    keys: [bool; 16],
}

impl Keypad {
    pub fn new() -> Self {
        Self { keys: [false; 16] }
    }

    /// Replaces the pad state with the keys currently held and returns the
    /// ones that were not held on the previous update. The host forwards
    /// each of those to the interpreter exactly once, which is what
    /// resumes an FX0A wait.
    pub fn update(&mut self, held: &[u8]) -> Vec<u8> {
        let mut next = [false; 16];
        for &key in held {
            if let Some(slot) = next.get_mut(key as usize) {
                *slot = true;
            }
        }

        let fresh = (0..16u8)
            .filter(|&k| next[k as usize] && !self.keys[k as usize])
            .collect();
        self.keys = next;
        fresh
    }
}

impl Keyboard for Keypad {
    fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }
}

/// Conventional QWERTY layout for the 4x4 pad: 1234 / QWER / ASDF / ZXCV.
pub fn map_key(key: Key) -> Option<u8> {
    match key {
        Key::Key1 => Some(0x1),
        Key::Key2 => Some(0x2),
        Key::Key3 => Some(0x3),
        Key::Key4 => Some(0xC),
        Key::Q => Some(0x4),
        Key::W => Some(0x5),
        Key::E => Some(0x6),
        Key::R => Some(0xD),
        Key::A => Some(0x7),
        Key::S => Some(0x8),
        Key::D => Some(0x9),
        Key::F => Some(0xE),
        Key::Z => Some(0xA),
        Key::X => Some(0x0),
        Key::C => Some(0xB),
        Key::V => Some(0xF),
        _ => None,
    }
}
