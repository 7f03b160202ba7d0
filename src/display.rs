use minifb::{Key, Scale, Window, WindowOptions};

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;

const LIT: u32 = 0x007FFF;
const DARK: u32 = 0x000000;

/// Pixel sink for the draw instruction.
///
/// Coordinates past either edge wrap modulo the display size before
/// indexing, so callers may pass unclamped `Vx + col` / `Vy + row`.
pub trait Display {
    /// XOR-toggles the pixel at (x mod WIDTH, y mod HEIGHT). Returns true
    /// if the pixel was switched off, which the interpreter reports as a
    /// sprite collision through VF.
    fn set_pixel(&mut self, x: usize, y: usize) -> bool;

    /// Switches every pixel off.
    fn clear(&mut self);
}

/// Desktop window backed by minifb, scaled 16x and capped near 60 fps.
pub struct WindowDisplay {
    pixels: Vec<bool>,
    frame: Vec<u32>,
    window: Window,
}

impl WindowDisplay {
    pub fn new() -> Result<Self, minifb::Error> {
        let mut window = Window::new(
            "chipvm - ESC to exit",
            WIDTH,
            HEIGHT,
            WindowOptions {
                scale: Scale::X16,
                ..WindowOptions::default()
            },
        )?;
        window.limit_update_rate(Some(std::time::Duration::from_micros(16_600)));
        Ok(Self {
            pixels: vec![false; WIDTH * HEIGHT],
            frame: vec![DARK; WIDTH * HEIGHT],
            window,
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn escape_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Keys currently held down, for the host to map onto the hex pad.
    pub fn held_keys(&self) -> Vec<Key> {
        self.window.get_keys()
    }

    /// Pushes the current pixel state to the window.
    pub fn sync(&mut self) -> Result<(), minifb::Error> {
        for (slot, on) in self.frame.iter_mut().zip(&self.pixels) {
            *slot = if *on { LIT } else { DARK };
        }
        self.window.update_with_buffer(&self.frame, WIDTH, HEIGHT)
    }
}

impl Display for WindowDisplay {
    fn set_pixel(&mut self, x: usize, y: usize) -> bool {
        let index = (y % HEIGHT) * WIDTH + (x % WIDTH);
        self.pixels[index] = !self.pixels[index];
        !self.pixels[index]
    }

    fn clear(&mut self) {
        self.pixels.fill(false);
    }
}
