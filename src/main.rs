use std::{env, fs, process};

use crate::display::WindowDisplay;
use crate::emulator::Emulator;
use crate::keyboard::{map_key, Keypad};
use crate::sound::Buzzer;

mod decode;
mod display;
mod emulator;
mod error;
mod keyboard;
mod memory;
mod registers;
mod sound;
mod timer;

// The window caps the loop near 60 Hz, so timers tick once per frame and
// the CPU runs at steps-per-frame times 60 instructions per second.
const DEFAULT_STEPS_PER_FRAME: u32 = 10;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let rom_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: chipvm <rom> [steps-per-frame]");
            process::exit(2);
        }
    };
    let steps_per_frame: u32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_STEPS_PER_FRAME);

    let rom = match fs::read(&rom_path) {
        Ok(rom) => rom,
        Err(err) => {
            log::error!("cannot read {rom_path}: {err}");
            process::exit(1);
        }
    };

    let mut display = match WindowDisplay::new() {
        Ok(display) => display,
        Err(err) => {
            log::error!("cannot open window: {err}");
            process::exit(1);
        }
    };
    let mut keypad = Keypad::new();
    let mut buzzer = Buzzer::new();
    if buzzer.is_none() {
        log::warn!("no usable audio output, running silent");
    }

    let mut emu = Emulator::new();
    if let Err(err) = emu.load_program(&rom) {
        log::error!("cannot load {rom_path}: {err}");
        process::exit(1);
    }
    log::info!("loaded {} bytes from {rom_path}", rom.len());

    while display.is_open() && !display.escape_pressed() {
        let held: Vec<u8> = display
            .held_keys()
            .into_iter()
            .filter_map(map_key)
            .collect();
        for key in keypad.update(&held) {
            emu.key_pressed(key);
        }

        for _ in 0..steps_per_frame {
            if let Err(err) = emu.step(&mut display, &keypad) {
                log::error!("halted: {err}");
                process::exit(1);
            }
        }
        emu.tick_timers();

        if let Some(buzzer) = buzzer.as_mut() {
            buzzer.set_active(emu.sound_active());
        }
        if let Err(err) = display.sync() {
            log::error!("display update failed: {err}");
            process::exit(1);
        }
    }
}
