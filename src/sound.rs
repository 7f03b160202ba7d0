use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};

const TONE_HZ: f32 = 440.0;

/// Continuous sine tone on the default output device, paused unless the
/// sound timer is running. Built once at startup; a machine without an
/// audio device simply runs silent.
pub struct Buzzer {
    stream: cpal::Stream,
    playing: bool,
}

impl Buzzer {
    pub fn new() -> Option<Self> {
        let device = cpal::default_host().default_output_device()?;
        let config = match device.default_output_config() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("error while querying audio configs: {err}");
                return None;
            }
        };

        let built = match config.sample_format() {
            cpal::SampleFormat::F32 => Self::build_stream::<f32>(&device, &config.into()),
            cpal::SampleFormat::I16 => Self::build_stream::<i16>(&device, &config.into()),
            cpal::SampleFormat::U16 => Self::build_stream::<u16>(&device, &config.into()),
            format => {
                log::warn!("unsupported sample format '{format}'");
                return None;
            }
        };
        let stream = match built {
            Ok(stream) => stream,
            Err(err) => {
                log::warn!("could not build audio stream: {err}");
                return None;
            }
        };
        stream.pause().ok()?;

        Some(Self {
            stream,
            playing: false,
        })
    }

    /// Starts or stops the tone; idempotent per state.
    pub fn set_active(&mut self, on: bool) {
        if on == self.playing {
            return;
        }
        let result = if on {
            self.stream.play().map_err(|e| e.to_string())
        } else {
            self.stream.pause().map_err(|e| e.to_string())
        };
        if let Err(err) = result {
            log::warn!("audio stream error: {err}");
        }
        self.playing = on;
    }

    fn build_stream<T>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
    ) -> Result<cpal::Stream, cpal::BuildStreamError>
    where
        T: SizedSample + FromSample<f32>,
    {
        let sample_rate = config.sample_rate.0 as f32;
        let channels = config.channels as usize;

        let mut sample_clock = 0f32;
        let mut next_value = move || {
            sample_clock = (sample_clock + 1.0) % sample_rate;
            (sample_clock * TONE_HZ * 2.0 * std::f32::consts::PI / sample_rate).sin()
        };

        device.build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let value: T = T::from_sample(next_value());
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                }
            },
            |err| log::warn!("an error occurred on the audio stream: {err}"),
            None,
        )
    }
}
