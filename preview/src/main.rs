//! Desktop preview app for myrtio-strip-keepalive
//!
//! Plays the demo sequence on a simulated strip and shows when the
//! keep-alive pulse fires. Both run on synthetic time so the sequence can be
//! sped up or paused.

use std::convert::Infallible;
use std::sync::OnceLock;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use embedded_hal::digital::{ErrorType, OutputPin};
use myrtio_strip_keepalive::{
    DEMO_SEQUENCE, Duration, Instant, OutputDriver, PulseConfig, PulseTicker, RAINBOW_STEPS,
    Rgb, Sequence, SequencePlayer, Step,
};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Upper bound of frames rendered per repaint when running fast
const MAX_FRAMES_PER_UPDATE: usize = 64;

/// How long the pulse indicator stays lit; the real pulse is far too short to see
const PULSE_INDICATOR: Duration = Duration::from_millis(300);

/// Demo sequence followed by the rainbow effects
static DEMO_WITH_RAINBOW: OnceLock<Sequence<16>> = OnceLock::new();

fn demo_with_rainbow() -> &'static [Step] {
    DEMO_WITH_RAINBOW
        .get_or_init(|| {
            let mut sequence = Sequence::from_steps(DEMO_SEQUENCE).unwrap_or_default();
            let _ = sequence.extend(RAINBOW_STEPS);
            sequence
        })
        .steps()
}

/// Driver for the simulated strip; the app reads the buffer directly
struct PreviewDriver;

impl OutputDriver for PreviewDriver {
    fn write(&mut self, _colors: &[Rgb]) {}
}

/// Pin with nothing attached; the indicator is driven from the ticker phase
struct PreviewPin;

impl ErrorType for PreviewPin {
    type Error = Infallible;
}

impl OutputPin for PreviewPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 300.0])
            .with_title("Strip Keep-Alive Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-strip-keepalive-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    player: SequencePlayer<'static, PreviewDriver, LED_COUNT>,
    ticker: PulseTicker<PreviewPin>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Whether the rainbow effects are appended to the demo
    with_rainbow: bool,
    /// LED pixel size for display
    led_size: f32,
    /// Synthetic time of the last pulse start
    last_pulse: Option<Instant>,
}

impl PreviewApp {
    fn new() -> Self {
        let mut app = Self {
            player: SequencePlayer::new(PreviewDriver, DEMO_SEQUENCE),
            ticker: PulseTicker::new(
                PreviewPin,
                PreviewPin,
                PulseConfig::DEFAULT,
            ),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            with_rainbow: false,
            led_size: LED_SIZE,
            last_pulse: None,
        };
        app.reset_time();
        app
    }

    fn steps(&self) -> &'static [Step] {
        if self.with_rainbow {
            demo_with_rainbow()
        } else {
            DEMO_SEQUENCE
        }
    }

    /// Restart the sequence and the pulse cycle from zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.last_pulse = None;
        let steps = self.steps();
        self.player.set_steps(steps);
        let _ = self.ticker.arm(Instant::from_ticks(0));
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Catch the player and the ticker up with synthetic time
    fn advance(&mut self) {
        let now = Instant::from_millis(self.t_ms);

        for _ in 0..MAX_FRAMES_PER_UPDATE {
            if self.player.tick(now).next_deadline > now {
                break;
            }
        }

        while let Some(deadline) = self.ticker.next_deadline() {
            if deadline > now {
                break;
            }
            let was_active = self.ticker.is_active();
            let _ = self.ticker.tick(now);
            if !was_active && self.ticker.is_active() {
                self.last_pulse = Some(now);
            }
        }
    }

    fn pulse_lit(&self) -> bool {
        let now = Instant::from_millis(self.t_ms);
        self.last_pulse
            .is_some_and(|at| now.saturating_duration_since(at) < PULSE_INDICATOR)
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.advance();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=10.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <SequenceControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    let old_with_rainbow = self.with_rainbow;
                    ui.checkbox(&mut self.with_rainbow, "Append rainbow effects");
                    if self.with_rainbow != old_with_rainbow {
                        let steps = self.steps();
                        self.player.set_steps(steps);
                    }

                    ui.add_space(4.0);

                    let step = self
                        .player
                        .current_step()
                        .map_or("-", |step| step.kind.as_str());
                    ui.label(format!("Effect: {step}"));
                });
                // </SequenceControls>
                ui.add_space(16.0);
                // <PulseIndicator>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                        let color = if self.pulse_lit() {
                            egui::Color32::from_rgb(255, 60, 60)
                        } else {
                            egui::Color32::from_rgb(60, 20, 20)
                        };
                        ui.painter().circle_filled(rect.center(), 6.0, color);
                        ui.label("Keep-alive");
                    });

                    ui.add_space(4.0);

                    ui.label(format!("Pulses: {}", self.ticker.pulse_count()));
                    if let Some(deadline) = self.ticker.next_deadline() {
                        let now = Instant::from_millis(self.t_ms);
                        let left = deadline.saturating_duration_since(now);
                        ui.label(format!("Next in {} ms", left.as_millis()));
                    }
                });
                // </PulseIndicator>
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;
            let cells = self.player.strip().cells();

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = cells.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in cells.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
