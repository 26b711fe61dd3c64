//! Desktop preview app for myrtio-pixel-animations
//!
//! Simulates the reference installation in a window: one long strip running
//! the fire or ripple animation and three short rings with spinning dots.
//! Strips are driven through the same `FrameScheduler` as on hardware.

use std::{cell::RefCell, rc::Rc, time::Instant as StdInstant};

use eframe::egui::{self};
use myrtio_pixel_animations::{
    AnimationId, AnimationSlot, FireAnimation, FrameScheduler, Instant, OutputDriver, PixelStrip,
    RippleAnimation, Rgbw, SpinningAnimation, Strip, Surface, color::rgbw_to_rgb, rgbw,
};
use rand::{SeedableRng, rngs::SmallRng};

/// Number of LEDs in the long strip
const MAIN_LEDS: usize = 144;

/// Number of LEDs in each ring
const RING_LEDS: usize = 8;

/// Default brightness of every strip (0-255)
const DEFAULT_BRIGHTNESS: u8 = 204;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Radius of a ring, in pixels
const RING_RADIUS: f32 = 36.0;

/// Last frame written to a simulated strip
type SharedFrame = Rc<RefCell<Vec<Rgbw>>>;

/// Output driver that keeps the last frame for painting
struct PreviewDriver {
    frame: SharedFrame,
}

impl PreviewDriver {
    fn new(len: usize) -> (Self, SharedFrame) {
        let frame = Rc::new(RefCell::new(vec![Rgbw::default(); len]));
        (
            Self {
                frame: Rc::clone(&frame),
            },
            frame,
        )
    }
}

impl OutputDriver for PreviewDriver {
    fn write(&mut self, colors: &[Rgbw]) {
        self.frame.borrow_mut().copy_from_slice(colors);
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Pixel Animations Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-pixel-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    main_strip: PixelStrip<MAIN_LEDS, PreviewDriver>,
    main_frame: SharedFrame,
    rings: Vec<(PixelStrip<RING_LEDS, PreviewDriver>, SharedFrame)>,
    scheduler: FrameScheduler,

    /// Animation of the long strip
    animation_id: AnimationId,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Brightness (0-255)
    brightness: u8,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let now = Instant::from_millis(0);

        let (driver, main_frame) = PreviewDriver::new(MAIN_LEDS);
        let mut main_strip: PixelStrip<MAIN_LEDS, PreviewDriver> =
            PixelStrip::new(driver).with_brightness(DEFAULT_BRIGHTNESS);
        main_strip.set_animation(Self::main_animation(AnimationId::Fire), now);

        let rings = [
            rgbw(128, 0, 0, 0),
            rgbw(0, 128, 0, 0),
            rgbw(0, 0, 128, 0),
        ]
        .into_iter()
        .map(|color| {
            let (driver, frame) = PreviewDriver::new(RING_LEDS);
            let mut strip: PixelStrip<RING_LEDS, PreviewDriver> =
                PixelStrip::new(driver).with_brightness(DEFAULT_BRIGHTNESS);
            strip.set_animation(SpinningAnimation::new(color).into(), now);
            (strip, frame)
        })
        .collect();

        Self {
            main_strip,
            main_frame,
            rings,
            scheduler: FrameScheduler::new(),
            animation_id: AnimationId::Fire,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            brightness: DEFAULT_BRIGHTNESS,
            led_size: LED_SIZE,
        }
    }

    fn main_animation(id: AnimationId) -> AnimationSlot<MAIN_LEDS> {
        match id {
            AnimationId::Fire => FireAnimation::new(SmallRng::from_os_rng())
                .with_cooling(70)
                .with_sparking(30)
                .into(),
            AnimationId::Ripple => RippleAnimation::default().into(),
            AnimationId::Spinning => SpinningAnimation::new(rgbw(128, 0, 0, 0)).into(),
        }
    }

    /// Switch the animation of the long strip
    fn set_main_animation(&mut self, id: AnimationId) {
        self.animation_id = id;
        self.main_strip
            .set_animation(Self::main_animation(id), Instant::from_millis(self.t_ms));
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.main_strip.frame_mut().set_brightness(brightness);
        for (ring, _) in &mut self.rings {
            ring.frame_mut().set_brightness(brightness);
        }
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.scheduler = FrameScheduler::new();

        let now = Instant::from_millis(0);
        self.main_strip
            .set_animation(Self::main_animation(self.animation_id), now);
        for (ring, _) in &mut self.rings {
            if let Some(animation) = ring.take_animation() {
                ring.set_animation(animation, now);
            }
        }
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

    /// Draw every strip once at the current synthetic time
    fn draw_strips(&mut self) {
        let now = Instant::from_millis(self.t_ms);
        let mut strips: Vec<&mut dyn Strip> = Vec::with_capacity(1 + self.rings.len());
        strips.push(&mut self.main_strip);
        for (ring, _) in &mut self.rings {
            strips.push(ring);
        }
        self.scheduler.tick(&mut strips, now);
    }

    fn paint_strip(&self, ui: &mut egui::Ui) {
        let frame = self.main_frame.borrow();
        let available_width = ui.available_width();
        let led_pitch = self.led_size + LED_GAP;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
        let rows = frame.len().div_ceil(leds_per_row);
        #[allow(clippy::cast_precision_loss)]
        let height = rows as f32 * led_pitch;

        let (response, painter) =
            ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in frame.iter().enumerate() {
            let row = i / leds_per_row;
            let col = i % leds_per_row;
            let x = origin.x + col as f32 * led_pitch;
            let y = origin.y + row as f32 * led_pitch;

            let rect = egui::Rect::from_min_size(
                egui::pos2(x, y),
                egui::vec2(self.led_size, self.led_size),
            );
            painter.rect_filled(rect, 3.0, to_color32(*pixel));
        }
    }

    fn paint_rings(&self, ui: &mut egui::Ui) {
        let side = RING_RADIUS * 2.0 + self.led_size * 2.0;
        ui.horizontal(|ui| {
            for (_, frame) in &self.rings {
                let frame = frame.borrow();
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
                let center = response.rect.center();

                #[allow(clippy::cast_precision_loss)]
                for (i, pixel) in frame.iter().enumerate() {
                    let angle = std::f32::consts::TAU * i as f32 / frame.len() as f32;
                    let pos = center + RING_RADIUS * egui::vec2(angle.cos(), angle.sin());
                    painter.circle_filled(pos, self.led_size / 2.0, to_color32(*pixel));
                }
                ui.add_space(16.0);
            }
        });
    }
}

fn to_color32(pixel: Rgbw) -> egui::Color32 {
    let rgb = rgbw_to_rgb(pixel);
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        if self.playing {
            self.draw_strips();
        }

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
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(
                            egui::Slider::new(&mut self.time_scale, 0.1..=5.0)
                                .logarithmic(true),
                        );
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <StripControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Animation:");
                        let mut selected = self.animation_id;
                        egui::ComboBox::from_id_salt("animation_selector")
                            .selected_text(self.animation_id.as_str())
                            .show_ui(ui, |ui| {
                                for id in [
                                    AnimationId::Fire,
                                    AnimationId::Ripple,
                                    AnimationId::Spinning,
                                ] {
                                    ui.selectable_value(&mut selected, id, id.as_str());
                                }
                            });
                        if selected != self.animation_id {
                            self.set_main_animation(selected);
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Brightness:");
                        let old_brightness = self.brightness;
                        ui.add(egui::DragValue::new(&mut self.brightness).range(0u8..=255u8));
                        if self.brightness != old_brightness {
                            self.set_brightness(self.brightness);
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });
                });
                // </StripControls>
            });

            ui.add_space(16.0);
            self.paint_strip(ui);
            ui.add_space(16.0);
            self.paint_rings(ui);
        });
    }
}
