//! Standalone demo: opens a window with a hue and a temperature slider.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_color_slider::{color_slider, PaletteMode, Rgb, SliderConfig, ValueRange};

fn main() {
    env_logger::init();

    let hue = RwSignal::new(180.0);
    let hue_palette = RwSignal::new(PaletteMode::HueSweep { saturation: 1.0 });
    let kelvin = RwSignal::new(4000.0);
    let temperature_palette = RwSignal::new(PaletteMode::TemperatureSweep {
        min_kelvin: 2000,
        max_kelvin: 6500,
    });
    let swatch = RwSignal::new(Rgb::WHITE);

    let view = move || {
        v_stack((
            color_slider(
                hue,
                hue_palette,
                SliderConfig {
                    range: ValueRange::new(0.0, 360.0),
                    ..Default::default()
                },
            )
            .on_color(move |c| swatch.set(c))
            .style(|s| s.width_full()),
            color_slider(
                kelvin,
                temperature_palette,
                SliderConfig {
                    range: ValueRange::new(2000.0, 6500.0),
                    snap_to_value: true,
                    ..Default::default()
                },
            )
            .on_color(move |c| swatch.set(c))
            .style(|s| s.width_full()),
            label(move || format!("{:.0}° / {:.0} K", hue.get(), kelvin.get())),
            empty().style(move |s| {
                let (r, g, b) = swatch.get().to_rgb8();
                s.width(48.0)
                    .height(48.0)
                    .border_radius(24.0)
                    .background(Color::rgb8(r, g, b))
            }),
        ))
        .style(|s| s.gap(12.0).padding(16.0).size_full())
    };

    floem::Application::new()
        .window(
            move |_| {
                view().on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 200.0))
                    .title("floem-color-slider"),
            ),
        )
        .run();
}
