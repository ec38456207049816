//! Skylight demo application
//!
//! Wires the sun-position picker and the render-graph settings panel to a
//! mock in-process scene so the widgets can be exercised without a live
//! streaming session.

use eframe::egui;
use log::error;
use skylight::constants::panel;
use skylight::scene::EmbeddedDescriptionSource;
use skylight::{LocalEntity, RenderGraphSettings, SceneEntity, SunPositionPicker};

/// Render-graph description a live session would fetch from the SDK.
const DEMO_DESCRIPTION: &str = include_str!("../demos/render_graph.json");

struct DemoApp {
    sun: LocalEntity,
    picker: SunPositionPicker,
    settings: Option<RenderGraphSettings>,
}

impl DemoApp {
    fn new() -> Self {
        let source = EmbeddedDescriptionSource::new(DEMO_DESCRIPTION);
        let settings = match RenderGraphSettings::load(&source, "demo-graph", "demo-token") {
            Ok(settings) => Some(settings),
            Err(err) => {
                // No retry: the panel just stays empty.
                error!("failed to load render graph settings: {err}");
                None
            }
        };

        Self {
            sun: LocalEntity::with_orientation([-45.0, 0.0, 0.0]),
            picker: SunPositionPicker::default(),
            settings,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::Window::new("Sun Position")
            .resizable(false)
            .show(ctx, |ui| {
                self.picker.show(ui, &mut self.sun);
                let [pitch, yaw, _] = self.sun.orientation();
                ui.label(format!("Pitch: {pitch:.1}°  Yaw: {yaw:.1}°"));
            });

        egui::Window::new("Render Graph Settings")
            .default_size(panel::DEFAULT_SETTINGS_SIZE)
            .min_size(panel::MIN_SETTINGS_SIZE)
            .show(ctx, |ui| match &mut self.settings {
                Some(settings) => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        settings.show(ui);
                    });
                }
                None => {
                    ui.label("Settings unavailable");
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Skylight widgets");
            ui.label("Drag the sun handle; the orientation below tracks every move.");
        });
    }
}

/// Application entry point.
fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Skylight",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}
