use egui::Context;

use crate::controller::{Action, InputSnapshot};
use crate::model::TransformState;

/// What the debug window shows for the current frame
pub struct OverlayInfo<'a> {
    pub demo: &'a str,
    pub fps: f32,
    pub transform: &'a TransformState,
    pub input: &'a InputSnapshot,
    pub controls: &'a [&'static str],
}

pub fn draw_overlay(ctx: &Context, info: &OverlayInfo) {
    let t = info.transform;
    let held: Vec<String> = Action::ALL
        .iter()
        .filter(|a| info.input.contains(**a))
        .map(|a| format!("{a:?}"))
        .collect();

    egui::Window::new("Debug")
        .default_pos([8.0, 8.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("Demo: {}", info.demo)).small());
            ui.label(egui::RichText::new(format!("FPS: {:.0}", info.fps)).small());
            ui.label(egui::RichText::new(format!("Pos: x: {:.3} y: {:.3} z: {:.3}", t.position.x, t.position.y, t.position.z)).small());
            ui.label(egui::RichText::new(format!("Rot: x: {:.1} y: {:.1} z: {:.1}", t.rotation.x, t.rotation.y, t.rotation.z)).small());
            ui.label(egui::RichText::new(format!("Scale: {:.2}", t.scale)).small());
            if !held.is_empty() {
                ui.label(egui::RichText::new(format!("Held: {}", held.join(", "))).small());
            }
            ui.separator();
            ui.label(egui::RichText::new("Controls:").small());
            for line in info.controls {
                ui.label(egui::RichText::new(*line).small());
            }
        });
}
