//! Render-graph settings panel.
//!
//! Fetches the flat descriptor list from the scene boundary, groups it into
//! the category tree and renders one editor per descriptor. User edits go
//! into a mutable key/value bag the caller hands back to the SDK.

use egui::{Color32, DragValue, Ui};
use log::warn;
use serde_json::{Map, Value};

use super::categories::{compute_categories, Category};
use super::descriptor::{InputDescriptor, InputKind};
use crate::scene::{AssetDescriptionSource, SceneError};

/// Settings panel state: the computed category tree plus the per-attribute
/// value bag. Rebuilt from scratch on every load; nothing is persisted here.
pub struct RenderGraphSettings {
    root: Category,
    values: Map<String, Value>,
}

impl RenderGraphSettings {
    /// Fetch the description for `asset_id` and build a fresh panel. The
    /// value bag is seeded with each descriptor's default.
    pub fn load(
        source: &dyn AssetDescriptionSource,
        asset_id: &str,
        token: &str,
    ) -> Result<Self, SceneError> {
        let descriptors = source.asset_description(asset_id, token)?;
        Ok(Self::from_descriptors(&descriptors))
    }

    /// Build the panel from an already-fetched descriptor list.
    pub fn from_descriptors(descriptors: &[InputDescriptor]) -> Self {
        let mut values = Map::new();
        for descriptor in descriptors {
            values.insert(descriptor.name.clone(), descriptor.default.clone());
        }
        Self {
            root: compute_categories(descriptors),
            values,
        }
    }

    pub fn root(&self) -> &Category {
        &self.root
    }

    /// Current attribute values, keyed by descriptor name. The caller writes
    /// this bag back to the SDK.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Render the whole tree. Returns true if any value changed this frame.
    pub fn show(&mut self, ui: &mut Ui) -> bool {
        let mut changed = false;
        for descriptor in &self.root.description {
            changed |= render_editor(ui, descriptor, &mut self.values);
        }
        for category in &self.root.categories {
            changed |= render_category(ui, category, &mut self.values);
        }
        changed
    }
}

fn render_category(ui: &mut Ui, category: &Category, values: &mut Map<String, Value>) -> bool {
    let mut changed = false;
    let title = category.name.as_deref().unwrap_or("");

    // The main attribute renders as a checkbox on the header row; when the
    // category is toggled off its body is still shown, matching the source
    // panel's behavior of only writing the toggle value.
    if let Some(main) = &category.main_attribute {
        let mut enabled = values
            .get(&main.name)
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if ui.checkbox(&mut enabled, title).changed() {
            values.insert(main.name.clone(), Value::Bool(enabled));
            changed = true;
        }
    }

    let header = egui::CollapsingHeader::new(title).default_open(false);
    changed |= header
        .show(ui, |ui| {
            let mut inner_changed = false;
            for descriptor in &category.description {
                inner_changed |= render_editor(ui, descriptor, values);
            }
            for child in &category.categories {
                inner_changed |= render_category(ui, child, values);
            }
            inner_changed
        })
        .body_returned
        .unwrap_or(false);

    changed
}

/// Render one descriptor's editor and write the edited value into the bag.
fn render_editor(ui: &mut Ui, descriptor: &InputDescriptor, values: &mut Map<String, Value>) -> bool {
    let current = values
        .get(&descriptor.name)
        .cloned()
        .unwrap_or_else(|| descriptor.default.clone());

    let edited = match descriptor.kind {
        InputKind::Bool => {
            let mut value = current.as_bool().unwrap_or(false);
            ui.checkbox(&mut value, &descriptor.name)
                .changed()
                .then(|| Value::Bool(value))
        }
        InputKind::Int => {
            let mut value = current.as_i64().unwrap_or(0);
            ui.add(DragValue::new(&mut value).prefix(format!("{}: ", descriptor.name)))
                .changed()
                .then(|| Value::from(value))
        }
        InputKind::Float => {
            let mut value = current.as_f64().unwrap_or(0.0);
            ui.add(
                DragValue::new(&mut value)
                    .speed(0.01)
                    .prefix(format!("{}: ", descriptor.name)),
            )
            .changed()
            .then(|| Value::from(value))
        }
        InputKind::Vec2 | InputKind::Vec3 | InputKind::Vec4 => {
            render_components(ui, descriptor, &current)
        }
        InputKind::Color => render_color(ui, descriptor, &current),
        InputKind::String => {
            let mut value = current.as_str().unwrap_or("").to_string();
            ui.horizontal(|ui| {
                ui.label(&descriptor.name);
                ui.text_edit_singleline(&mut value)
            })
            .inner
            .changed()
            .then(|| Value::String(value))
        }
    };

    match edited {
        Some(value) => {
            values.insert(descriptor.name.clone(), value);
            true
        }
        None => false,
    }
}

fn render_components(ui: &mut Ui, descriptor: &InputDescriptor, current: &Value) -> Option<Value> {
    const AXIS_LABELS: [&str; 4] = ["X:", "Y:", "Z:", "W:"];
    let count = descriptor.kind.component_count();
    let mut components = component_values(current, count);

    let changed = ui
        .horizontal(|ui| {
            ui.label(&descriptor.name);
            let mut changed = false;
            for (index, component) in components.iter_mut().enumerate() {
                changed |= ui
                    .add(DragValue::new(component).speed(0.01).prefix(AXIS_LABELS[index]))
                    .changed();
            }
            changed
        })
        .inner;

    changed.then(|| Value::from(components))
}

fn render_color(ui: &mut Ui, descriptor: &InputDescriptor, current: &Value) -> Option<Value> {
    let components = component_values(current, 4);
    let mut color = Color32::from_rgba_premultiplied(
        (components[0] * 255.0) as u8,
        (components[1] * 255.0) as u8,
        (components[2] * 255.0) as u8,
        (components[3] * 255.0) as u8,
    );

    let changed = ui
        .horizontal(|ui| {
            ui.label(&descriptor.name);
            ui.color_edit_button_srgba(&mut color).changed()
        })
        .inner;

    changed.then(|| {
        let [r, g, b, a] = color.to_array();
        Value::from(vec![
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        ])
    })
}

/// Read up to `count` scalar components out of a JSON array value, padding
/// missing or non-numeric entries with zero.
fn component_values(value: &Value, count: usize) -> Vec<f64> {
    let mut components = vec![0.0; count];
    if let Some(array) = value.as_array() {
        for (index, entry) in array.iter().take(count).enumerate() {
            match entry.as_f64() {
                Some(number) => components[index] = number,
                None => warn!("non-numeric component in value array: {entry}"),
            }
        }
    }
    components
}
