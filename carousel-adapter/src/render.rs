use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// The effectful side of a carousel: whatever draws the track and the indicators.
///
/// A DOM adapter would map these onto `style.transform`, the indicator container's children,
/// their `active` class and `document.documentElement.style.setProperty`.
pub trait Renderer {
    /// Translates the slide track horizontally (pixels, zero or negative).
    fn set_track_offset(&mut self, offset_px: f32);

    /// Replaces all indicators with `count` fresh, inactive ones.
    fn rebuild_indicators(&mut self, count: usize);

    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Publishes a global layout variable such as `--slides-per-view`.
    fn set_layout_variable(&mut self, name: &str, value: &str);
}

/// A recorded [`Renderer`] call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderCommand {
    TrackOffset(f32),
    RebuildIndicators(usize),
    IndicatorActive { index: usize, active: bool },
    LayoutVariable { name: String, value: String },
}

/// A renderer that records every call, for headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingRenderer {
    pub commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        core::mem::take(&mut self.commands)
    }
}

impl Renderer for RecordingRenderer {
    fn set_track_offset(&mut self, offset_px: f32) {
        self.commands.push(RenderCommand::TrackOffset(offset_px));
    }

    fn rebuild_indicators(&mut self, count: usize) {
        self.commands.push(RenderCommand::RebuildIndicators(count));
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.commands
            .push(RenderCommand::IndicatorActive { index, active });
    }

    fn set_layout_variable(&mut self, name: &str, value: &str) {
        self.commands.push(RenderCommand::LayoutVariable {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}
