/// A viewport measurement supplied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Window/viewport width used for breakpoint resolution.
    pub width: u32,
    /// Width of the carousel container used for slide geometry.
    pub container_width: u32,
}

impl Viewport {
    pub fn new(width: u32, container_width: u32) -> Self {
        Self {
            width,
            container_width,
        }
    }
}

/// A snapshot of everything a renderer needs to draw the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub current_index: usize,
    pub slides_per_view: usize,
    pub gap: u32,
    pub slide_width: f32,
    /// Horizontal track translation in pixels.
    pub offset: f32,
    pub dot_count: usize,
    /// `None` when the current index has no indicator (after a refresh shrank the range).
    pub active_dot: Option<usize>,
}
