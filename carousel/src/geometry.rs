use alloc::format;
use alloc::string::{String, ToString};

use crate::CarouselError;

/// Track geometry for a horizontal row of equally sized slides.
///
/// Slides fill the container exactly: `slides_per_view` slides plus the gaps between them span
/// `container_width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    container_width: u32,
    gap: u32,
    slides_per_view: usize,
}

/// Result of a layout pass: the slide width and the track translation for one index.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub slide_width: f32,
    /// Horizontal translation of the track in pixels (zero or negative).
    pub offset: f32,
}

impl Layout {
    /// Formats the offset as a CSS transform value, e.g. `translateX(-213.33334px)`.
    pub fn css_translate_x(&self) -> String {
        format!("translateX({}px)", self.offset)
    }
}

impl Geometry {
    pub fn new(
        container_width: u32,
        gap: u32,
        slides_per_view: usize,
    ) -> Result<Self, CarouselError> {
        if slides_per_view == 0 {
            return Err(CarouselError::InvalidSlidesPerView(slides_per_view));
        }
        if container_width == 0 {
            return Err(CarouselError::InvalidContainerWidth(container_width));
        }
        Ok(Self {
            container_width,
            gap,
            slides_per_view,
        })
    }

    pub fn container_width(&self) -> u32 {
        self.container_width
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view
    }

    /// `(W - gap * (n - 1)) / n`.
    ///
    /// Negative when the gaps alone are wider than the container; the value is still reported
    /// so the caller can see the layout is broken.
    pub fn slide_width(&self) -> f32 {
        let n = self.slides_per_view as f32;
        let gaps = self.gap as f32 * (n - 1.0);
        (self.container_width as f32 - gaps) / n
    }

    /// `-(index * slide_width) - gap * index`.
    pub fn offset(&self, index: usize) -> f32 {
        let i = index as f32;
        -(i * self.slide_width()) - self.gap as f32 * i
    }

    pub fn layout(&self, index: usize) -> Layout {
        Layout {
            slide_width: self.slide_width(),
            offset: self.offset(index),
        }
    }
}

/// Parses a CSS pixel length such as `"27px"` or `"27"` into whole pixels.
///
/// Surrounding whitespace is ignored. Fractions, negative values and other units are rejected.
pub fn parse_px_length(s: &str) -> Result<u32, CarouselError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CarouselError::InvalidLength(s.to_string()));
    }
    digits
        .parse::<u32>()
        .map_err(|_| CarouselError::InvalidLength(s.to_string()))
}
