use alloc::string::String;

/// Errors reported by [`crate::Carousel`] and its building blocks.
///
/// Only precondition violations and rejected caller input are errors. Degenerate layouts
/// (fewer slides than fit in the viewport) are valid states.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// Slides-per-view of zero, from options or `refresh`.
    #[error("slides per view must be at least 1 (got {0})")]
    InvalidSlidesPerView(usize),

    /// Container width of zero at construction.
    #[error("container width must be at least 1px (got {0})")]
    InvalidContainerWidth(u32),

    /// Autoplay enabled with a zero interval.
    #[error("autoplay interval must be at least 1ms")]
    InvalidAutoplayInterval,

    /// A breakpoint rule mapping to zero slides per view.
    #[error("breakpoint at {min_width}px maps to {slides_per_view} slides per view")]
    InvalidBreakpoint {
        min_width: u32,
        slides_per_view: usize,
    },

    /// A length that is not a whole number of pixels.
    #[error("invalid pixel length {0:?}")]
    InvalidLength(String),

    /// `goto_slide` past the last stop position under `GotoPolicy::Reject`.
    #[error("slide index {index} is out of range ({dot_count} stop positions)")]
    IndexOutOfRange { index: usize, dot_count: usize },
}
