/// Returns the number of pagination indicators for a collection: `max(1, total - n + 1)`.
pub fn dot_count(total_slides: usize, slides_per_view: usize) -> usize {
    total_slides
        .saturating_sub(slides_per_view)
        .saturating_add(1)
        .max(1)
}

/// Indicator state: how many dots exist and which one (if any) is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    count: usize,
    active: Option<usize>,
}

impl Pagination {
    pub fn new(total_slides: usize, slides_per_view: usize, current_index: usize) -> Self {
        let mut p = Self {
            count: dot_count(total_slides, slides_per_view),
            active: None,
        };
        p.sync(current_index);
        p
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, dot: usize) -> bool {
        self.active == Some(dot)
    }

    /// Recomputes the dot set for a new window size and re-syncs the active dot.
    pub fn rebuild(&mut self, total_slides: usize, slides_per_view: usize, current_index: usize) {
        self.count = dot_count(total_slides, slides_per_view);
        self.sync(current_index);
    }

    /// Marks the dot matching `current_index` active; clears it when there is no such dot.
    pub fn sync(&mut self, current_index: usize) {
        self.active = (current_index < self.count).then_some(current_index);
    }
}
