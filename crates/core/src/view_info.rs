/// Selected time range on the timeline, in ticks. `start_tick <= end_tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedRegion {
    start_tick: u64,
    end_tick: u64,
}

impl SelectedRegion {
    /// Build a region from two ends given in either order.
    pub fn new(a: u64, b: u64) -> Self {
        Self {
            start_tick: a.min(b),
            end_tick: a.max(b),
        }
    }

    pub fn start_tick(&self) -> u64 {
        self.start_tick
    }

    pub fn end_tick(&self) -> u64 {
        self.end_tick
    }

    pub fn duration_ticks(&self) -> u64 {
        self.end_tick - self.start_tick
    }

    /// A zero-length region, i.e. just a cursor position.
    pub fn is_point(&self) -> bool {
        self.start_tick == self.end_tick
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewInfo {
    selected_region: SelectedRegion,
}

impl ViewInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_region(&self) -> SelectedRegion {
        self.selected_region
    }

    pub fn set_selected_region(&mut self, start_tick: u64, end_tick: u64) {
        self.selected_region = SelectedRegion::new(start_tick, end_tick);
    }
}
