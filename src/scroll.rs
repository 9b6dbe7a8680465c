use crate::constants::*;

/// Vertical scroll position over a column of full-height slide sections.
///
/// Sections are one viewport tall and separated by a fixed gap. The viewport
/// snaps to section starts once scrolling goes idle.
#[derive(Debug, Clone)]
pub struct Viewport {
    height: f32,
    gap: f32,
    sections: usize,
    offset: f32,
    target: Option<f32>,
    idle: f32,
    visible: Vec<bool>,
}

impl Viewport {
    pub fn new(sections: usize, height: f32) -> Self {
        Self {
            height,
            gap: height * SECTION_GAP_RATIO,
            sections,
            offset: 0.0,
            target: None,
            idle: 0.0,
            visible: vec![false; sections],
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn stride(&self) -> f32 {
        self.height + self.gap
    }

    pub fn section_top(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    pub fn max_offset(&self) -> f32 {
        self.section_top(self.sections.saturating_sub(1))
    }

    /// Fraction of section `index` inside the viewport.
    pub fn visible_ratio(&self, index: usize) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let top = self.section_top(index);
        let bottom = top + self.height;
        let overlap = bottom.min(self.offset + self.height) - top.max(self.offset);
        (overlap / self.height).clamp(0.0, 1.0)
    }

    /// Free scrolling, e.g. from the mouse wheel.
    pub fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
        self.target = None;
        self.idle = 0.0;
    }

    /// Smoothly scrolls until section `index` fills the viewport.
    pub fn scroll_to_section(&mut self, index: usize) {
        if index < self.sections {
            self.target = Some(self.section_top(index));
            self.idle = 0.0;
        }
    }

    /// Section a pending smooth scroll is heading for.
    pub fn target_section(&self) -> Option<usize> {
        let last = self.sections.checked_sub(1)?;
        self.target
            .map(|top| ((top / self.stride()).round() as usize).min(last))
    }

    /// Section whose start is closest to the current offset.
    pub fn nearest_section(&self) -> usize {
        if self.sections == 0 {
            return 0;
        }
        let index = (self.offset / self.stride()).round() as usize;
        index.min(self.sections - 1)
    }

    /// Begins snapping to the nearest section start.
    pub fn settle(&mut self) {
        if self.sections > 0 {
            self.target = Some(self.section_top(self.nearest_section()));
        }
    }

    pub fn is_settled(&self) -> bool {
        self.target.is_none() && (self.offset - self.section_top(self.nearest_section())).abs() < 0.5
    }

    pub fn update(&mut self, dt: f32) {
        self.idle += dt;
        let target = self.target;
        match target {
            Some(target) => {
                let remaining = target - self.offset;
                if remaining.abs() < 0.5 {
                    self.offset = target;
                    self.target = None;
                } else {
                    self.offset += remaining * (1.0 - (-SNAP_SPEED * dt).exp());
                }
            }
            None if self.idle >= SETTLE_DELAY && !self.is_settled() => self.settle(),
            None => {}
        }
    }

    /// Sections that crossed the visibility threshold since the last call,
    /// in section order.
    pub fn intersections(&mut self) -> Vec<usize> {
        let mut entered = Vec::new();
        for index in 0..self.sections {
            let now = self.visible_ratio(index) >= VISIBILITY_THRESHOLD;
            if now && !self.visible[index] {
                entered.push(index);
            }
            self.visible[index] = now;
        }
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Navigator;

    fn run_until_settled(view: &mut Viewport) {
        for _ in 0..600 {
            view.update(FRAME_TIME);
            if view.is_settled() {
                return;
            }
        }
        panic!("viewport never settled at offset {}", view.offset());
    }

    #[test]
    fn first_report_is_the_top_section() {
        let mut view = Viewport::new(5, 1000.0);
        assert_eq!(view.intersections(), vec![0]);
        assert!(view.intersections().is_empty());
    }

    #[test]
    fn scrolling_clamps_to_the_column() {
        let mut view = Viewport::new(3, 1000.0);
        view.scroll_by(-50.0);
        assert_eq!(view.offset(), 0.0);
        view.scroll_by(1.0e6);
        assert_eq!(view.offset(), view.max_offset());
        assert_eq!(view.max_offset(), 2.0 * 1400.0);
    }

    #[test]
    fn threshold_crossing_reports_once() {
        let mut view = Viewport::new(3, 1000.0);
        view.intersections();
        // Section 1 starts at 1400; half of it is visible from offset 900.
        view.scroll_by(899.0);
        assert!(view.intersections().is_empty());
        view.scroll_by(1.0);
        assert_eq!(view.intersections(), vec![1]);
        view.scroll_by(100.0);
        assert!(view.intersections().is_empty());
    }

    #[test]
    fn idle_scroll_snaps_to_nearest_section() {
        let mut view = Viewport::new(4, 1000.0);
        view.scroll_by(1500.0);
        run_until_settled(&mut view);
        assert_eq!(view.offset(), 1400.0);
        assert_eq!(view.nearest_section(), 1);
    }

    #[test]
    fn scroll_to_section_arrives() {
        let mut view = Viewport::new(4, 1000.0);
        view.scroll_to_section(3);
        run_until_settled(&mut view);
        assert_eq!(view.offset(), view.section_top(3));
        view.scroll_to_section(9);
        assert!(view.is_settled());
    }

    #[test]
    fn target_section_tracks_pending_scroll() {
        let mut view = Viewport::new(4, 1000.0);
        assert_eq!(view.target_section(), None);
        view.scroll_to_section(2);
        assert_eq!(view.target_section(), Some(2));
        view.scroll_by(10.0);
        assert_eq!(view.target_section(), None);
        view.scroll_to_section(3);
        run_until_settled(&mut view);
        assert_eq!(view.target_section(), None);
    }

    #[test]
    fn fast_scroll_feeds_navigator_last_writer_wins() {
        let mut view = Viewport::new(6, 1000.0);
        let mut nav = Navigator::new(6);
        nav.observe(view.intersections());
        view.scroll_by(view.section_top(4));
        nav.observe(view.intersections());
        assert_eq!(nav.current(), 4);
        view.scroll_by(-view.stride());
        nav.observe(view.intersections());
        assert_eq!(nav.current(), 3);
    }
}
