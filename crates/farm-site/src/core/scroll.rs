//! Scroll-driven nav effects.
//!
//! `FrameThrottle` coalesces scroll notifications into one pass per
//! animation frame. `ScrollEffects` turns a scroll offset plus the page's
//! section geometry into the nav's `scrolled` marker and the active link.

/// Nav counts as scrolled strictly past this offset.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Extra room added to the nav height when deciding which section is current.
pub const ACTIVE_SECTION_MARGIN_PX: f64 = 40.0;

/// Coalescing throttle: at most one pending animation frame at a time.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scroll notification arrived.
    ///
    /// Returns `true` when the caller must request an animation frame;
    /// `false` when one is already pending and this notification is folded
    /// into it.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// The frame's handling pass finished; the next notification schedules
    /// a new frame.
    pub fn frame_done(&mut self) {
        self.ticking = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}

/// A page section carrying an id, with its layout top.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// Result of one handling pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFrame {
    /// `scrolled` marker on the nav bar
    pub scrolled: bool,
    /// Index into the nav link list of the single link to mark active
    pub active_link: Option<usize>,
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The last section (document order) whose adjusted top is at or above
/// `scroll_y`.
///
/// Ties resolve to the later section since each qualifying section
/// overwrites the previous pick. A section with an empty id counts as no
/// section.
pub fn current_section(
    sections: &[SectionOffset],
    scroll_y: f64,
    header_offset: f64,
) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - header_offset {
            current = (!section.id.is_empty()).then_some(section.id.as_str());
        }
    }
    current
}

/// Picks the nav link for `current`: `#<id>` when a section is current,
/// otherwise a bare `#` link. First match in document order.
pub fn active_link_index<S: AsRef<str>>(
    hrefs: &[Option<S>],
    current: Option<&str>,
) -> Option<usize> {
    hrefs.iter().position(|href| {
        let Some(href): Option<&str> = href.as_ref().map(|href| href.as_ref()) else {
            return false;
        };
        match current {
            Some(id) => href.strip_prefix('#') == Some(id),
            None => href == "#",
        }
    })
}

/// Scroll effects state owned by the scroll controller.
#[derive(Debug)]
pub struct ScrollEffects {
    scrolled_threshold: f64,
    section_margin: f64,
    passes: u64,
}

impl ScrollEffects {
    pub fn new(scrolled_threshold: f64, section_margin: f64) -> Self {
        Self {
            scrolled_threshold,
            section_margin,
            passes: 0,
        }
    }

    /// One handling pass for the current frame.
    pub fn process<S: AsRef<str>>(
        &mut self,
        scroll_y: f64,
        nav_height: f64,
        sections: &[SectionOffset],
        link_hrefs: &[Option<S>],
    ) -> ScrollFrame {
        let current = current_section(sections, scroll_y, nav_height + self.section_margin);
        let frame = ScrollFrame {
            scrolled: is_scrolled(scroll_y, self.scrolled_threshold),
            active_link: active_link_index(link_hrefs, current),
        };
        self.passes += 1;
        frame
    }

    /// Number of handling passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self::new(SCROLLED_THRESHOLD_PX, ACTIVE_SECTION_MARGIN_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("A", 0.0),
            SectionOffset::new("B", 300.0),
            SectionOffset::new("C", 800.0),
        ]
    }

    fn hrefs() -> Vec<Option<&'static str>> {
        vec![Some("#"), Some("#A"), Some("#B"), Some("#C"), None]
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        let scrolled_at = |y| is_scrolled(y, SCROLLED_THRESHOLD_PX);
        assert!(!scrolled_at(0.0));
        assert!(!scrolled_at(49.0));
        assert!(!scrolled_at(50.0));
        assert!(scrolled_at(51.0));
        assert!(scrolled_at(1000.0));
    }

    #[test]
    fn section_lookup_uses_adjusted_offsets() {
        let sections = sections();
        assert_eq!(current_section(&sections, 350.0, 0.0), Some("B"));
        assert_eq!(current_section(&sections, 900.0, 0.0), Some("C"));
        assert_eq!(current_section(&sections, 300.0, 0.0), Some("B"));
        assert_eq!(current_section(&sections, -10.0, 0.0), None);
    }

    #[test]
    fn nav_height_and_margin_shift_sections_up() {
        let sections = sections();
        // nav 60 + margin 40: B starts counting at 200
        assert_eq!(current_section(&sections, 199.0, 100.0), Some("A"));
        assert_eq!(current_section(&sections, 200.0, 100.0), Some("B"));
    }

    #[test]
    fn later_section_wins_ties() {
        let sections = vec![
            SectionOffset::new("first", 400.0),
            SectionOffset::new("second", 400.0),
        ];
        assert_eq!(current_section(&sections, 400.0, 0.0), Some("second"));
    }

    #[test]
    fn empty_section_id_counts_as_none() {
        let sections = vec![SectionOffset::new("A", 0.0), SectionOffset::new("", 100.0)];
        assert_eq!(current_section(&sections, 150.0, 0.0), None);
    }

    #[test]
    fn active_link_matches_fragment() {
        let hrefs = hrefs();
        assert_eq!(active_link_index(&hrefs, Some("B")), Some(2));
        assert_eq!(active_link_index(&hrefs, Some("C")), Some(3));
        assert_eq!(active_link_index(&hrefs, None), Some(0));
        assert_eq!(active_link_index(&hrefs, Some("missing")), None);
    }

    #[test]
    fn no_home_link_means_nothing_active_above_sections() {
        let hrefs = vec![Some("#A"), Some("https://example.com")];
        assert_eq!(active_link_index(&hrefs, None), None);
    }

    #[test]
    fn first_duplicate_link_wins() {
        let hrefs = vec![Some("#B"), Some("#B")];
        assert_eq!(active_link_index(&hrefs, Some("B")), Some(0));
    }

    #[test]
    fn process_combines_both_effects() {
        let mut effects = ScrollEffects::new(SCROLLED_THRESHOLD_PX, 0.0);
        let sections = sections();
        let hrefs = hrefs();

        let frame = effects.process(350.0, 0.0, &sections, &hrefs);
        assert_eq!(frame, ScrollFrame { scrolled: true, active_link: Some(2) });

        let frame = effects.process(900.0, 0.0, &sections, &hrefs);
        assert_eq!(frame.active_link, Some(3));

        let frame = effects.process(-10.0, 0.0, &sections, &hrefs);
        assert_eq!(frame, ScrollFrame { scrolled: false, active_link: Some(0) });
        assert_eq!(effects.passes(), 3);
    }

    #[test]
    fn notifications_within_a_frame_coalesce() {
        let mut throttle = FrameThrottle::new();
        let mut effects = ScrollEffects::default();
        let mut requested_frames = 0;

        for _ in 0..25 {
            if throttle.request() {
                requested_frames += 1;
            }
        }
        assert_eq!(requested_frames, 1);
        assert!(throttle.is_pending());

        // the frame runs
        effects.process::<&str>(120.0, 60.0, &[], &[]);
        throttle.frame_done();
        assert_eq!(effects.passes(), 1);

        assert!(throttle.request());
        assert!(!throttle.request());
    }
}
