//! Scroll Reveal
//!
//! One-way latches for sections that animate in once scrolled into view.

/// How far past a section's top the viewport bottom must reach
pub const REVEAL_OFFSET_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Gallery,
    Event,
}

impl Section {
    pub const TRACKED: [Section; 2] = [Section::Gallery, Section::Event];

    /// Element id of the section
    pub fn id(self) -> &'static str {
        match self {
            Section::Gallery => "gallery",
            Section::Event => "event",
        }
    }
}

pub fn crosses_threshold(scroll_bottom: f64, section_top: f64) -> bool {
    scroll_bottom > section_top + REVEAL_OFFSET_PX
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealFlags {
    gallery: bool,
    event: bool,
}

impl RevealFlags {
    pub fn is_revealed(&self, section: Section) -> bool {
        match section {
            Section::Gallery => self.gallery,
            Section::Event => self.event,
        }
    }

    fn latch(&mut self, section: Section) {
        match section {
            Section::Gallery => self.gallery = true,
            Section::Event => self.event = true,
        }
    }

    /// Latch every unrevealed section the viewport bottom has passed.
    ///
    /// `section_top` is only asked about sections still hidden; `None` means
    /// the element is not on the page and the section is skipped. Returns
    /// the sections revealed by this call.
    pub fn observe(
        &mut self,
        scroll_bottom: f64,
        mut section_top: impl FnMut(Section) -> Option<f64>,
    ) -> Vec<Section> {
        let mut revealed = Vec::new();
        for section in Section::TRACKED {
            if self.is_revealed(section) {
                continue;
            }
            let Some(top) = section_top(section) else {
                continue;
            };
            if crosses_threshold(scroll_bottom, top) {
                self.latch(section);
                revealed.push(section);
            }
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tops(section: Section) -> Option<f64> {
        match section {
            Section::Gallery => Some(1200.0),
            Section::Event => Some(2400.0),
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!crosses_threshold(1300.0, 1200.0));
        assert!(crosses_threshold(1300.5, 1200.0));
    }

    #[test]
    fn test_reveals_in_scroll_order() {
        let mut flags = RevealFlags::default();
        assert!(flags.observe(800.0, tops).is_empty());
        assert_eq!(flags.observe(1400.0, tops), vec![Section::Gallery]);
        assert!(flags.is_revealed(Section::Gallery));
        assert!(!flags.is_revealed(Section::Event));
        assert_eq!(flags.observe(2600.0, tops), vec![Section::Event]);
    }

    #[test]
    fn test_flags_never_reset() {
        let mut flags = RevealFlags::default();
        flags.observe(5000.0, tops);
        assert!(flags.observe(0.0, tops).is_empty());
        assert!(flags.is_revealed(Section::Gallery));
        assert!(flags.is_revealed(Section::Event));
    }

    #[test]
    fn test_revealed_sections_are_not_looked_up() {
        let mut flags = RevealFlags::default();
        flags.observe(1400.0, tops);
        let mut asked = Vec::new();
        flags.observe(1500.0, |section| {
            asked.push(section);
            tops(section)
        });
        assert_eq!(asked, vec![Section::Event]);
    }

    #[test]
    fn test_missing_section_is_skipped() {
        let mut flags = RevealFlags::default();
        let revealed = flags.observe(9000.0, |section| match section {
            Section::Gallery => None,
            Section::Event => Some(2400.0),
        });
        assert_eq!(revealed, vec![Section::Event]);
        assert!(!flags.is_revealed(Section::Gallery));
    }
}
