//! Single-page site view
//!
//! The page is one long scrollable column of sections. Section anchors are
//! recorded during layout so digit keys can jump straight to them.

pub mod page_render;

use crate::content::Section;
use crate::scroll::ScrollState;

#[derive(Debug, Default)]
pub struct PageState {
    pub scroll: ScrollState,
    anchors: Vec<(Section, u16)>,
    pending_jump: Option<Section>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll so `section` starts at the top of the viewport.
    ///
    /// Before the first layout the jump is remembered and applied once
    /// anchors are known.
    pub fn jump_to(&mut self, section: Section) {
        match self.anchor(section) {
            Some(line) => self.scroll.jump_to_line(line),
            None => self.pending_jump = Some(section),
        }
    }

    pub fn anchor(&self, section: Section) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, line)| *line)
    }

    /// Section whose anchor is at or above the top of the viewport
    pub fn current_section(&self) -> Section {
        self.anchors
            .iter()
            .rev()
            .find(|(_, line)| *line <= self.scroll.offset)
            .map(|(section, _)| *section)
            .unwrap_or(Section::Hero)
    }

    /// Record the result of laying out the page
    pub fn update_layout(
        &mut self,
        anchors: Vec<(Section, u16)>,
        line_count: u32,
        viewport_height: u16,
    ) {
        self.anchors = anchors;
        self.scroll.update_bounds(line_count, viewport_height);

        if let Some(section) = self.pending_jump.take() {
            self.jump_to(section);
        }
    }
}
