//! Hero interactive preview: device tab and the expandable build steps.

use crate::selection::Selection;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTab {
    #[default]
    Desktop,
    Mobile,
}

impl PreviewTab {
    pub const ALL: [PreviewTab; 2] = [PreviewTab::Desktop, PreviewTab::Mobile];

    pub fn label_key(&self) -> &'static str {
        match self {
            PreviewTab::Desktop => "previewTabDesktop",
            PreviewTab::Mobile => "previewTabMobile",
        }
    }
}

/// One step of the engagement, from first call to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub title_key: &'static str,
    pub body_key: &'static str,
}

pub static BUILD_STEPS: [BuildStep; 4] = [
    BuildStep {
        title_key: "stepHearingTitle",
        body_key: "stepHearingBody",
    },
    BuildStep {
        title_key: "stepDesignTitle",
        body_key: "stepDesignBody",
    },
    BuildStep {
        title_key: "stepBuildTitle",
        body_key: "stepBuildBody",
    },
    BuildStep {
        title_key: "stepLaunchTitle",
        body_key: "stepLaunchBody",
    },
];

/// Local state of the hero preview. Starts on the desktop tab with every
/// step collapsed.
#[derive(Debug, Default)]
pub struct HeroPreview {
    tab: PreviewTab,
    expanded: Selection,
}

impl HeroPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> PreviewTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: PreviewTab) {
        self.tab = tab;
    }

    pub fn expanded(&self) -> Selection {
        self.expanded
    }

    pub fn steps(&self) -> &'static [BuildStep] {
        &BUILD_STEPS
    }

    /// Expand a step, or collapse it if it is already expanded.
    /// Only one step is expanded at a time.
    pub fn toggle_step(&mut self, index: usize) {
        if index >= BUILD_STEPS.len() {
            debug!("Ignoring toggle of unknown step {}", index);
            return;
        }

        self.expanded = if self.expanded.is_selected(index) {
            Selection::None
        } else {
            Selection::Index(index)
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = Selection::None;
    }
}
