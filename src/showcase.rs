//! Pricing plans and the plan detail modal.
//!
//! While a plan is open the document scroll is locked. The lock is held by a
//! `ScrollGuard` stored next to the selection, so clearing the selection or
//! dropping the showcase always releases it.

use crate::selection::Selection;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// A pricing plan. Display strings are dictionary keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub feature_keys: &'static [&'static str],
    /// Starting price in yen
    pub price_yen: u32,
    /// Shown with the "most popular" badge
    pub highlighted: bool,
}

/// The plans, in display order.
pub static PLANS: [Plan; 3] = [
    Plan {
        id: "starter",
        name_key: "planStarterName",
        description_key: "planStarterDescription",
        feature_keys: &[
            "planStarterFeature1",
            "planStarterFeature2",
            "planStarterFeature3",
        ],
        price_yen: 30_000,
        highlighted: false,
    },
    Plan {
        id: "standard",
        name_key: "planStandardName",
        description_key: "planStandardDescription",
        feature_keys: &[
            "planStandardFeature1",
            "planStandardFeature2",
            "planStandardFeature3",
        ],
        price_yen: 120_000,
        highlighted: true,
    },
    Plan {
        id: "premium",
        name_key: "planPremiumName",
        description_key: "planPremiumDescription",
        feature_keys: &[
            "planPremiumFeature1",
            "planPremiumFeature2",
            "planPremiumFeature3",
        ],
        price_yen: 300_000,
        highlighted: false,
    },
];

/// Format a yen amount with thousands separators (e.g., "120,000").
pub fn format_price(yen: u32) -> String {
    let digits = yen.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ==================== Scroll Lock ====================

/// Presentation hook that suspends and restores document scrolling.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Document scroll flag shared between the page and its modals.
#[derive(Debug, Clone, Default)]
pub struct DocumentScroll {
    locked: Arc<AtomicBool>,
}

impl DocumentScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}

impl ScrollLock for DocumentScroll {
    fn lock(&self) {
        self.locked.store(true, Ordering::SeqCst);
    }

    fn unlock(&self) {
        self.locked.store(false, Ordering::SeqCst);
    }
}

/// Holds the scroll lock until dropped.
#[derive(Debug)]
pub struct ScrollGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

// ==================== Showcase ====================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("plan index {index} is out of range ({len} plans)")]
    OutOfRange { index: usize, len: usize },
}

/// Plan list plus the currently open plan detail, if any.
pub struct PlanShowcase<L: ScrollLock + Clone> {
    plans: &'static [Plan],
    selection: Selection,
    scroll: L,
    guard: Option<ScrollGuard<L>>,
}

impl<L: ScrollLock + Clone> PlanShowcase<L> {
    pub fn new(scroll: L) -> Self {
        Self::with_plans(&PLANS, scroll)
    }

    pub fn with_plans(plans: &'static [Plan], scroll: L) -> Self {
        Self {
            plans,
            selection: Selection::None,
            scroll,
            guard: None,
        }
    }

    pub fn plans(&self) -> &'static [Plan] {
        self.plans
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The plan whose detail modal is open.
    pub fn selected_plan(&self) -> Option<&'static Plan> {
        let plans = self.plans;
        self.selection.index().and_then(|i| plans.get(i))
    }

    /// Open the detail modal for a plan and lock scrolling.
    ///
    /// Selecting while another plan is open switches plans and keeps the
    /// existing lock. An out-of-range index leaves the state unchanged.
    pub fn select(&mut self, index: usize) -> Result<&'static Plan, ShowcaseError> {
        let plans = self.plans;
        let plan = plans.get(index).ok_or(ShowcaseError::OutOfRange {
            index,
            len: plans.len(),
        })?;

        self.selection = Selection::Index(index);
        if self.guard.is_none() {
            self.guard = Some(ScrollGuard::acquire(self.scroll.clone()));
        }
        debug!("Opened plan detail '{}'", plan.id);
        Ok(plan)
    }

    /// Close the detail modal and restore scrolling.
    pub fn clear(&mut self) {
        if let Some(plan) = self.selected_plan() {
            debug!("Closed plan detail '{}'", plan.id);
        }
        self.selection = Selection::None;
        self.guard = None;
    }

    pub fn is_open(&self) -> bool {
        !self.selection.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Scroll lock that counts calls
    #[derive(Clone, Default)]
    struct CountingLock {
        locks: Arc<AtomicUsize>,
        unlocks: Arc<AtomicUsize>,
    }

    impl ScrollLock for CountingLock {
        fn lock(&self) {
            self.locks.fetch_add(1, Ordering::SeqCst);
        }

        fn unlock(&self) {
            self.unlocks.fetch_add(1, Ordering::SeqCst);
        }
    }

    // ==================== Plan Data Tests ====================

    #[test]
    fn test_three_plans_in_price_order() {
        assert_eq!(PLANS.len(), 3);
        assert!(PLANS.windows(2).all(|w| w[0].price_yen < w[1].price_yen));
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
    }

    #[test]
    fn test_plan_keys_exist_in_catalog() {
        let reference = crate::i18n::Catalog::reference();
        for plan in &PLANS {
            assert!(reference.contains(plan.name_key), "{}", plan.name_key);
            assert!(reference.contains(plan.description_key));
            for key in plan.feature_keys {
                assert!(reference.contains(key), "{}", key);
            }
        }
    }

    // ==================== format_price Tests ====================

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1_000), "1,000");
        assert_eq!(format_price(30_000), "30,000");
        assert_eq!(format_price(1_234_567), "1,234,567");
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_starts_closed_and_unlocked() {
        let scroll = DocumentScroll::new();
        let showcase = PlanShowcase::new(scroll.clone());
        assert_eq!(showcase.selection(), Selection::None);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_select_then_clear() {
        let scroll = DocumentScroll::new();
        let mut showcase = PlanShowcase::new(scroll.clone());

        let plan = showcase.select(1).expect("index 1 exists");
        assert_eq!(plan.id, "standard");
        assert_eq!(showcase.selection(), Selection::Index(1));
        assert!(scroll.is_locked());

        showcase.clear();
        assert_eq!(showcase.selection(), Selection::None);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_select_out_of_range() {
        let scroll = DocumentScroll::new();
        let mut showcase = PlanShowcase::new(scroll.clone());

        let result = showcase.select(3);
        assert_eq!(result, Err(ShowcaseError::OutOfRange { index: 3, len: 3 }));
        assert!(showcase.selection().is_none());
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_switching_plans_keeps_single_lock() {
        let lock = CountingLock::default();
        let mut showcase = PlanShowcase::new(lock.clone());

        showcase.select(0).expect("select");
        showcase.select(2).expect("select");
        assert_eq!(showcase.selected_plan().map(|p| p.id), Some("premium"));
        assert_eq!(lock.locks.load(Ordering::SeqCst), 1);
        assert_eq!(lock.unlocks.load(Ordering::SeqCst), 0);

        showcase.clear();
        assert_eq!(lock.unlocks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_without_selection_does_not_unlock() {
        let lock = CountingLock::default();
        let mut showcase = PlanShowcase::new(lock.clone());

        showcase.clear();
        assert_eq!(lock.unlocks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_while_open_restores_scroll() {
        let scroll = DocumentScroll::new();
        {
            let mut showcase = PlanShowcase::new(scroll.clone());
            showcase.select(0).expect("select");
            assert!(scroll.is_locked());
        }
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_lock_active_only_while_selected() {
        let scroll = DocumentScroll::new();
        let mut showcase = PlanShowcase::new(scroll.clone());

        for step in [Some(0), None, Some(1), Some(2), None] {
            match step {
                Some(i) => {
                    showcase.select(i).expect("select");
                }
                None => showcase.clear(),
            }
            assert_eq!(scroll.is_locked(), showcase.is_open());
        }
    }
}
