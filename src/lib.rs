//! Localization and view-state core of the studio marketing site.

pub mod config;
pub mod contact;
pub mod countdown;
pub mod i18n;
pub mod navigation;
pub mod page;
pub mod preview;
pub mod selection;
pub mod showcase;
pub mod site;
pub mod storage;
pub mod testimonials;
