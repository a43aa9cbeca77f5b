//! Check the embedded translation catalog for missing keys, placeholder
//! mismatches and empty strings.
//!
//! Usage:
//!   cargo run --bin check-catalog
//!
//! Exits with status 1 when any language has errors. Warnings are printed
//! but do not fail the check.

use anyhow::Result;
use studio_site::i18n::{Catalog, CatalogValidator, Language};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_catalog=info".parse()?),
        )
        .init();

    for language in Language::ALL {
        info!(
            "{} ({}): {} strings",
            language.name(),
            language.code(),
            Catalog::lookup(language).len()
        );
    }

    let report = CatalogValidator::validate_catalog();

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for err in &report.errors {
        error!("{}", err);
    }

    if report.has_errors() {
        error!("Catalog check failed with {} error(s)", report.errors.len());
        std::process::exit(1);
    }

    info!("Catalog is complete");
    Ok(())
}
