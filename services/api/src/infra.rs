use chrono::NaiveDate;
use corporate_booking::booking::{Catalog, CatalogSummary, InMemoryBookingDesk};
use corporate_booking::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Build an in-memory desk, seeding it from `catalog` when one is given.
pub(crate) fn load_desk(
    catalog: Option<&Path>,
) -> Result<(InMemoryBookingDesk, Option<CatalogSummary>), AppError> {
    let desk = InMemoryBookingDesk::in_memory();
    let summary = match catalog {
        Some(path) => Some(Catalog::from_path(path)?.apply(&desk)?),
        None => None,
    };
    Ok((desk, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use corporate_booking::booking::CatalogError;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2024-02-29 "),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date"))
        );
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn load_desk_without_catalog_starts_empty() {
        let (desk, summary) = load_desk(None).expect("desk builds");
        assert!(summary.is_none());
        assert!(desk
            .hotels()
            .find_hotel_by(&"hotel-harbour".into())
            .expect("lookup succeeds")
            .is_none());
    }

    #[test]
    fn load_desk_surfaces_missing_catalogs() {
        let result = load_desk(Some(Path::new("/definitely/not/here/catalog.json")));
        assert!(matches!(
            result,
            Err(AppError::Catalog(CatalogError::Io(_)))
        ));
    }
}
