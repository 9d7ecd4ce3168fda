//! # Asset Service
//!
//! Owns the store handle, the in-memory cache and the clock, and implements every operation
//! the HTTP layer exposes: create or edit, delete, and list/search with paging.
//!
//! ## Read path
//!
//! - No query: the page is cut from the cache snapshot.
//! - With a query: the query is lowercased and sent to the store's substring pre-filter,
//!   bypassing the cache. Each candidate is kept if any searchable field passes
//!   [`is_similar`]. Candidates keep the store order (newest first); there is no
//!   ranking by similarity.
//!
//! ## Write path
//!
//! Validation happens before any store call. After a committed write the cache is rebuilt
//! from the store; a failed rebuild is logged and the stale snapshot keeps serving reads
//! until the next successful one.
//!
//! All methods block on SQLite and are meant to run on a blocking thread.

mod validation;

use crate::cache::AssetCache;
use crate::clock::Clock;
use crate::error::{AssetError, Result};
use crate::search::pagination::{paginate, PageRequest};
use crate::search::similarity::is_similar;
use crate::store::AssetStore;
use common::model::asset::{Asset, AssetAction, AssetFields};
use common::responses::{AssetPage, MutationAck};
use log::{debug, info, warn};
use std::sync::Arc;
use validation::{validate_date, validate_required, DATE_FORMAT};

pub struct AssetService {
    store: Arc<dyn AssetStore>,
    cache: AssetCache,
    clock: Arc<dyn Clock>,
    page_size: usize,
}

impl AssetService {
    pub fn new(store: Arc<dyn AssetStore>, clock: Arc<dyn Clock>, page_size: usize) -> Self {
        Self {
            store,
            cache: AssetCache::new(),
            clock,
            page_size: page_size.max(1),
        }
    }

    /// Default page size for requests that do not name one.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Cold load at start-up.
    pub fn warm_up(&self) {
        self.refresh_cache();
    }

    /// Rebuilds the cache. Failures are logged, never returned.
    fn refresh_cache(&self) {
        match self.cache.reload(self.store.as_ref()) {
            Ok(count) => info!("Asset cache loaded ({} records)", count),
            Err(e) => warn!("Asset cache reload failed, serving previous snapshot: {}", e),
        }
    }

    /// Validates and persists an entry form, then rebuilds the cache.
    ///
    /// `id` is required for [`AssetAction::Edit`] and ignored for create. An empty
    /// `created_at` defaults to today.
    pub fn create_or_update(
        &self,
        action: AssetAction,
        mut fields: AssetFields,
        id: Option<i64>,
    ) -> Result<MutationAck> {
        validate_required(&fields)?;
        validate_date("application date", &fields.application_date)?;
        validate_date("order date", &fields.order_date)?;
        validate_date("created date", &fields.created_at)?;
        if fields.created_at.is_empty() {
            fields.created_at = self.clock.today().format(DATE_FORMAT).to_string();
        }

        match action {
            AssetAction::Create => {
                let id = self.store.insert(&fields)?;
                info!("Created asset {} ({})", id, fields.serial_number);
            }
            AssetAction::Edit => {
                let id = id.ok_or_else(|| AssetError::validation("invalid asset id"))?;
                self.store.update(id, &fields)?;
                info!("Updated asset {} ({})", id, fields.serial_number);
            }
        }

        self.refresh_cache();
        Ok(MutationAck::success(Some(action)))
    }

    pub fn delete(&self, id: i64) -> Result<MutationAck> {
        self.store.delete(id)?;
        info!("Deleted asset {}", id);

        self.refresh_cache();
        Ok(MutationAck::success(None))
    }

    /// One page of assets, optionally narrowed by a fuzzy query.
    pub fn list(&self, query: Option<&str>, request: PageRequest) -> Result<AssetPage> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());

        let page = match query {
            None => {
                let snapshot = self.cache.snapshot();
                debug!(
                    "Listing {} cached assets (loaded at {:?})",
                    snapshot.len(),
                    self.cache.loaded_at()
                );
                paginate(snapshot.as_slice(), request)
            }
            Some(query) => paginate(self.search(query)?.as_slice(), request),
        };

        Ok(AssetPage {
            assets: page.items,
            total: page.total,
            page: page.page,
            pages: page.pages,
            page_size: page.page_size,
        })
    }

    fn search(&self, query: &str) -> Result<Vec<Asset>> {
        let query = query.to_lowercase();
        let candidates = self.store.substring_prefilter(&query)?;
        let candidate_count = candidates.len();

        let matches: Vec<Asset> = candidates
            .into_iter()
            .filter(|asset| {
                asset
                    .fields
                    .searchable()
                    .iter()
                    .any(|field| is_similar(field, &query))
            })
            .collect();

        info!(
            "Search '{}': {} candidate(s), {} match(es)",
            query,
            candidate_count,
            matches.len()
        );
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::SqliteAssetStore;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::TempDir;

    /// Delegates to SQLite but can be told to fail full scans, which is what a cache reload
    /// uses.
    struct FlakyStore {
        inner: SqliteAssetStore,
        fail_listing: AtomicBool,
    }

    impl AssetStore for FlakyStore {
        fn insert(&self, fields: &AssetFields) -> Result<i64> {
            self.inner.insert(fields)
        }

        fn update(&self, id: i64, fields: &AssetFields) -> Result<()> {
            self.inner.update(id, fields)
        }

        fn delete(&self, id: i64) -> Result<()> {
            self.inner.delete(id)
        }

        fn list_all_ordered_by_created_desc(&self) -> Result<Vec<Asset>> {
            if self.fail_listing.load(Ordering::SeqCst) {
                return Err(AssetError::from(rusqlite::Error::InvalidQuery));
            }
            self.inner.list_all_ordered_by_created_desc()
        }

        fn substring_prefilter(&self, needle: &str) -> Result<Vec<Asset>> {
            self.inner.substring_prefilter(needle)
        }
    }

    struct Fixture {
        _dir: TempDir,
        store: Arc<FlakyStore>,
        service: AssetService,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FlakyStore {
            inner: SqliteAssetStore::open(dir.path().join("assets.sqlite")).unwrap(),
            fail_listing: AtomicBool::new(false),
        });
        let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()));
        let service = AssetService::new(store.clone(), clock, 20);
        service.warm_up();
        Fixture {
            _dir: dir,
            store,
            service,
        }
    }

    fn record(serial: &str, name: &str) -> AssetFields {
        AssetFields {
            serial_number: serial.to_string(),
            name: name.to_string(),
            category: "computer".to_string(),
            brand: "Lenovo".to_string(),
            department: "R&D".to_string(),
            location: "Building 3".to_string(),
            supplier: "Acme".to_string(),
            recipient: "Wang Fang".to_string(),
            recipient_department: "R&D".to_string(),
            ..AssetFields::default()
        }
    }

    fn create(service: &AssetService, fields: AssetFields) {
        service
            .create_or_update(AssetAction::Create, fields, None)
            .unwrap();
    }

    fn first_page(service: &AssetService, query: Option<&str>) -> AssetPage {
        service.list(query, PageRequest::new(1, 20)).unwrap()
    }

    #[test]
    fn created_record_is_listed_with_defaulted_date() {
        let f = fixture();
        let mut fields = record("SN-1", "ThinkPad");
        fields.order_date = "2024-04-01".to_string();
        fields.remarks = "with dock".to_string();

        let ack = f
            .service
            .create_or_update(AssetAction::Create, fields.clone(), None)
            .unwrap();
        assert_eq!(ack, MutationAck::success(Some(AssetAction::Create)));

        let page = first_page(&f.service, None);
        assert_eq!(page.total, 1);
        let listed = &page.assets[0];
        assert_eq!(listed.fields.created_at, "2024-05-06");
        assert_eq!(
            listed.fields,
            AssetFields {
                created_at: "2024-05-06".to_string(),
                ..fields
            }
        );
    }

    #[test]
    fn supplied_created_date_is_kept() {
        let f = fixture();
        let mut fields = record("SN-1", "ThinkPad");
        fields.created_at = "2023-12-31".to_string();
        create(&f.service, fields);

        assert_eq!(
            first_page(&f.service, None).assets[0].fields.created_at,
            "2023-12-31"
        );
    }

    #[test]
    fn edit_is_visible_on_next_list() {
        let f = fixture();
        create(&f.service, record("SN-1", "ThinkPad"));
        let id = first_page(&f.service, None).assets[0].id;

        let mut changed = record("SN-1", "ThinkPad X1");
        changed.location = "Building 5".to_string();
        let ack = f
            .service
            .create_or_update(AssetAction::Edit, changed, Some(id))
            .unwrap();
        assert_eq!(ack.action, Some(AssetAction::Edit));

        let page = first_page(&f.service, None);
        assert_eq!(page.total, 1);
        assert_eq!(page.assets[0].id, id);
        assert_eq!(page.assets[0].fields.name, "ThinkPad X1");
        assert_eq!(page.assets[0].fields.location, "Building 5");
    }

    #[test]
    fn edit_without_id_is_rejected() {
        let f = fixture();
        let err = f
            .service
            .create_or_update(AssetAction::Edit, record("SN-1", "ThinkPad"), None)
            .unwrap_err();
        assert!(matches!(err, AssetError::Validation(_)));
    }

    #[test]
    fn edit_of_missing_id_is_a_no_op() {
        let f = fixture();
        create(&f.service, record("SN-1", "ThinkPad"));

        f.service
            .create_or_update(AssetAction::Edit, record("SN-2", "Other"), Some(404))
            .unwrap();

        let page = first_page(&f.service, None);
        assert_eq!(page.total, 1);
        assert_eq!(page.assets[0].fields.serial_number, "SN-1");
    }

    #[test]
    fn missing_department_never_reaches_the_store() {
        let f = fixture();
        let mut fields = record("SN-1", "ThinkPad");
        fields.department.clear();

        let err = f
            .service
            .create_or_update(AssetAction::Create, fields, None)
            .unwrap_err();

        assert!(matches!(err, AssetError::Validation(ref m) if m.contains("department")));
        assert!(f
            .store
            .inner
            .list_all_ordered_by_created_desc()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let f = fixture();
        let mut fields = record("SN-1", "ThinkPad");
        fields.application_date = "06/05/2024".to_string();

        let err = f
            .service
            .create_or_update(AssetAction::Create, fields, None)
            .unwrap_err();
        assert!(matches!(err, AssetError::Validation(ref m) if m.contains("application date")));
        assert!(f.service.cache.snapshot().is_empty());
    }

    #[test]
    fn delete_removes_from_listing() {
        let f = fixture();
        create(&f.service, record("SN-1", "ThinkPad"));
        create(&f.service, record("SN-2", "Monitor"));
        let victim = first_page(&f.service, None).assets[0].id;

        let ack = f.service.delete(victim).unwrap();
        assert_eq!(ack, MutationAck::success(None));

        let page = first_page(&f.service, None);
        assert_eq!(page.total, 1);
        assert!(page.assets.iter().all(|a| a.id != victim));
    }

    #[test]
    fn failed_reload_keeps_serving_previous_snapshot() {
        let f = fixture();
        create(&f.service, record("SN-1", "ThinkPad"));

        f.store.fail_listing.store(true, Ordering::SeqCst);
        let ack = f
            .service
            .create_or_update(AssetAction::Create, record("SN-2", "Monitor"), None);
        assert!(ack.is_ok());

        let stale = first_page(&f.service, None);
        assert_eq!(stale.total, 1);
        assert_eq!(stale.assets[0].fields.serial_number, "SN-1");

        f.store.fail_listing.store(false, Ordering::SeqCst);
        create(&f.service, record("SN-3", "Dock"));
        assert_eq!(first_page(&f.service, None).total, 3);
    }

    #[test]
    fn search_keeps_only_similar_candidates() {
        let f = fixture();
        create(&f.service, record("A-1", "server"));
        create(&f.service, record("A-2", "serverx"));
        create(&f.service, record("A-3", "Desk"));

        // "serv" is a substring of both servers but too far from either
        let page = first_page(&f.service, Some("serv"));
        assert_eq!(page.total, 0);

        let page = first_page(&f.service, Some("SERVER"));
        let names: Vec<&str> = page.assets.iter().map(|a| a.fields.name.as_str()).collect();
        assert_eq!(names, vec!["serverx", "server"]);
    }

    #[test]
    fn search_matches_any_searchable_field() {
        let f = fixture();
        let mut fields = record("A-1", "Desk");
        fields.recipient = "Chen Jing".to_string();
        create(&f.service, fields);
        create(&f.service, record("A-2", "Chair"));

        let page = first_page(&f.service, Some("chen jin"));
        assert_eq!(page.total, 1);
        assert_eq!(page.assets[0].fields.name, "Desk");
    }

    #[test]
    fn search_ignores_case_of_non_ascii_letters() {
        let f = fixture();
        create(&f.service, record("E-1", "ÉCRAN"));
        create(&f.service, record("E-2", "Clavier"));

        for query in ["ÉCRAN", "écran"] {
            let page = first_page(&f.service, Some(query));
            assert_eq!(page.total, 1, "{query}");
            assert_eq!(page.assets[0].fields.serial_number, "E-1");
        }
    }

    #[test]
    fn search_reads_the_store_not_the_cache() {
        let f = fixture();
        f.store.inner.insert(&record("SRV-1", "Storage")).unwrap();

        assert_eq!(first_page(&f.service, None).total, 0);
        assert_eq!(first_page(&f.service, Some("storage")).total, 1);
    }

    #[test]
    fn blank_query_lists_everything() {
        let f = fixture();
        create(&f.service, record("A-1", "Desk"));
        create(&f.service, record("A-2", "Chair"));

        assert_eq!(first_page(&f.service, Some("   ")).total, 2);
    }

    #[test]
    fn pages_over_forty_five_records() {
        let f = fixture();
        for n in 1..=45 {
            f.store
                .inner
                .insert(&AssetFields {
                    created_at: "2024-01-01".to_string(),
                    ..record(&format!("SN-{n:02}"), &format!("Asset {n}"))
                })
                .unwrap();
        }
        f.service.warm_up();

        let third = f.service.list(None, PageRequest::new(3, 20)).unwrap();
        assert_eq!(third.pages, 3);
        assert_eq!(third.total, 45);
        assert_eq!(third.page_size, 20);
        let serials: Vec<&str> = third
            .assets
            .iter()
            .map(|a| a.fields.serial_number.as_str())
            .collect();
        assert_eq!(serials, vec!["SN-05", "SN-04", "SN-03", "SN-02", "SN-01"]);

        let fourth = f.service.list(None, PageRequest::new(4, 20)).unwrap();
        assert!(fourth.assets.is_empty());
        assert_eq!(fourth.total, 45);
        assert_eq!(fourth.page, 4);
    }
}
