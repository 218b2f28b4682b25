//! Admin list views: paginated fetch state, page-scoped text filtering,
//! confirmed deletes with optimistic local removal, and a generation guard
//! against stale responses.
//!
//! The text filter deliberately matches only the rows already fetched for
//! the current page, not the whole backend collection. That mirrors the
//! admin UI contract; a collection-wide search would be a backend query.

use tracing::debug;

use beacon_api_types::{BlogPost, EnrollmentRecord, VolunteerApplicationRecord};

use crate::client::{AdminSession, ApiClient};
use crate::error::ApiError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A record that can appear in an admin list: it has an identity and a
/// fixed set of fields the page filter matches against.
pub trait ListRow {
    fn row_id(&self) -> i64;
    /// Case-insensitive substring match; `needle` arrives lowercased.
    fn matches(&self, needle: &str) -> bool;
}

impl ListRow for EnrollmentRecord {
    fn row_id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        self.full_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.skill_interest.as_str().contains(needle)
    }
}

impl ListRow for VolunteerApplicationRecord {
    fn row_id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        self.full_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.area_of_expertise.as_str().contains(needle)
    }
}

impl ListRow for BlogPost {
    fn row_id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Outcome of a confirmed delete flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The confirmation prompt was declined; nothing was sent or changed.
    Canceled,
    /// Backend confirmed; the row was removed from local state.
    Deleted,
    Failed { message: String },
}

/// Pagination and filter state for one admin collection.
#[derive(Debug)]
pub struct ListController<T> {
    rows: Vec<T>,
    total: u64,
    page: u32,
    page_size: u32,
    search: String,
    loading: bool,
    generation: u64,
}

impl<T: ListRow> Default for ListController<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T: ListRow> ListController<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            loading: false,
            generation: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `ceil(total / page_size)`, never less than 1 so an empty collection
    /// still renders as page 1 of 1.
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size);
        let pages = self.total.div_ceil(size);
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }

    /// "Previous" is disabled on page 1.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// "Next" is disabled on the last page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn prev_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        (self.page + 1).min(self.total_pages())
    }

    /// Stamp a new fetch. Any response applied with an older stamp is
    /// discarded, so a late response from a superseded fetch cannot
    /// overwrite newer state.
    pub fn begin_fetch(&mut self, page: u32) -> u64 {
        self.page = page.max(1);
        self.loading = true;
        self.generation += 1;
        self.generation
    }

    /// Apply a fetched page. Returns false (and changes nothing) when the
    /// response is stale.
    pub fn apply_page(&mut self, generation: u64, rows: Vec<T>, total: u64) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "discarding stale page");
            return false;
        }
        self.rows = rows;
        self.total = total;
        self.loading = false;
        true
    }

    pub fn fail_fetch(&mut self, generation: u64) {
        if generation == self.generation {
            self.loading = false;
        }
    }

    /// Set the page filter. Scoped to the fetched page only.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Rows of the current page that match the filter, in fetch order.
    pub fn visible(&self) -> Vec<&T> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows.iter().filter(|row| row.matches(&needle)).collect()
    }

    /// Optimistically drop a row by identity after a confirmed backend
    /// delete. No re-fetch; the total is adjusted locally.
    pub fn remove_by_id(&mut self, id: i64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.row_id() != id);
        let removed = self.rows.len() != before;
        if removed {
            self.total = self.total.saturating_sub(1);
        }
        removed
    }
}

impl ListController<EnrollmentRecord> {
    /// Fetch one admin page of enrollments.
    pub async fn fetch_page(
        &mut self,
        api: &ApiClient,
        session: &AdminSession,
        page: u32,
    ) -> Result<(), ApiError> {
        let generation = self.begin_fetch(page);
        match api.list_enrollments(session, self.page, self.page_size).await {
            Ok(result) => {
                self.apply_page(generation, result.enrollments, result.total);
                Ok(())
            }
            Err(err) => {
                self.fail_fetch(generation);
                Err(err)
            }
        }
    }
}

impl ListController<VolunteerApplicationRecord> {
    /// Fetch one admin page of volunteer applications.
    pub async fn fetch_page(
        &mut self,
        api: &ApiClient,
        session: &AdminSession,
        page: u32,
    ) -> Result<(), ApiError> {
        let generation = self.begin_fetch(page);
        match api
            .list_volunteer_applications(session, self.page, self.page_size)
            .await
        {
            Ok(result) => {
                self.apply_page(generation, result.volunteers, result.total);
                Ok(())
            }
            Err(err) => {
                self.fail_fetch(generation);
                Err(err)
            }
        }
    }
}

impl ListController<BlogPost> {
    /// Fetch one admin page of posts, drafts included.
    pub async fn fetch_page(
        &mut self,
        api: &ApiClient,
        session: &AdminSession,
        page: u32,
    ) -> Result<(), ApiError> {
        let generation = self.begin_fetch(page);
        match api
            .list_admin_blog_posts(session, self.page, self.page_size)
            .await
        {
            Ok(result) => {
                self.apply_page(generation, result.posts, result.total);
                Ok(())
            }
            Err(err) => {
                self.fail_fetch(generation);
                Err(err)
            }
        }
    }

    /// Delete a post after user confirmation. When `confirm` returns false
    /// nothing is sent and local state is untouched; on backend success the
    /// matching row is removed locally without a re-fetch.
    pub async fn delete_post<F>(
        &mut self,
        api: &ApiClient,
        session: &AdminSession,
        id: i64,
        confirm: F,
    ) -> DeleteOutcome
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return DeleteOutcome::Canceled;
        }
        match api.delete_blog_post(session, id).await {
            Ok(()) => {
                self.remove_by_id(id);
                DeleteOutcome::Deleted
            }
            Err(err) => DeleteOutcome::Failed {
                message: err.user_message(),
            },
        }
    }
}
