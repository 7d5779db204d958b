//! Paginated, sortable list controller.
//!
//! The controller owns the current [`PageRequest`]. Every page or sort
//! event merges a [`PageRequestDelta`] into it and issues exactly one
//! [`FetchTask`]. Tasks may finish in any order; each carries the sequence
//! number it was issued with, and [`ListController::apply`] only accepts
//! the outcome of the most recently issued task. Older outcomes are
//! discarded without touching the displayed page.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::error::Error;
use crate::filter::filter_records;
use crate::page::{Page, PageRequest, PageRequestDelta, Sort, SortDirection};
use crate::record::Resource;
use crate::traits::CatalogClient;
use crate::Result;

/// Load state of the list.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// A fetch is in flight. `previous` is the last resolved page, if any.
    Pending { previous: Option<Page<T>> },
    /// The latest fetch resolved to this page.
    Ready(Page<T>),
    /// The latest fetch failed. The last resolved page stays displayed.
    Failed {
        previous: Option<Page<T>>,
        reason: String,
    },
}

impl<T> PageState<T> {
    fn into_last_page(self) -> Option<Page<T>> {
        match self {
            PageState::Ready(page) => Some(page),
            PageState::Pending { previous } | PageState::Failed { previous, .. } => previous,
        }
    }
}

/// Result of delivering a fetch outcome to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The outcome belonged to the latest request and was applied.
    Current,
    /// A newer request had been issued; the outcome was dropped.
    Stale,
}

/// One issued page fetch, not yet run.
#[must_use = "a fetch task does nothing until it is run"]
pub struct FetchTask<R, C> {
    client: Arc<C>,
    sequence: u64,
    request: PageRequest,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource, C: CatalogClient> FetchTask<R, C> {
    /// Sequence number this task was issued with.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The request as it is sent to the backend.
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Perform the fetch.
    #[instrument(skip(self), fields(kind = %R::KIND, sequence = self.sequence))]
    pub async fn run(self) -> FetchOutcome<R> {
        debug!(
            page_index = self.request.page_index(),
            page_size = self.request.page_size(),
            "Fetching page"
        );
        let result = self.client.fetch_page::<R>(&self.request).await;
        FetchOutcome {
            sequence: self.sequence,
            result,
        }
    }
}

impl<R, C> std::fmt::Debug for FetchTask<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchTask")
            .field("sequence", &self.sequence)
            .field("request", &self.request)
            .finish()
    }
}

/// The settled result of a [`FetchTask`].
#[derive(Debug)]
pub struct FetchOutcome<R> {
    sequence: u64,
    result: Result<Page<R>>,
}

impl<R> FetchOutcome<R> {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Keeps a local table view consistent with the paginated backend query.
pub struct ListController<R, C> {
    client: Arc<C>,
    request: PageRequest,
    issued: u64,
    state: PageState<R>,
}

impl<R: Resource, C: CatalogClient> ListController<R, C> {
    /// Create a controller with the default request. No fetch is issued
    /// until the first event.
    pub fn new(client: Arc<C>) -> Self {
        Self::with_request(client, PageRequest::default())
    }

    pub fn with_request(client: Arc<C>, request: PageRequest) -> Self {
        Self {
            client,
            request,
            issued: 0,
            state: PageState::Pending { previous: None },
        }
    }

    /// The current request, with display column names.
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn state(&self) -> &PageState<R> {
        &self.state
    }

    /// The latest resolved page, or `None` while a fetch is pending.
    ///
    /// After a failed fetch this is still the last resolved page.
    pub fn current_page(&self) -> Option<&Page<R>> {
        match &self.state {
            PageState::Ready(page) => Some(page),
            PageState::Failed { previous, .. } => previous.as_ref(),
            PageState::Pending { .. } => None,
        }
    }

    /// The page to render: the latest resolved page, even while pending.
    pub fn displayed_page(&self) -> Option<&Page<R>> {
        match &self.state {
            PageState::Ready(page) => Some(page),
            PageState::Pending { previous } | PageState::Failed { previous, .. } => {
                previous.as_ref()
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, PageState::Pending { .. })
    }

    /// Reason of the latest failed fetch, if the latest fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            PageState::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Merge a page or sort event into the request and issue its fetch.
    ///
    /// Any fetch still in flight is superseded.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged request is invalid; the current
    /// request and state are left unchanged and nothing is issued.
    pub fn set_page_request(&mut self, delta: PageRequestDelta) -> Result<FetchTask<R, C>> {
        let request = self.request.merge(&delta)?;
        self.request = request;
        self.issued += 1;

        let previous = std::mem::replace(&mut self.state, PageState::Pending { previous: None })
            .into_last_page();
        self.state = PageState::Pending { previous };

        let wire = self.wire_request();
        debug!(
            kind = %R::KIND,
            sequence = self.issued,
            page_index = wire.page_index(),
            sort = ?wire.sort(),
            "Issued page request"
        );

        Ok(FetchTask {
            client: Arc::clone(&self.client),
            sequence: self.issued,
            request: wire,
            _record: PhantomData,
        })
    }

    /// Deliver a settled fetch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the current fetch failed or produced
    /// an invalid page. The previously resolved page is kept.
    pub fn apply(&mut self, outcome: FetchOutcome<R>) -> Result<Applied> {
        if outcome.sequence != self.issued {
            debug!(
                kind = %R::KIND,
                sequence = outcome.sequence,
                latest = self.issued,
                "Discarding superseded page response"
            );
            return Ok(Applied::Stale);
        }

        let previous = std::mem::replace(&mut self.state, PageState::Pending { previous: None })
            .into_last_page();

        match outcome.result.and_then(|page| page.validate().map(|()| page)) {
            Ok(page) => {
                debug!(
                    kind = %R::KIND,
                    items = page.content.len(),
                    total = page.total_elements,
                    "Page loaded"
                );
                self.state = PageState::Ready(page);
                Ok(Applied::Current)
            }
            Err(err) => {
                warn!(kind = %R::KIND, error = %err, "Page fetch failed");
                self.state = PageState::Failed {
                    previous,
                    reason: err.to_string(),
                };
                Err(Error::fetch(err))
            }
        }
    }

    /// Issue, run and apply a fetch in one step.
    pub async fn load(&mut self, delta: PageRequestDelta) -> Result<Applied> {
        let task = self.set_page_request(delta)?;
        let outcome = task.run().await;
        self.apply(outcome)
    }

    /// Re-issue the current request.
    pub fn refresh(&mut self) -> Result<FetchTask<R, C>> {
        self.set_page_request(PageRequestDelta::none())
    }

    pub fn go_to_page(&mut self, page_index: u32) -> Result<FetchTask<R, C>> {
        self.set_page_request(PageRequestDelta::page(page_index))
    }

    pub fn next_page(&mut self) -> Result<FetchTask<R, C>> {
        let next = self.request.page_index().saturating_add(1);
        self.go_to_page(next)
    }

    /// Move back one page; `None` when already on the first page.
    pub fn previous_page(&mut self) -> Option<Result<FetchTask<R, C>>> {
        let index = self.request.page_index().checked_sub(1)?;
        Some(self.go_to_page(index))
    }

    pub fn set_sort(
        &mut self,
        column: impl Into<String>,
        direction: SortDirection,
    ) -> Result<FetchTask<R, C>> {
        self.set_page_request(PageRequestDelta::sort(Sort::new(column, direction)))
    }

    pub fn clear_sort(&mut self) -> Result<FetchTask<R, C>> {
        self.set_page_request(PageRequestDelta::clear_sort())
    }

    /// Total number of pages according to the displayed page.
    pub fn page_count(&self) -> Option<u64> {
        self.displayed_page().map(Page::page_count)
    }

    /// Records of the current page matching `term`.
    ///
    /// Neither refetches nor changes the current page. Empty while a fetch
    /// is pending.
    pub fn apply_local_filter(&self, term: &str) -> Vec<&R> {
        match self.current_page() {
            Some(page) => filter_records(&page.content, term),
            None => Vec::new(),
        }
    }

    fn wire_request(&self) -> PageRequest {
        let sort = self
            .request
            .sort()
            .map(|sort| Sort::new(R::server_sort_path(&sort.column), sort.direction));
        self.request.clone().with_sort(sort)
    }
}

impl<R, C> std::fmt::Debug for ListController<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("request", &self.request)
            .field("issued", &self.issued)
            .finish_non_exhaustive()
    }
}
