//! Turns a list query into a storage plan and runs it against a source.

use std::fmt::Debug;
use std::future::Future;

use fintrack_shared::types::{PageRequest, PageResponse, UserId};

use super::query::{ListQuery, SortDirection, SortSpec};
use crate::error::{RecordError, RecordResult};

/// Owner scope plus the optional search candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter<Id> {
    /// Only this owner's records.
    pub owner: UserId,
    /// Restrict to these IDs when a search ran.
    pub ids: Option<Vec<Id>>,
}

/// A fully resolved page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPlan<F, Id> {
    /// Records to consider.
    pub filter: ListFilter<Id>,
    /// Ordering.
    pub sort: SortSpec<F>,
    /// Page window.
    pub page: PageRequest,
}

impl<F, Id> ListPlan<F, Id> {
    /// Rows to skip.
    #[must_use]
    pub fn skip(&self) -> u64 {
        self.page.offset()
    }

    /// Rows to return.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.page.limit()
    }
}

/// Storage and text search for one listable record kind.
pub trait ListSource: Send + Sync {
    /// Listed record.
    type Record: Send;
    /// Record identifier.
    type Id: Copy + Send + Sync + Debug;
    /// Sortable column.
    type SortField: Copy + Send + Sync + Debug;

    /// Sort applied when the caller gives none.
    const DEFAULT_SORT: Self::SortField;

    /// Resolves a `sortBy` value.
    fn sort_field(name: &str) -> Option<Self::SortField>;

    /// IDs of the owner's records matching `text`, case-insensitively.
    fn search_ids(
        &self,
        owner: UserId,
        text: &str,
    ) -> impl Future<Output = RecordResult<Vec<Self::Id>>> + Send;

    /// One page of records.
    fn fetch_page(
        &self,
        plan: &ListPlan<Self::SortField, Self::Id>,
    ) -> impl Future<Output = RecordResult<Vec<Self::Record>>> + Send;

    /// Number of records matching `filter`, ignoring pagination.
    fn count(
        &self,
        filter: &ListFilter<Self::Id>,
    ) -> impl Future<Output = RecordResult<u64>> + Send;
}

/// Plans and executes listings.
pub struct ListQueryPlanner;

impl ListQueryPlanner {
    /// Largest accepted page size.
    pub const MAX_LIMIT: u32 = 100;

    /// Validates the page window.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidValue` for page 0 or a limit outside `1..=100`.
    pub fn page_request(query: &ListQuery) -> RecordResult<PageRequest> {
        if query.page == 0 {
            return Err(RecordError::invalid("page", "must be at least 1"));
        }
        if query.limit == 0 || query.limit > Self::MAX_LIMIT {
            return Err(RecordError::invalid(
                "limit",
                format!("must be between 1 and {}", Self::MAX_LIMIT),
            ));
        }
        Ok(PageRequest::new(query.page, query.limit))
    }

    /// Resolves the ordering. An explicit sort needs both `sortBy` and `sortType`;
    /// otherwise newest first.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidValue` for a field outside the whitelist.
    pub fn sort_spec<F: Copy>(
        query: &ListQuery,
        resolve: impl Fn(&str) -> Option<F>,
        default: F,
    ) -> RecordResult<SortSpec<F>> {
        match (query.sort_by.as_deref(), query.sort_type.as_deref()) {
            (Some(name), Some(direction)) => {
                let field = resolve(name.trim()).ok_or_else(|| {
                    RecordError::invalid("sortBy", format!("cannot sort by '{name}'"))
                })?;
                Ok(SortSpec {
                    field,
                    direction: SortDirection::from_param(direction),
                })
            }
            _ => Ok(SortSpec {
                field: default,
                direction: SortDirection::Desc,
            }),
        }
    }

    /// Lists `owner`'s records from `source`.
    ///
    /// A search that matches nothing returns an empty page without querying the records.
    pub async fn list<S: ListSource>(
        source: &S,
        owner: UserId,
        query: &ListQuery,
    ) -> RecordResult<PageResponse<S::Record>> {
        let page = Self::page_request(query)?;
        let sort = Self::sort_spec(query, S::sort_field, S::DEFAULT_SORT)?;

        let ids = match query.search_text() {
            Some(text) => {
                let ids = source.search_ids(owner, text).await?;
                if ids.is_empty() {
                    return Ok(PageResponse::empty(page));
                }
                Some(ids)
            }
            None => None,
        };

        let plan = ListPlan {
            filter: ListFilter { owner, ids },
            sort,
            page,
        };

        let (items, total) = tokio::try_join!(source.fetch_page(&plan), source.count(&plan.filter))?;
        Ok(PageResponse::new(items, page, total))
    }
}
