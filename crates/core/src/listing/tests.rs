//! Listing tests against an in-memory source.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use fintrack_shared::types::UserId;
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::error::{RecordError, RecordResult};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Note {
    id: u32,
    owner: UserId,
    title: String,
    created: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoteSort {
    Created,
    Title,
}

struct MemoryNotes {
    notes: Vec<Note>,
    fetches: AtomicUsize,
}

impl MemoryNotes {
    fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            fetches: AtomicUsize::new(0),
        }
    }

    fn matching(&self, filter: &ListFilter<u32>) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| n.owner == filter.owner)
            .filter(|n| filter.ids.as_ref().is_none_or(|ids| ids.contains(&n.id)))
            .cloned()
            .collect()
    }
}

impl ListSource for MemoryNotes {
    type Record = Note;
    type Id = u32;
    type SortField = NoteSort;

    const DEFAULT_SORT: NoteSort = NoteSort::Created;

    fn sort_field(name: &str) -> Option<NoteSort> {
        match name {
            "createdAt" => Some(NoteSort::Created),
            "title" => Some(NoteSort::Title),
            _ => None,
        }
    }

    async fn search_ids(&self, owner: UserId, text: &str) -> RecordResult<Vec<u32>> {
        let needle = text.to_lowercase();
        Ok(self
            .notes
            .iter()
            .filter(|n| n.owner == owner && n.title.to_lowercase().contains(&needle))
            .map(|n| n.id)
            .collect())
    }

    async fn fetch_page(&self, plan: &ListPlan<NoteSort, u32>) -> RecordResult<Vec<Note>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let mut notes = self.matching(&plan.filter);
        notes.sort_by(|a, b| {
            let primary = match plan.sort.field {
                NoteSort::Created => a.created.cmp(&b.created),
                NoteSort::Title => a.title.cmp(&b.title),
            };
            let ordering = primary.then(a.id.cmp(&b.id));
            match plan.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        Ok(notes
            .into_iter()
            .skip(usize::try_from(plan.skip()).unwrap())
            .take(usize::try_from(plan.limit()).unwrap())
            .collect())
    }

    async fn count(&self, filter: &ListFilter<u32>) -> RecordResult<u64> {
        Ok(self.matching(filter).len() as u64)
    }
}

fn notes_for(owner: UserId, n: u32) -> Vec<Note> {
    (0..n)
        .map(|i| Note {
            id: i,
            owner,
            title: if i % 2 == 0 { format!("Rent {i}") } else { format!("food {i}") },
            created: i,
        })
        .collect()
}

fn query(page: u32, limit: u32) -> ListQuery {
    ListQuery {
        page,
        limit,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_second_page_of_twenty_five() {
    let owner = UserId::new();
    let source = MemoryNotes::new(notes_for(owner, 25));

    let page = ListQueryPlanner::list(&source, owner, &query(2, 10)).await.unwrap();
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_count, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 2);
    // newest first: page 2 starts at created = 14
    assert_eq!(page.items[0].created, 14);
}

#[tokio::test]
async fn test_listing_is_owner_scoped() {
    let owner = UserId::new();
    let mut notes = notes_for(owner, 3);
    notes.extend(notes_for(UserId::new(), 5).into_iter().map(|mut n| {
        n.id += 100;
        n
    }));
    let source = MemoryNotes::new(notes);

    let page = ListQueryPlanner::list(&source, owner, &ListQuery::default()).await.unwrap();
    assert_eq!(page.total_count, 3);
    assert!(page.items.iter().all(|n| n.owner == owner));
}

#[tokio::test]
async fn test_search_counts_only_matches() {
    let owner = UserId::new();
    let source = MemoryNotes::new(notes_for(owner, 25));
    let q = ListQuery {
        query: Some("  RENT ".to_string()),
        ..query(1, 5)
    };

    let page = ListQueryPlanner::list(&source, owner, &q).await.unwrap();
    assert_eq!(page.total_count, 13);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 5);
    assert!(page.items.iter().all(|n| n.title.starts_with("Rent")));
}

#[tokio::test]
async fn test_search_without_candidates_short_circuits() {
    let owner = UserId::new();
    let source = MemoryNotes::new(notes_for(owner, 5));
    let q = ListQuery {
        query: Some("nothing".to_string()),
        ..ListQuery::default()
    };

    let page = ListQueryPlanner::list(&source, owner, &q).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 0);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_blank_search_lists_everything() {
    let owner = UserId::new();
    let source = MemoryNotes::new(notes_for(owner, 4));
    let q = ListQuery {
        query: Some("   ".to_string()),
        ..ListQuery::default()
    };
    let page = ListQueryPlanner::list(&source, owner, &q).await.unwrap();
    assert_eq!(page.total_count, 4);
}

#[tokio::test]
async fn test_explicit_ascending_sort() {
    let owner = UserId::new();
    let source = MemoryNotes::new(notes_for(owner, 4));
    let q = ListQuery {
        sort_by: Some("title".to_string()),
        sort_type: Some("asc".to_string()),
        ..ListQuery::default()
    };
    let page = ListQueryPlanner::list(&source, owner, &q).await.unwrap();
    let titles: Vec<&str> = page.items.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Rent 0", "Rent 2", "food 1", "food 3"]);
}

#[tokio::test]
async fn test_unknown_sort_field_is_rejected() {
    let owner = UserId::new();
    let source = MemoryNotes::new(notes_for(owner, 4));
    let q = ListQuery {
        sort_by: Some("password".to_string()),
        sort_type: Some("asc".to_string()),
        ..ListQuery::default()
    };
    let err = ListQueryPlanner::list(&source, owner, &q).await.unwrap_err();
    assert!(matches!(err, RecordError::InvalidValue { field: "sortBy", .. }));
}

#[rstest]
#[case(Some("title"), Some("asc"), NoteSort::Title, SortDirection::Asc)]
#[case(Some("title"), Some("ASC"), NoteSort::Title, SortDirection::Asc)]
#[case(Some("title"), Some("desc"), NoteSort::Title, SortDirection::Desc)]
#[case(Some("title"), Some("sideways"), NoteSort::Title, SortDirection::Desc)]
#[case(Some("title"), None, NoteSort::Created, SortDirection::Desc)]
#[case(None, Some("asc"), NoteSort::Created, SortDirection::Desc)]
#[case(None, None, NoteSort::Created, SortDirection::Desc)]
fn test_sort_spec(
    #[case] sort_by: Option<&str>,
    #[case] sort_type: Option<&str>,
    #[case] field: NoteSort,
    #[case] direction: SortDirection,
) {
    let q = ListQuery {
        sort_by: sort_by.map(str::to_string),
        sort_type: sort_type.map(str::to_string),
        ..ListQuery::default()
    };
    let spec = ListQueryPlanner::sort_spec(&q, MemoryNotes::sort_field, NoteSort::Created).unwrap();
    assert_eq!(spec, SortSpec { field, direction });
}

#[rstest]
#[case(0, 10)]
#[case(1, 0)]
#[case(1, 101)]
fn test_page_bounds_rejected(#[case] page: u32, #[case] limit: u32) {
    let err = ListQueryPlanner::page_request(&query(page, limit)).unwrap_err();
    assert!(matches!(err, RecordError::InvalidValue { .. }));
}

#[test]
fn test_query_defaults_from_empty_json() {
    let q: ListQuery = serde_json::from_str("{}").unwrap();
    assert_eq!(q, ListQuery::default());
    assert_eq!(q.page, 1);
    assert_eq!(q.limit, 10);
}

proptest! {
    /// Walking every page returns each matching record exactly once.
    #[test]
    fn test_pages_partition_results(total in 0u32..60, limit in 1u32..=15, asc in any::<bool>()) {
        let owner = UserId::new();
        let source = MemoryNotes::new(notes_for(owner, total));
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

        let first = runtime
            .block_on(ListQueryPlanner::list(&source, owner, &ListQuery {
                sort_by: Some("title".to_string()),
                sort_type: Some(if asc { "asc" } else { "desc" }.to_string()),
                ..query(1, limit)
            }))
            .unwrap();
        prop_assert_eq!(first.total_count, u64::from(total));
        prop_assert_eq!(first.total_pages, u64::from(total).div_ceil(u64::from(limit)));

        let mut seen = HashSet::new();
        let mut collected = 0u64;
        for page in 1..=first.total_pages {
            let response = runtime
                .block_on(ListQueryPlanner::list(&source, owner, &ListQuery {
                    sort_by: Some("title".to_string()),
                    sort_type: Some(if asc { "asc" } else { "desc" }.to_string()),
                    ..query(u32::try_from(page).unwrap(), limit)
                }))
                .unwrap();
            prop_assert!(response.items.len() <= limit as usize);
            for note in response.items {
                prop_assert!(seen.insert(note.id));
                collected += 1;
            }
        }
        prop_assert_eq!(collected, u64::from(total));
    }
}
