//! Paginated, searchable, sortable record listings.

pub mod planner;
pub mod query;

#[cfg(test)]
mod tests;

pub use planner::{ListFilter, ListPlan, ListQueryPlanner, ListSource};
pub use query::{ListQuery, SortDirection, SortSpec};
