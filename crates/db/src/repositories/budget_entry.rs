//! Budget entry repository.

use fintrack_core::budget::{
    BudgetEntry, BudgetEntryChanges, BudgetEntryService, BudgetEntryType as CoreEntryType,
    BudgetSortField, NewBudgetEntry,
};
use fintrack_core::listing::{ListFilter, ListPlan, ListSource};
use fintrack_core::{RecordError, RecordResult};
use fintrack_shared::types::{BudgetEntryId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, Unchanged,
};
use tracing::debug;
use uuid::Uuid;

use super::support::{db_error, like_pattern, now, order, utc};
use crate::entities::budget_entries::{self, Column};
use crate::entities::sea_orm_active_enums::BudgetEntryType;

const KIND: &str = "Budget entry";

impl From<budget_entries::Model> for BudgetEntry {
    fn from(model: budget_entries::Model) -> Self {
        Self {
            id: BudgetEntryId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.owner_id),
            entry_type: model.entry_type.into(),
            amount: model.amount,
            category: model.category,
            created_at: utc(model.created_at),
            updated_at: utc(model.updated_at),
        }
    }
}

/// Budget entry repository.
#[derive(Debug, Clone)]
pub struct BudgetEntryRepository {
    db: DatabaseConnection,
}

impl BudgetEntryRepository {
    /// Creates a new budget entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated entry.
    pub async fn create(&self, entry: NewBudgetEntry) -> RecordResult<BudgetEntry> {
        let now = now();
        let model = budget_entries::ActiveModel {
            id: Set(BudgetEntryId::new().into_inner()),
            owner_id: Set(entry.owner_id.into_inner()),
            entry_type: Set(entry.entry_type.into()),
            amount: Set(entry.amount),
            category: Set(entry.category),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(db_error)?;

        Ok(model.into())
    }

    /// Finds one of `owner`'s entries.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` if it does not exist or belongs to someone else.
    pub async fn find(&self, owner: UserId, id: BudgetEntryId) -> RecordResult<BudgetEntry> {
        budget_entries::Entity::find_by_id(id.into_inner())
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_error)?
            .map(Into::into)
            .ok_or_else(|| RecordError::not_found(KIND, id))
    }

    /// Applies validated changes to one of `owner`'s entries.
    pub async fn update(
        &self,
        owner: UserId,
        id: BudgetEntryId,
        changes: BudgetEntryChanges,
    ) -> RecordResult<BudgetEntry> {
        let existing = self.find(owner, id).await?;
        let merged = BudgetEntryService::apply(&existing, changes);

        let model = budget_entries::ActiveModel {
            id: Unchanged(id.into_inner()),
            entry_type: Set(merged.entry_type.into()),
            amount: Set(merged.amount),
            category: Set(merged.category),
            updated_at: Set(now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(db_error)?;

        Ok(model.into())
    }

    /// Deletes one of `owner`'s entries.
    pub async fn delete(&self, owner: UserId, id: BudgetEntryId) -> RecordResult<()> {
        let result = budget_entries::Entity::delete_many()
            .filter(Column::Id.eq(id.into_inner()))
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(RecordError::not_found(KIND, id));
        }
        Ok(())
    }

    /// All of `owner`'s entries, newest first.
    pub async fn list_all(&self, owner: UserId) -> RecordResult<Vec<BudgetEntry>> {
        let models = budget_entries::Entity::find()
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

fn scope(filter: &ListFilter<BudgetEntryId>) -> Condition {
    let mut condition = Condition::all().add(Column::OwnerId.eq(filter.owner.into_inner()));
    if let Some(ids) = &filter.ids {
        condition = condition.add(Column::Id.is_in(ids.iter().map(|id| id.into_inner())));
    }
    condition
}

const fn sort_column(field: BudgetSortField) -> Column {
    match field {
        BudgetSortField::CreatedAt => Column::CreatedAt,
        BudgetSortField::UpdatedAt => Column::UpdatedAt,
        BudgetSortField::EntryType => Column::EntryType,
        BudgetSortField::Amount => Column::Amount,
        BudgetSortField::Category => Column::Category,
    }
}

impl ListSource for BudgetEntryRepository {
    type Record = BudgetEntry;
    type Id = BudgetEntryId;
    type SortField = BudgetSortField;

    const DEFAULT_SORT: BudgetSortField = BudgetSortField::CreatedAt;

    fn sort_field(name: &str) -> Option<BudgetSortField> {
        BudgetSortField::parse(name)
    }

    // Matches the category substring or any type whose name contains the text.
    async fn search_ids(&self, owner: UserId, text: &str) -> RecordResult<Vec<BudgetEntryId>> {
        let needle = text.to_lowercase();
        let types: Vec<BudgetEntryType> = CoreEntryType::ALL
            .into_iter()
            .filter(|t| t.as_str().contains(needle.as_str()))
            .map(Into::into)
            .collect();

        let mut matches = Condition::any().add(Column::Category.like(like_pattern(&needle)));
        if !types.is_empty() {
            matches = matches.add(Column::EntryType.is_in(types));
        }

        let ids: Vec<Uuid> = budget_entries::Entity::find()
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .filter(matches)
            .select_only()
            .column(Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(ids.into_iter().map(BudgetEntryId::from_uuid).collect())
    }

    async fn fetch_page(
        &self,
        plan: &ListPlan<BudgetSortField, BudgetEntryId>,
    ) -> RecordResult<Vec<BudgetEntry>> {
        debug!(owner = %plan.filter.owner, sort = ?plan.sort, skip = plan.skip(), limit = plan.limit(), "Listing budget entries");

        let direction = order(plan.sort.direction);
        let models = budget_entries::Entity::find()
            .filter(scope(&plan.filter))
            .order_by(sort_column(plan.sort.field), direction.clone())
            .order_by(Column::Id, direction)
            .offset(plan.skip())
            .limit(plan.limit())
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: &ListFilter<BudgetEntryId>) -> RecordResult<u64> {
        budget_entries::Entity::find()
            .filter(scope(filter))
            .count(&self.db)
            .await
            .map_err(db_error)
    }
}
