//! Debt repository.

use chrono::NaiveDate;
use fintrack_core::debt::{Debt, DebtChanges, DebtService, DebtSortField, NewDebt};
use fintrack_core::listing::{ListFilter, ListPlan, ListSource};
use fintrack_core::{RecordError, RecordResult};
use fintrack_shared::types::{DebtId, UserId};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, Unchanged,
};
use tracing::debug;
use uuid::Uuid;

use super::support::{db_error, like_pattern, now, order, utc};
use crate::entities::debts::{self, Column};

const KIND: &str = "Debt";

impl From<debts::Model> for Debt {
    fn from(model: debts::Model) -> Self {
        Self {
            id: DebtId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.owner_id),
            debt_amount: model.debt_amount,
            interest_rate: model.interest_rate,
            debt_taken_date: model.debt_taken_date,
            debt_paying_date: model.debt_paying_date,
            amount_paid: model.amount_paid,
            debt_taken_from_name: model.debt_taken_from_name,
            status: model.status.into(),
            created_at: utc(model.created_at),
            updated_at: utc(model.updated_at),
        }
    }
}

/// Debt repository.
#[derive(Debug, Clone)]
pub struct DebtRepository {
    db: DatabaseConnection,
}

impl DebtRepository {
    /// Creates a new debt repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated debt.
    pub async fn create(&self, debt: NewDebt) -> RecordResult<Debt> {
        let now = now();
        let model = debts::ActiveModel {
            id: Set(DebtId::new().into_inner()),
            owner_id: Set(debt.owner_id.into_inner()),
            debt_amount: Set(debt.debt_amount),
            interest_rate: Set(debt.interest_rate),
            debt_taken_date: Set(debt.debt_taken_date),
            debt_paying_date: Set(debt.debt_paying_date),
            amount_paid: Set(debt.amount_paid),
            debt_taken_from_name: Set(debt.debt_taken_from_name),
            status: Set(debt.status.into()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(db_error)?;

        Ok(model.into())
    }

    /// Finds one of `owner`'s debts.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` if it does not exist or belongs to someone else.
    pub async fn find(&self, owner: UserId, id: DebtId) -> RecordResult<Debt> {
        debts::Entity::find_by_id(id.into_inner())
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_error)?
            .map(Into::into)
            .ok_or_else(|| RecordError::not_found(KIND, id))
    }

    /// Applies validated changes to one of `owner`'s debts and re-derives its status.
    pub async fn update(
        &self,
        owner: UserId,
        id: DebtId,
        changes: DebtChanges,
        today: NaiveDate,
    ) -> RecordResult<Debt> {
        let existing = self.find(owner, id).await?;
        let merged = DebtService::apply(&existing, changes, today)?;

        let model = debts::ActiveModel {
            id: Unchanged(id.into_inner()),
            debt_amount: Set(merged.debt_amount),
            interest_rate: Set(merged.interest_rate),
            debt_taken_date: Set(merged.debt_taken_date),
            debt_paying_date: Set(merged.debt_paying_date),
            amount_paid: Set(merged.amount_paid),
            debt_taken_from_name: Set(merged.debt_taken_from_name),
            status: Set(merged.status.into()),
            updated_at: Set(now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(db_error)?;

        Ok(model.into())
    }

    /// Deletes one of `owner`'s debts.
    pub async fn delete(&self, owner: UserId, id: DebtId) -> RecordResult<()> {
        let result = debts::Entity::delete_many()
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

    /// All of `owner`'s debts, newest first.
    pub async fn list_all(&self, owner: UserId) -> RecordResult<Vec<Debt>> {
        let models = debts::Entity::find()
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

fn scope(filter: &ListFilter<DebtId>) -> Condition {
    let mut condition = Condition::all().add(Column::OwnerId.eq(filter.owner.into_inner()));
    if let Some(ids) = &filter.ids {
        condition = condition.add(Column::Id.is_in(ids.iter().map(|id| id.into_inner())));
    }
    condition
}

const fn sort_column(field: DebtSortField) -> Column {
    match field {
        DebtSortField::CreatedAt => Column::CreatedAt,
        DebtSortField::UpdatedAt => Column::UpdatedAt,
        DebtSortField::DebtAmount => Column::DebtAmount,
        DebtSortField::InterestRate => Column::InterestRate,
        DebtSortField::DebtTakenDate => Column::DebtTakenDate,
        DebtSortField::DebtPayingDate => Column::DebtPayingDate,
        DebtSortField::AmountPaid => Column::AmountPaid,
        DebtSortField::DebtTakenFromName => Column::DebtTakenFromName,
        DebtSortField::Status => Column::Status,
    }
}

impl ListSource for DebtRepository {
    type Record = Debt;
    type Id = DebtId;
    type SortField = DebtSortField;

    const DEFAULT_SORT: DebtSortField = DebtSortField::CreatedAt;

    fn sort_field(name: &str) -> Option<DebtSortField> {
        DebtSortField::parse(name)
    }

    async fn search_ids(&self, owner: UserId, text: &str) -> RecordResult<Vec<DebtId>> {
        let creditor = Expr::expr(Func::lower(Expr::col(Column::DebtTakenFromName)))
            .like(like_pattern(text));

        let ids: Vec<Uuid> = debts::Entity::find()
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .filter(creditor)
            .select_only()
            .column(Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(ids.into_iter().map(DebtId::from_uuid).collect())
    }

    async fn fetch_page(&self, plan: &ListPlan<DebtSortField, DebtId>) -> RecordResult<Vec<Debt>> {
        debug!(owner = %plan.filter.owner, sort = ?plan.sort, skip = plan.skip(), limit = plan.limit(), "Listing debts");

        let direction = order(plan.sort.direction);
        let models = debts::Entity::find()
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

    async fn count(&self, filter: &ListFilter<DebtId>) -> RecordResult<u64> {
        debts::Entity::find()
            .filter(scope(filter))
            .count(&self.db)
            .await
            .map_err(db_error)
    }
}
