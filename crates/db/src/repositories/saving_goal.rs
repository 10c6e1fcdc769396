//! Savings goal repository.

use chrono::NaiveDate;
use fintrack_core::saving::{NewSavingGoal, SavingGoal, SavingGoalChanges, SavingGoalService};
use fintrack_core::{RecordError, RecordResult};
use fintrack_shared::types::{SavingGoalId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    Unchanged,
};

use super::support::{db_error, now, utc};
use crate::entities::saving_goals::{self, Column};

const KIND: &str = "Saving goal";

impl From<saving_goals::Model> for SavingGoal {
    fn from(model: saving_goals::Model) -> Self {
        Self {
            id: SavingGoalId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.owner_id),
            goal_amount: model.goal_amount,
            current_amount: model.current_amount,
            deadline: model.deadline,
            status: model.status.into(),
            created_at: utc(model.created_at),
            updated_at: utc(model.updated_at),
        }
    }
}

/// Savings goal repository.
#[derive(Debug, Clone)]
pub struct SavingGoalRepository {
    db: DatabaseConnection,
}

impl SavingGoalRepository {
    /// Creates a new savings goal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated goal.
    pub async fn create(&self, goal: NewSavingGoal) -> RecordResult<SavingGoal> {
        let now = now();
        let model = saving_goals::ActiveModel {
            id: Set(SavingGoalId::new().into_inner()),
            owner_id: Set(goal.owner_id.into_inner()),
            goal_amount: Set(goal.goal_amount),
            current_amount: Set(goal.current_amount),
            deadline: Set(goal.deadline),
            status: Set(goal.status.into()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(db_error)?;

        Ok(model.into())
    }

    /// Finds one of `owner`'s goals.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` if it does not exist or belongs to someone else.
    pub async fn find(&self, owner: UserId, id: SavingGoalId) -> RecordResult<SavingGoal> {
        saving_goals::Entity::find_by_id(id.into_inner())
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_error)?
            .map(Into::into)
            .ok_or_else(|| RecordError::not_found(KIND, id))
    }

    /// Applies validated changes and re-derives the status.
    pub async fn update(
        &self,
        owner: UserId,
        id: SavingGoalId,
        changes: SavingGoalChanges,
        today: NaiveDate,
    ) -> RecordResult<SavingGoal> {
        let existing = self.find(owner, id).await?;
        let merged = SavingGoalService::apply(&existing, changes, today);

        let model = saving_goals::ActiveModel {
            id: Unchanged(id.into_inner()),
            goal_amount: Set(merged.goal_amount),
            current_amount: Set(merged.current_amount),
            deadline: Set(merged.deadline),
            status: Set(merged.status.into()),
            updated_at: Set(now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(db_error)?;

        Ok(model.into())
    }

    /// Deletes one of `owner`'s goals.
    pub async fn delete(&self, owner: UserId, id: SavingGoalId) -> RecordResult<()> {
        let result = saving_goals::Entity::delete_many()
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

    /// All of `owner`'s goals, newest first.
    pub async fn list_all(&self, owner: UserId) -> RecordResult<Vec<SavingGoal>> {
        let models = saving_goals::Entity::find()
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
