//! Recurring payment repository.

use fintrack_core::recurring::{
    NewRecurringPayment, RecurringPayment, RecurringPaymentChanges, RecurringPaymentService,
};
use fintrack_core::{RecordError, RecordResult};
use fintrack_shared::types::{RecurringPaymentId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    Unchanged,
};

use super::support::{db_error, now, utc};
use crate::entities::recurring_payments::{self, Column};

const KIND: &str = "Recurring payment";

impl From<recurring_payments::Model> for RecurringPayment {
    fn from(model: recurring_payments::Model) -> Self {
        Self {
            id: RecurringPaymentId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.owner_id),
            title: model.title,
            amount: model.amount,
            frequency: model.frequency.into(),
            start_date: model.start_date,
            end_date: model.end_date,
            next_payment_date: model.next_payment_date,
            created_at: utc(model.created_at),
            updated_at: utc(model.updated_at),
        }
    }
}

/// Recurring payment repository.
#[derive(Debug, Clone)]
pub struct RecurringPaymentRepository {
    db: DatabaseConnection,
}

impl RecurringPaymentRepository {
    /// Creates a new recurring payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated payment.
    pub async fn create(&self, payment: NewRecurringPayment) -> RecordResult<RecurringPayment> {
        let now = now();
        let model = recurring_payments::ActiveModel {
            id: Set(RecurringPaymentId::new().into_inner()),
            owner_id: Set(payment.owner_id.into_inner()),
            title: Set(payment.title),
            amount: Set(payment.amount),
            frequency: Set(payment.frequency.into()),
            start_date: Set(payment.start_date),
            end_date: Set(payment.end_date),
            next_payment_date: Set(payment.next_payment_date),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(db_error)?;

        Ok(model.into())
    }

    /// Finds one of `owner`'s payments.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` if it does not exist or belongs to someone else.
    pub async fn find(
        &self,
        owner: UserId,
        id: RecurringPaymentId,
    ) -> RecordResult<RecurringPayment> {
        recurring_payments::Entity::find_by_id(id.into_inner())
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_error)?
            .map(Into::into)
            .ok_or_else(|| RecordError::not_found(KIND, id))
    }

    /// Applies validated changes. The stored next payment date is left as is.
    pub async fn update(
        &self,
        owner: UserId,
        id: RecurringPaymentId,
        changes: RecurringPaymentChanges,
    ) -> RecordResult<RecurringPayment> {
        let existing = self.find(owner, id).await?;
        let merged = RecurringPaymentService::apply(&existing, changes);

        let model = recurring_payments::ActiveModel {
            id: Unchanged(id.into_inner()),
            title: Set(merged.title),
            amount: Set(merged.amount),
            frequency: Set(merged.frequency.into()),
            start_date: Set(merged.start_date),
            end_date: Set(merged.end_date),
            updated_at: Set(now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(db_error)?;

        Ok(model.into())
    }

    /// Deletes one of `owner`'s payments.
    pub async fn delete(&self, owner: UserId, id: RecurringPaymentId) -> RecordResult<()> {
        let result = recurring_payments::Entity::delete_many()
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

    /// All of `owner`'s payments, newest first.
    pub async fn list_all(&self, owner: UserId) -> RecordResult<Vec<RecurringPayment>> {
        let models = recurring_payments::Entity::find()
            .filter(Column::OwnerId.eq(owner.into_inner()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
