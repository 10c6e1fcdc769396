//! Initial database migration.
//!
//! Creates the enum types and the four owner-scoped record tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(BUDGET_ENTRIES_SQL).await?;
        db.execute_unprepared(DEBTS_SQL).await?;
        db.execute_unprepared(RECURRING_PAYMENTS_SQL).await?;
        db.execute_unprepared(SAVING_GOALS_SQL).await?;
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
CREATE TYPE budget_entry_type AS ENUM ('income', 'expense');

CREATE TYPE debt_status AS ENUM ('Pending', 'Paid', 'Overdue');

CREATE TYPE payment_frequency AS ENUM ('daily', 'weekly', 'monthly', 'yearly');

CREATE TYPE saving_status AS ENUM ('active', 'missed', 'completed');
";

const BUDGET_ENTRIES_SQL: &str = r"
CREATE TABLE budget_entries (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL,
    entry_type budget_entry_type NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    category VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_budget_amount_positive CHECK (amount > 0),
    CONSTRAINT chk_budget_category_length CHECK (char_length(category) >= 3),
    CONSTRAINT chk_budget_category_lowercase CHECK (category = lower(category))
);

CREATE INDEX idx_budget_entries_owner_created ON budget_entries(owner_id, created_at DESC);
";

const DEBTS_SQL: &str = r"
CREATE TABLE debts (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL,
    debt_amount NUMERIC(19, 4) NOT NULL,
    interest_rate NUMERIC(9, 4) NOT NULL,
    debt_taken_date DATE NOT NULL,
    debt_paying_date DATE NOT NULL,
    amount_paid NUMERIC(19, 4) NOT NULL DEFAULT 0,
    debt_taken_from_name VARCHAR(255) NOT NULL,
    status debt_status NOT NULL DEFAULT 'Pending',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_debt_amount_non_negative CHECK (debt_amount >= 0),
    CONSTRAINT chk_debt_interest_non_negative CHECK (interest_rate >= 0),
    CONSTRAINT chk_debt_paid_non_negative CHECK (amount_paid >= 0),
    CONSTRAINT chk_debt_date_order CHECK (debt_paying_date >= debt_taken_date)
);

CREATE INDEX idx_debts_owner_created ON debts(owner_id, created_at DESC);
";

const RECURRING_PAYMENTS_SQL: &str = r"
CREATE TABLE recurring_payments (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL,
    title VARCHAR(255) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    frequency payment_frequency NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE,
    next_payment_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_recurring_amount_non_negative CHECK (amount >= 0)
);

CREATE INDEX idx_recurring_payments_owner_created ON recurring_payments(owner_id, created_at DESC);
";

const SAVING_GOALS_SQL: &str = r"
CREATE TABLE saving_goals (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL,
    goal_amount NUMERIC(19, 4) NOT NULL,
    current_amount NUMERIC(19, 4) NOT NULL,
    deadline DATE NOT NULL,
    status saving_status NOT NULL DEFAULT 'active',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_saving_goal_non_negative CHECK (goal_amount >= 0),
    CONSTRAINT chk_saving_current_non_negative CHECK (current_amount >= 0)
);

CREATE INDEX idx_saving_goals_owner_created ON saving_goals(owner_id, created_at DESC);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION touch_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_budget_entries_updated_at BEFORE UPDATE ON budget_entries
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();
CREATE TRIGGER trg_debts_updated_at BEFORE UPDATE ON debts
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();
CREATE TRIGGER trg_recurring_payments_updated_at BEFORE UPDATE ON recurring_payments
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();
CREATE TRIGGER trg_saving_goals_updated_at BEFORE UPDATE ON saving_goals
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();
";

const DROP_ALL_SQL: &str = r"
DROP TRIGGER IF EXISTS trg_saving_goals_updated_at ON saving_goals;
DROP TRIGGER IF EXISTS trg_recurring_payments_updated_at ON recurring_payments;
DROP TRIGGER IF EXISTS trg_debts_updated_at ON debts;
DROP TRIGGER IF EXISTS trg_budget_entries_updated_at ON budget_entries;
DROP FUNCTION IF EXISTS touch_updated_at();

DROP TABLE IF EXISTS saving_goals CASCADE;
DROP TABLE IF EXISTS recurring_payments CASCADE;
DROP TABLE IF EXISTS debts CASCADE;
DROP TABLE IF EXISTS budget_entries CASCADE;

DROP TYPE IF EXISTS saving_status;
DROP TYPE IF EXISTS payment_frequency;
DROP TYPE IF EXISTS debt_status;
DROP TYPE IF EXISTS budget_entry_type;
";
