//! PostgreSQL Repository Implementation
//!
//! Every repository call runs on an explicit transaction obtained from
//! [`PgUnitOfWork::begin`].

use kernel::id::MemberNo;
use sqlx::{PgPool, Postgres};
use tokio::sync::Mutex;

use crate::domain::entity::member::Member;
use crate::domain::repository::{MemberRepository, Transaction, UnitOfWork};
use crate::error::{MyPageError, MyPageResult};

/// Starts PostgreSQL transactions
#[derive(Clone)]
pub struct PgUnitOfWork {
    pool: PgPool,
}

impl PgUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UnitOfWork for PgUnitOfWork {
    type Tx = PgMemberTx;

    async fn begin(&self) -> MyPageResult<PgMemberTx> {
        let tx = self.pool.begin().await?;
        Ok(PgMemberTx { tx: Mutex::new(tx) })
    }
}

/// Member record store bound to one open transaction
///
/// Dropping it without `commit` rolls back.
pub struct PgMemberTx {
    tx: Mutex<sqlx::Transaction<'static, Postgres>>,
}

impl Transaction for PgMemberTx {
    async fn commit(self) -> MyPageResult<()> {
        self.tx.into_inner().commit().await?;
        Ok(())
    }

    async fn rollback(self) -> MyPageResult<()> {
        self.tx.into_inner().rollback().await?;
        Ok(())
    }
}

// ============================================================================
// Member Repository Implementation
// ============================================================================

impl MemberRepository for PgMemberTx {
    async fn update_profile(&self, member: &Member) -> MyPageResult<u64> {
        let mut tx = self.tx.lock().await;

        let rows = sqlx::query(
            r#"
            UPDATE member SET
                member_nickname = $2,
                member_tel = $3,
                member_address = $4
            WHERE member_no = $1
            "#,
        )
        .bind(member.member_no.get())
        .bind(&member.member_nickname)
        .bind(&member.member_tel)
        .bind(member.member_address.as_deref())
        .execute(&mut **tx)
        .await?
        .rows_affected();

        Ok(rows)
    }

    async fn find_password_hash(&self, member_no: MemberNo) -> MyPageResult<Option<String>> {
        let mut tx = self.tx.lock().await;

        let hash = sqlx::query_scalar::<_, String>(
            r#"
            SELECT member_pw
            FROM member
            WHERE member_no = $1
              AND member_del_fl = 'N'
            "#,
        )
        .bind(member_no.get())
        .fetch_optional(&mut **tx)
        .await?;

        Ok(hash)
    }

    async fn update_password(&self, member: &Member) -> MyPageResult<u64> {
        let hash = member
            .member_pw
            .as_deref()
            .ok_or_else(|| MyPageError::Internal("New password hash not set".to_string()))?;

        let mut tx = self.tx.lock().await;

        let rows = sqlx::query(
            r#"
            UPDATE member SET
                member_pw = $2
            WHERE member_no = $1
            "#,
        )
        .bind(member.member_no.get())
        .bind(hash)
        .execute(&mut **tx)
        .await?
        .rows_affected();

        Ok(rows)
    }

    async fn deactivate(&self, member_no: MemberNo) -> MyPageResult<u64> {
        let mut tx = self.tx.lock().await;

        let rows = sqlx::query(
            r#"
            UPDATE member SET
                member_del_fl = 'Y'
            WHERE member_no = $1
              AND member_del_fl = 'N'
            "#,
        )
        .bind(member_no.get())
        .execute(&mut **tx)
        .await?
        .rows_affected();

        Ok(rows)
    }
}
