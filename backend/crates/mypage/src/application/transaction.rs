//! Transaction Boundary
//!
//! Every mutating request runs inside one transaction: begin, run the use
//! case, then hand the outcome to [`finish`].

use crate::domain::repository::Transaction;
use crate::error::MyPageResult;

/// Commit on `Ok`, roll back on `Err`.
///
/// A rejected password (`Ok(0)`) commits; nothing was written anyway.
/// A failed rollback is logged and the original error is returned.
pub async fn finish<X, T>(tx: X, result: MyPageResult<T>) -> MyPageResult<T>
where
    X: Transaction,
{
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
