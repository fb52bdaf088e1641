//! Recording test doubles for the domain traits

use std::sync::{Arc, Mutex};

use kernel::id::MemberNo;

use crate::domain::entity::member::Member;
use crate::domain::repository::{MemberRepository, Transaction, UnitOfWork};
use crate::domain::service::{FileStore, PasswordHasher};
use crate::domain::value_object::upload::StoredFileName;
use crate::error::{MyPageError, MyPageResult};

/// Everything the fake store saw, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    UpdateProfile(Member),
    FindPasswordHash(MemberNo),
    UpdatePassword(Member),
    Deactivate(MemberNo),
    Commit,
    Rollback,
}

#[derive(Default)]
struct FakeStoreState {
    password_hash: Option<String>,
    rows: u64,
    fail_writes: bool,
    calls: Vec<StoreCall>,
}

/// In-memory member store that records every call
#[derive(Default)]
pub struct FakeStore {
    state: Mutex<FakeStoreState>,
}

impl FakeStore {
    /// Store whose member has `password` (hashed by [`FakeHasher`]) and whose
    /// writes report `rows` affected rows
    pub fn with_password(password: &str, rows: u64) -> Arc<Self> {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            state.password_hash = Some(FakeHasher::hash_of(password));
            state.rows = rows;
        }
        Arc::new(store)
    }

    /// Store without any stored hash (unknown or deactivated member)
    pub fn without_member() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_rows(&self, rows: u64) {
        self.state.lock().unwrap().rows = rows;
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: StoreCall) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn write_result(&self, call: StoreCall) -> MyPageResult<u64> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.fail_writes {
            return Err(MyPageError::Database(sqlx::Error::PoolClosed));
        }
        Ok(state.rows)
    }
}

impl MemberRepository for FakeStore {
    async fn update_profile(&self, member: &Member) -> MyPageResult<u64> {
        self.write_result(StoreCall::UpdateProfile(member.clone()))
    }

    async fn find_password_hash(&self, member_no: MemberNo) -> MyPageResult<Option<String>> {
        self.record(StoreCall::FindPasswordHash(member_no));
        Ok(self.state.lock().unwrap().password_hash.clone())
    }

    async fn update_password(&self, member: &Member) -> MyPageResult<u64> {
        self.write_result(StoreCall::UpdatePassword(member.clone()))
    }

    async fn deactivate(&self, member_no: MemberNo) -> MyPageResult<u64> {
        self.write_result(StoreCall::Deactivate(member_no))
    }
}

/// Transaction over a shared [`FakeStore`]
pub struct FakeTx(Arc<FakeStore>);

impl MemberRepository for FakeTx {
    async fn update_profile(&self, member: &Member) -> MyPageResult<u64> {
        self.0.update_profile(member).await
    }

    async fn find_password_hash(&self, member_no: MemberNo) -> MyPageResult<Option<String>> {
        self.0.find_password_hash(member_no).await
    }

    async fn update_password(&self, member: &Member) -> MyPageResult<u64> {
        self.0.update_password(member).await
    }

    async fn deactivate(&self, member_no: MemberNo) -> MyPageResult<u64> {
        self.0.deactivate(member_no).await
    }
}

impl Transaction for FakeTx {
    async fn commit(self) -> MyPageResult<()> {
        self.0.record(StoreCall::Commit);
        Ok(())
    }

    async fn rollback(self) -> MyPageResult<()> {
        self.0.record(StoreCall::Rollback);
        Ok(())
    }
}

/// Unit of work handing out [`FakeTx`]s over one store
pub struct FakeUnitOfWork(pub Arc<FakeStore>);

impl UnitOfWork for FakeUnitOfWork {
    type Tx = FakeTx;

    async fn begin(&self) -> MyPageResult<FakeTx> {
        Ok(FakeTx(self.0.clone()))
    }
}

/// Deterministic hasher: `hash(p) == "hashed:" + p`
#[derive(Default)]
pub struct FakeHasher {
    hashed_inputs: Mutex<Vec<String>>,
}

impl FakeHasher {
    pub fn hash_of(plaintext: &str) -> String {
        format!("hashed:{plaintext}")
    }

    /// Inputs `hash` was called with
    pub fn hashed_inputs(&self) -> Vec<String> {
        self.hashed_inputs.lock().unwrap().clone()
    }
}

impl PasswordHasher for FakeHasher {
    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        hash == Self::hash_of(plaintext)
    }

    fn hash(&self, plaintext: &str) -> MyPageResult<String> {
        self.hashed_inputs.lock().unwrap().push(plaintext.to_string());
        Ok(Self::hash_of(plaintext))
    }
}

/// File store keeping written files in memory
#[derive(Default)]
pub struct MemoryFileStore {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryFileStore {
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().unwrap().clone()
    }
}

impl FileStore for MemoryFileStore {
    async fn store(&self, file_name: &StoredFileName, bytes: &[u8]) -> MyPageResult<()> {
        self.files
            .lock()
            .unwrap()
            .push((file_name.as_str().to_string(), bytes.to_vec()));
        Ok(())
    }
}

pub fn member(no: i64) -> Member {
    let mut member = Member::new(MemberNo::new(no), format!("user{no:02}@example.com"));
    member.member_nickname = format!("user{no:02}");
    member.member_tel = "01012345678".to_string();
    member
}
