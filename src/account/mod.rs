use thiserror::Error;

pub mod in_memory_account;

pub use in_memory_account::InMemoryAccount;

pub type AccountId = i32;

pub type Balance = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LockError {
    #[error("Account {id} is already locked")]
    AlreadyLocked { id: AccountId },
}

/// Operations a transfer needs from an account.
///
/// Balance changes are not validated here: an account accepts any delta,
/// including one that drives the balance negative. Sufficiency is checked
/// by the caller before anything is mutated.
pub trait Account {
    fn id(&self) -> AccountId;

    fn balance(&self) -> Balance;

    fn change_balance(&mut self, delta: Balance);

    /// Fails if the account is already locked, leaving it locked.
    fn lock(&mut self) -> Result<(), LockError>;

    /// Unlocking an unlocked account is a no-op.
    fn unlock(&mut self);

    fn lock_state(&self) -> LockState;

    fn is_locked(&self) -> bool {
        self.lock_state() == LockState::Locked
    }
}
