use super::{Account, AccountId, Balance, LockError, LockState};

#[derive(Debug, Clone)]
pub struct InMemoryAccount {
    id: AccountId,
    balance: Balance,
    lock_state: LockState,
}

impl InMemoryAccount {
    pub fn new(id: AccountId, balance: Balance) -> Self {
        Self {
            id,
            balance,
            lock_state: LockState::default(),
        }
    }
}

impl Account for InMemoryAccount {
    fn id(&self) -> AccountId {
        self.id
    }

    fn balance(&self) -> Balance {
        self.balance
    }

    fn change_balance(&mut self, delta: Balance) {
        self.balance += delta;
    }

    fn lock(&mut self) -> Result<(), LockError> {
        if self.lock_state == LockState::Locked {
            return Err(LockError::AlreadyLocked { id: self.id });
        }
        self.lock_state = LockState::Locked;
        tracing::trace!(account = self.id, "locked");
        Ok(())
    }

    fn unlock(&mut self) {
        self.lock_state = LockState::Unlocked;
        tracing::trace!(account = self.id, "unlocked");
    }

    fn lock_state(&self) -> LockState {
        self.lock_state
    }
}
