use std::ops::{Deref, DerefMut};

use crate::account::{Account, LockError};

/// Holds an account locked for as long as the guard lives.
pub struct LockGuard<'a, A: Account + ?Sized> {
    account: &'a mut A,
}

impl<'a, A: Account + ?Sized> LockGuard<'a, A> {
    pub fn acquire(account: &'a mut A) -> Result<Self, LockError> {
        account.lock()?;
        Ok(Self { account })
    }
}

impl<A: Account + ?Sized> Deref for LockGuard<'_, A> {
    type Target = A;

    fn deref(&self) -> &A {
        self.account
    }
}

impl<A: Account + ?Sized> DerefMut for LockGuard<'_, A> {
    fn deref_mut(&mut self) -> &mut A {
        self.account
    }
}

impl<A: Account + ?Sized> Drop for LockGuard<'_, A> {
    fn drop(&mut self) {
        self.account.unlock();
    }
}
