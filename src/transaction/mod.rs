use std::fmt;

use thiserror::Error;

use crate::account::{Account, AccountId, Balance, LockError};

pub mod guard;
pub mod receipt;

use guard::LockGuard;
pub use receipt::{Receipt, ReceiptPrinter};

/// Smallest amount a single transfer may move.
pub const MIN_TRANSFER_AMOUNT: Balance = 100;

/// Fee charged until [`Transaction::set_fee`] says otherwise.
pub const DEFAULT_FEE: Balance = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Logic,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Cannot transfer to the same account {id}")]
    SameAccount { id: AccountId },
    #[error("Amount must not be negative, got {amount}")]
    NegativeAmount { amount: Balance },
    #[error("Amount {amount} is below the minimum transferable amount {minimum}")]
    BelowMinimum { amount: Balance, minimum: Balance },
    #[error(transparent)]
    Lock(#[from] LockError),
}

impl TransactionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransactionError::NegativeAmount { .. } => ErrorKind::InvalidArgument,
            TransactionError::SameAccount { .. }
            | TransactionError::BelowMinimum { .. }
            | TransactionError::Lock(_) => ErrorKind::Logic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    /// Twice the fee exceeds the amount.
    FeeTooHigh,
    /// Sender cannot cover amount plus fee.
    InsufficientFunds,
    /// A balance would leave the representable range.
    BalanceOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed(Receipt),
    Declined(DeclineReason),
}

impl TransferOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransferOutcome::Completed(_))
    }
}

pub struct Transaction {
    fee: Balance,
    receipt_printer: ReceiptPrinter,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            fee: DEFAULT_FEE,
            receipt_printer: receipt::stdout_printer(),
        }
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("fee", &self.fee)
            .finish_non_exhaustive()
    }
}

impl Transaction {
    pub fn with_fee(fee: Balance) -> Self {
        Self {
            fee,
            ..Default::default()
        }
    }

    /// Sends confirmation lines somewhere other than standard output.
    pub fn with_receipt_printer(mut self, printer: ReceiptPrinter) -> Self {
        self.receipt_printer = printer;
        self
    }

    pub fn fee(&self) -> Balance {
        self.fee
    }

    pub fn set_fee(&mut self, fee: Balance) {
        self.fee = fee;
    }

    /// Moves `amount` from `from` to `to`, debiting the fee from `from` on top.
    ///
    /// Checks run in a fixed order: same account, negative amount, minimum
    /// amount, then fee share. None of them touch locks or balances. Hard
    /// errors are returned as [`TransactionError`], expected refusals as
    /// [`TransferOutcome::Declined`].
    ///
    /// Once both accounts are locked, a debit or credit that would overflow
    /// is declined before either balance changes. Both accounts are unlocked
    /// again on every return path once locked.
    pub fn make<F, T>(
        &self,
        from: &mut F,
        to: &mut T,
        amount: Balance,
    ) -> Result<TransferOutcome, TransactionError>
    where
        F: Account + ?Sized,
        T: Account + ?Sized,
    {
        let (from_id, to_id) = (from.id(), to.id());
        if let Err(err) = Self::validate(from_id, to_id, amount) {
            tracing::debug!(from = from_id, to = to_id, amount, %err, "transfer rejected");
            return Err(err);
        }
        if self.fee.saturating_mul(2) > amount {
            tracing::debug!(
                from = from_id,
                to = to_id,
                amount,
                fee = self.fee,
                "fee too high"
            );
            return Ok(TransferOutcome::Declined(DeclineReason::FeeTooHigh));
        }

        let mut from = LockGuard::acquire(from)?;
        let balance = from.balance();
        // an overflowing debit cannot be covered by any balance
        let Some(debit) = amount
            .checked_add(self.fee)
            .filter(|debit| balance >= *debit)
        else {
            tracing::debug!(
                from = from_id,
                balance,
                amount,
                fee = self.fee,
                "insufficient funds"
            );
            return Ok(TransferOutcome::Declined(DeclineReason::InsufficientFunds));
        };
        let mut to = LockGuard::acquire(to)?;
        // both balances are checked before either one moves
        if balance.checked_sub(debit).is_none() || to.balance().checked_add(amount).is_none() {
            tracing::debug!(from = from_id, to = to_id, amount, "balance overflow");
            return Ok(TransferOutcome::Declined(DeclineReason::BalanceOverflow));
        }

        from.change_balance(-debit);
        to.change_balance(amount);
        drop(to);
        drop(from);

        let receipt = Receipt {
            from: from_id,
            to: to_id,
            amount,
        };
        tracing::info!(
            from = from_id,
            to = to_id,
            amount,
            fee = self.fee,
            "transfer completed"
        );
        (self.receipt_printer)(&receipt);
        Ok(TransferOutcome::Completed(receipt))
    }

    fn validate(
        from_id: AccountId,
        to_id: AccountId,
        amount: Balance,
    ) -> Result<(), TransactionError> {
        if from_id == to_id {
            return Err(TransactionError::SameAccount { id: from_id });
        }
        if amount < 0 {
            return Err(TransactionError::NegativeAmount { amount });
        }
        if amount < MIN_TRANSFER_AMOUNT {
            return Err(TransactionError::BelowMinimum {
                amount,
                minimum: MIN_TRANSFER_AMOUNT,
            });
        }
        Ok(())
    }
}
