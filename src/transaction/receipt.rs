use std::fmt;

use crate::account::{AccountId, Balance};

/// Confirmation record of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Balance,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} send to {} ${}", self.from, self.to, self.amount)
    }
}

/// Where confirmation lines go once a transfer completes.
pub type ReceiptPrinter = Box<dyn Fn(&Receipt)>;

pub fn stdout_printer() -> ReceiptPrinter {
    Box::new(|receipt: &Receipt| println!("{receipt}"))
}
