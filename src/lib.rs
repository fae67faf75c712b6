/// Account records: identifier, signed balance and a lock flag.
/// The [`account::Account`] trait is the seam transfers are written against,
/// so a test double can stand in for the in-memory account.
pub mod account;

/// Fee-charging transfer between two accounts.
/// Validates the request, locks both sides, moves the money and
/// releases the locks on every exit path.
pub mod transaction;
