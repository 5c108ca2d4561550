mod ledger;
pub(crate) mod month;

pub use ledger::{CategoryValue, FreeEntry, Ledger, MonthRecord, CATEGORIES, OTHER_CATEGORY};
