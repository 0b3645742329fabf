pub mod account_holder;

pub use account_holder::{AccountHolderClient, AccountHolderLookup, UpstreamError};
