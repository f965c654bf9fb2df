pub mod account;
pub mod api;
pub mod username;

pub use account::{AccountId, BlockOutcome, Lookup};
pub use api::{BlockListPage, BlockListResponse, BlockResponse};
pub use username::parse_users_list;
