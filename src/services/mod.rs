pub mod account_resolver;
pub mod block_list;
pub mod block_service;

pub use account_resolver::AccountResolver;
pub use block_list::{BlockListService, BLOCK_LIST_PAGE_SIZE};
pub use block_service::BlockService;
