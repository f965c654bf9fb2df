pub mod block_flow;
pub mod user_ctx;

pub use block_flow::BlockFlow;
pub use user_ctx::UserCtx;
