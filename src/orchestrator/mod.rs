//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 按配置建立请求通道（HTTP 或浏览器标签页）
//! - 分发命令：批量拉黑 / 拉取黑名单
//!
//! ### `block_processor` - 批量拉黑处理器
//! - 遍历用户名列表，逐个交给 `BlockFlow`
//! - 固定间隔节流，汇总统计
//!
//! ## 层次关系
//!
//! ```text
//! app
//!     ↓
//! block_processor (处理 Vec<用户名>)
//!     ↓
//! workflow::BlockFlow (处理单个用户名)
//!     ↓
//! services (能力层：resolver / block / block_list)
//!     ↓
//! infrastructure (请求通道：Transport)
//! ```

pub mod app;
pub mod block_processor;

pub use app::{App, SessionTransport};
pub use block_processor::{block_all_users, BlockSummary};
