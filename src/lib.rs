//! # Account Blocker
//!
//! 批量拉黑 9GAG 账号、拉取当前黑名单的命令行工具
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有网络资源，只暴露"发请求"的能力
//! - `Transport` - 请求通道抽象，`HttpTransport`（reqwest）与 `JsExecutor`（浏览器标签页）两种实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个账号或单页数据
//! - `AccountResolver` - 用户名 → accountId
//! - `BlockService` - 拉黑一个账号
//! - `BlockListService` - 分页拉取黑名单
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个账号"的完整处理流程（查询 → 拉黑）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 遍历列表、固定间隔节流、汇总统计、命令分发
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Command, Config, TransportKind};
pub use error::{AppError, AppResult};
pub use infrastructure::{HttpResponse, HttpTransport, JsExecutor, Transport};
pub use models::{parse_users_list, AccountId, BlockOutcome, Lookup};
pub use orchestrator::{block_all_users, App, BlockSummary};
pub use services::{AccountResolver, BlockListService, BlockService};
pub use workflow::{BlockFlow, UserCtx};
