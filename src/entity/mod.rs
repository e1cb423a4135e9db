//! # 实体层
//!
//! 定义 Bitnet API 的数据传输对象，负责 Rust 结构体与服务端 JSON 之间的映射。
//!
//! ## 命名约定
//! 服务端所有字段使用 camelCase，Rust 侧使用 snake_case，
//! 通过 serde 的 `rename_all = "camelCase"` 统一转换。
//!
//! ## 主要实体
//! - **ApiResponse**: 统一响应信封（success / msg / data）
//! - **Browser**: 浏览器窗口配置与运行时信息
//! - **BrowserFingerPrint**: 浏览器指纹参数
//! - **Group**: 窗口分组
//! - **PagedData**: 分页列表（content / totalElements / totalPages）
//! - **ProxyCheckInfo**: 代理出口检测结果
//!
//! ## 模块结构
//! - `response`: 响应信封与分页类型
//! - `fingerprint`: 指纹实体
//! - `browser`: 浏览器实体与请求载荷
//! - `group`: 分组实体与请求载荷
//! - `proxy`: 代理类型与检测实体

pub mod browser;
pub mod fingerprint;
pub mod group;
pub mod proxy;
pub mod response;

pub use browser::{Browser, IdRequest, PageQuery, PidsRequest};
pub use fingerprint::BrowserFingerPrint;
pub use group::{Group, GroupAddRequest, GroupEditRequest};
pub use proxy::{ProxyCheckInfo, ProxyCheckRequest, ProxyType};
pub use response::{
    ApiResponse, BrowserListResponse, BrowserResponse, GenericResponse, GroupListResponse,
    GroupResponse, HealthData, HealthResponse, PagedData, PidsResponse, ProxyCheckResponse,
};
