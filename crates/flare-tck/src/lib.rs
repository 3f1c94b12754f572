//! # flare-tck
//!
//! ## 章节定位（Why）
//! - **目标**：为 APP 报文编解码提供最小可运行的契约测试集（TCK），把
//!   线上字节布局、校验顺序与往返不变量固定为可回归的断言。
//! - **使用方式**：`vectors` 模块公开权威字节向量，供外部实现做互操作
//!   对拍；`rtcp_app` 测试模块在 `cargo test` 时逐条验证契约。
//!
//! ## 结构概览（How）
//! - [`vectors`] 收录人工核算过的线上报文常量；
//! - `rtcp_app::app_vectors` 覆盖编码布局与全部拒绝分支；
//! - `rtcp_app::roundtrip_properties` 用 proptest 验证任意报文的往返、
//!   对齐与填充算术性质。

pub mod vectors;

/// APP 报文编解码契约测试集合。
#[cfg(test)]
mod rtcp_app;
