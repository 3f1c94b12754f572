#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # flare-codec-rtcp-app
//!
//! ## 教案目的（Why）
//! - **定位**：RTCP Application-Defined (APP) 报文的编解码实现，负责应用
//!   自定义载荷在控制平面上的序列化契约。
//! - **架构角色**：与报告（SR/RR）、源描述（SDES）、离会（BYE）等标准
//!   控制报文并列，经由统一的类型判别字参与复合报文分发；本 crate 只
//!   承担 APP 一种类型的字节级双向变换。
//! - **设计策略**：头部与填充算术作为独立协作模块实现，APP 编解码对其
//!   全量委托，保证与其他报文类型 bit 级互操作。
//!
//! ## 交互契约（What）
//! - **输入输出**：[`ApplicationDefined::marshal`] 产出独立的字节序列；
//!   [`ApplicationDefined::unmarshal`] 从连续字节切片还原报文，payload
//!   永远复制进新分配的缓冲。
//! - **错误职责**：头部层失败经 [`AppError::Header`] 原样转发；APP 层
//!   自身校验覆盖类型判别字、总长对齐与填充声明。
//! - **前置约束**：`no_std` 启用时必须提供 `alloc` 支持以承载 payload。
//!
//! ## 实现策略（How）
//! - `header`/`pad` 子模块固定公共头部与对齐算术；`packet` 子模块声明
//!   通用报文契约；`app` 子模块承载数据模型与编解码主体。
//! - 编解码均为纯函数：无内部状态、无 IO、无锁；并发调用方只需保证对
//!   单个报文值的独占访问。
//!
//! ## 风险提示（Trade-offs）
//! - 解码阶段将 payload 复制进新缓冲，牺牲零拷贝换取所有权语义的简单
//!   与输入缓冲的立即可复用；
//! - 复合报文的拆分与路由不在本 crate 范围内，上层分发器需在调用前按
//!   长度字段切出单个报文。

extern crate alloc;

mod app;
mod error;
mod header;
mod packet;
mod pad;

pub use crate::{
    app::{ApplicationDefined, MIN_PACKET_LEN, NAME_LEN, SSRC_LEN},
    error::AppError,
    header::{
        HEADER_LEN, Header, HeaderError, MAX_COUNT, MAX_PACKET_LEN, RTCP_VERSION,
        TYPE_APPLICATION_DEFINED,
    },
    packet::{DEFAULT_SOURCE_CAPACITY, Packet, SsrcVec},
    pad::{WORD_LEN, word_padding},
};
