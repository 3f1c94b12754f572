//! RTCP 报文的统一分发契约。
//!
//! # 教案定位（Why）
//! - 复合报文分发器（本 crate 范围之外）需要以统一的抽象遍历各报文类型：
//!   读取头部投影、查询宿主 SSRC、触发编码。[`Packet`] trait 把这条缝隙
//!   显式固定下来，APP 报文通过实现它声明自己符合通用报文契约。
//!
//! # 契约说明（What）
//! - trait 仅约定只读投影与编码入口，不引入任何分发状态；实现方必须保证
//!   `header()` 与 `marshal()` 实际写出的头部一致。
//! - [`SsrcVec`] 用栈上小向量承载 SSRC 列表：单一来源的报文（如 APP）
//!   不触发堆分配。

use alloc::vec::Vec;
use core::fmt;

use crate::{error::AppError, header::Header};

/// SSRC 列表的默认内联容量。
pub const DEFAULT_SOURCE_CAPACITY: usize = 4;

/// 报文引用的 SSRC 集合，前几个元素直接存储在栈上。
pub type SsrcVec = smallvec::SmallVec<[u32; DEFAULT_SOURCE_CAPACITY]>;

/// RTCP 报文的通用契约，供类型分发层以 trait 对象方式路由。
///
/// ## 契约定义（What）
/// - `header()`：按报文当前字段投影出编码时将写入的头部；
/// - `marshal_size()`：含填充的总编码字节数，恒为 4 的倍数；
/// - `marshal()`：产出完整字节序列，失败时不留下部分输出；
/// - `destination_ssrc()`：该报文所指向的同步源集合。
pub trait Packet: fmt::Debug + fmt::Display {
    /// 按当前字段状态投影出编码头部。
    fn header(&self) -> Header;

    /// 含填充的总编码字节数。
    fn marshal_size(&self) -> usize;

    /// 将报文编码为字节序列。
    fn marshal(&self) -> Result<Vec<u8>, AppError>;

    /// 返回该报文引用的 SSRC 集合。
    fn destination_ssrc(&self) -> SsrcVec;
}
