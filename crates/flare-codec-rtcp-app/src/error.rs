//! APP 报文编解码错误类型定义。
//!
//! # 教案定位（Why）
//! - 解码 APP 报文时需要向上游明确失败原因：是头部层损坏、类型判别字不
//!   匹配，还是报文长度/填充违反对齐约束。分类清晰的错误让契约测试可以
//!   逐条断言协议规则。
//!
//! # 使用契约（What）
//! - [`AppError::Header`] 原样转发头部编解码器的失败，语义不做二次加工；
//!   其余分支属于 APP 报文层自身的校验。
//! - 所有变体实现 `Clone`/`PartialEq`，便于测试直接比较具体错误值。
//!
//! # 设计考量（How）
//! - 枚举只存储简单整型，保证在 `no_std` 环境中可用；`Display` 输出友好
//!   提示，`std` 特性开启时再接入常规错误栈。

use core::fmt;

use crate::header::HeaderError;

/// APP 报文编解码过程中可能出现的错误。
///
/// ## 契约定义（What）
/// - 任一错误都表示「当前操作失败且没有产生部分结果」：解码在写入任何
///   字段前完成全部校验，编码失败时不产生输出字节。
/// - 解码按「头部 → 类型判别字 → 总长对齐 → 填充」的顺序校验，先触发的
///   约束先报错。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    /// 头部编解码器的失败，原样转发。
    Header(HeaderError),
    /// 类型判别字不是 Application-Defined (204)。
    WrongType {
        /// 实际读到的类型值。
        packet_type: u8,
    },
    /// 输入短于 12 字节固定区，或总长不是 4 的倍数。
    PacketTooShort {
        /// 输入的总字节数。
        total_bytes: usize,
    },
    /// Padding 标志开启，但末尾字节声明的填充长度无效。
    InvalidPadding {
        /// 声明的填充字节数。
        padding: u8,
        /// 固定区之后的候选 payload 区域长度。
        region_len: usize,
    },
}

impl From<HeaderError> for AppError {
    fn from(err: HeaderError) -> Self {
        Self::Header(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(err) => write!(f, "RTCP 头部错误：{err}"),
            Self::WrongType { packet_type } => {
                write!(f, "类型判别字 {packet_type} 不是 Application-Defined (204)")
            }
            Self::PacketTooShort { total_bytes } => {
                write!(f, "报文总长 {total_bytes} 字节不足 12 字节或未按 word 对齐")
            }
            Self::InvalidPadding {
                padding,
                region_len,
            } => {
                write!(
                    f,
                    "Padding 标志开启但声明填充 {padding} 超过区域长度 {region_len}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AppError {}
