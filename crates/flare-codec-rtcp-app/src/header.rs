//! RTCP 公共头部（4 字节）的编解码。
//!
//! # 教案定位（Why）
//! - 所有 RTCP 控制报文共享同一个定长头部：版本、padding 标志、5-bit
//!   count/subtype、8-bit 类型判别字以及以 word 计数的长度字段。APP 报文
//!   编解码把头部处理完全委托给本模块，保证与其他报文类型 bit 级互操作。
//!
//! # 契约说明（What）
//! - [`Header::marshal`] 产出定长 4 字节；[`Header::unmarshal`] 从输入前
//!   4 字节还原结构化头部，二者互为逆运算。
//! - 头部错误通过 [`HeaderError`] 返回，上层编解码必须原样向外传播，不得
//!   二次包装语义。
//!
//! # 实现策略（How）
//! - 字节 0 按 RFC3550 位域布局：高 2 bit 版本、1 bit padding、低 5 bit
//!   count；字节 1 为类型判别字；字节 2..4 为大端长度字段。
//! - 版本固定为 2，不作为结构体字段存储，编码时直接写入、解码时校验。

use core::fmt;

/// RTCP 固定版本号（RFC 3550 §6.4）。
pub const RTCP_VERSION: u8 = 2;

/// RTCP 公共头部长度（字节）。
pub const HEADER_LEN: usize = 4;

/// Application-Defined (APP) 报文的类型判别字（RFC 3550 §6.7）。
pub const TYPE_APPLICATION_DEFINED: u8 = 204;

/// count/subtype 位域宽度允许的最大值（5 bit）。
pub const MAX_COUNT: u8 = 0x1f;

/// 长度字段（16 bit，单位 word，隐含 +1）能描述的最大报文字节数。
pub const MAX_PACKET_LEN: usize = (u16::MAX as usize + 1) * 4;

/// RTCP 公共头部的结构化表示。
///
/// ## 契约说明（What）
/// - `count` 在 APP 报文语义下承载 5-bit subtype，编码时超出位宽立即报错；
/// - `length` 恒等于「报文总字节数 / 4 − 1」，由调用方按该式填入；
/// - 版本号不入字段：编码侧固定写 2，解码侧校验后丢弃。
///
/// ## 注意事项（Trade-offs）
/// - 字段全部公开，便于上层按当前报文状态直接投影头部；一致性由上层的
///   编码入口统一校验，本结构不维护内部不变量。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// Padding 标志位，报文尾部是否附带填充字节。
    pub padding: bool,
    /// 5-bit count/subtype 字段，具体语义由报文类型决定。
    pub count: u8,
    /// 8-bit 类型判别字（APP 报文为 204）。
    pub packet_type: u8,
    /// 长度字段：报文总字节数以 word 计数再减一。
    pub length: u16,
}

impl Header {
    /// 将头部编码为定长 4 字节。
    ///
    /// # 调用契约（What）
    /// - **输出**：`[u8; 4]`，字节布局见模块文档。
    /// - **错误**：`count` 超出 5-bit 位宽时返回
    ///   [`HeaderError::CountOverflow`]，不产生任何输出字节。
    pub fn marshal(&self) -> Result<[u8; HEADER_LEN], HeaderError> {
        if self.count > MAX_COUNT {
            return Err(HeaderError::CountOverflow { count: self.count });
        }

        let mut raw = [0u8; HEADER_LEN];
        raw[0] = (RTCP_VERSION << 6) | ((self.padding as u8) << 5) | self.count;
        raw[1] = self.packet_type;
        raw[2..4].copy_from_slice(&self.length.to_be_bytes());
        Ok(raw)
    }

    /// 从输入缓冲的前 4 字节还原头部。
    ///
    /// # 调用契约（What）
    /// - **输入**：至少 4 字节的切片，多余字节不被读取。
    /// - **错误**：不足 4 字节返回 [`HeaderError::PacketTooShort`]；版本位
    ///   不是 2 返回 [`HeaderError::InvalidVersion`]。
    pub fn unmarshal(raw: &[u8]) -> Result<Self, HeaderError> {
        if raw.len() < HEADER_LEN {
            return Err(HeaderError::PacketTooShort { remaining: raw.len() });
        }

        let version = raw[0] >> 6;
        if version != RTCP_VERSION {
            return Err(HeaderError::InvalidVersion { version });
        }

        Ok(Self {
            padding: (raw[0] & 0x20) != 0,
            count: raw[0] & MAX_COUNT,
            packet_type: raw[1],
            length: u16::from_be_bytes([raw[2], raw[3]]),
        })
    }
}

/// 头部编解码错误。
///
/// ## 契约说明（What）
/// - 每个分支对应一条协议约束；携带实际读到/算出的数值，便于在契约测试中
///   直接断言失败原因。
/// - 上层编解码把本类型原样外抛（见 `AppError::Header`），调用方据此区分
///   「头部层失败」与「APP 报文层失败」。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// 输入不足以覆盖 4 字节定长头部。
    PacketTooShort {
        /// 实际剩余的字节数。
        remaining: usize,
    },
    /// 版本位不是 RFC3550 规定的 2。
    InvalidVersion {
        /// 实际读到的版本号。
        version: u8,
    },
    /// count/subtype 超出 5-bit 位宽，无法编码。
    CountOverflow {
        /// 调用方提供的 count 值。
        count: u8,
    },
    /// 报文总长以 word 计数后超出 16-bit 长度字段的表达范围。
    LengthOverflow {
        /// 减一前的 word 数。
        words: usize,
    },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PacketTooShort { remaining } => {
                write!(f, "剩余字节 ({remaining}) 不足以解析 RTCP 头部")
            }
            Self::InvalidVersion { version } => {
                write!(f, "RTCP 版本号 {version} 非法，期望值为 2")
            }
            Self::CountOverflow { count } => {
                write!(f, "count/subtype 取值 {count} 超出 5-bit 位宽")
            }
            Self::LengthOverflow { words } => {
                write!(f, "报文长度 {words} 个 word 超出 16-bit 长度字段")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeaderError {}
