//! Application-Defined (APP) 报文的数据模型与编解码。
//!
//! # 教案定位（Why）
//! - APP 报文（RFC 3550 §6.7）允许应用在标准会话控制报文之外携带不透明的
//!   自定义载荷，是实验性信令与私有扩展的标准通道。本模块给出它在内存中
//!   的结构化表示，以及与线上字节序列之间的双向纯变换。
//!
//! # 契约说明（What）
//! - [`ApplicationDefined::marshal`] 产出的字节序列长度恒为 4 的倍数，
//!   头部由 [`Header`](crate::header::Header) 编解码器统一写入；
//! - [`ApplicationDefined::unmarshal`] 在写入任何字段前完成全部校验，
//!   失败时不产生部分结果；payload 永远复制进新分配的缓冲，不与输入
//!   共享存储。
//!
//! # 实现策略（How）
//! - 报文体按「SSRC(4) + name(4) + data(变长)」的固定顺序写入，SSRC 使用
//!   大端字节序；
//! - 填充遵循协议惯例：补零至 word 边界，最后一个填充字节记录填充总数；
//!   解码侧按同一约定剥除填充后再复制 payload。
//!
//! # 风险提示（Trade-offs）
//! - 头部长度字段在解码时不与缓冲实际长度交叉校验，payload 区域一律由
//!   输入长度推导；调用方若需要更严格的一致性检查，应在分发层完成。

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    error::AppError,
    header::{HEADER_LEN, Header, HeaderError, MAX_PACKET_LEN, TYPE_APPLICATION_DEFINED},
    packet::{Packet, SsrcVec},
    pad::word_padding,
};

/// SSRC/CSRC 标识符的字节长度。
pub const SSRC_LEN: usize = 4;

/// name 字段的字节长度，恰好 4 个 ASCII 字符。
pub const NAME_LEN: usize = 4;

/// APP 报文的最小总长：头部 + SSRC + name。
pub const MIN_PACKET_LEN: usize = HEADER_LEN + SSRC_LEN + NAME_LEN;

/// Application-Defined 报文的结构化表示。
///
/// ## 契约说明（What）
/// - `subtype` 占用头部的 5-bit count 位域，取值范围由头部编码约束
///   （超过 31 时编码报错），本结构不预先校验；
/// - `name` 是定长 4 字节，惯例上为 ASCII，但不要求以零结尾或可打印；
/// - `data` 为任意长度（含零）的不透明字节序列，由报文独占所有权。
///
/// ## 实现细节（How）
/// - 派生 `Clone`/`PartialEq` 便于测试直接断言往返结果；`Default` 产出
///   全零报文，可作为字段逐项填充的起点。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationDefined {
    /// 5-bit 子类型，语义由 name 所标识的应用自行定义。
    pub subtype: u8,
    /// 同步源或贡献源标识符。
    pub ssrc: u32,
    /// 4 字节应用名（ASCII 惯例，无终止符语义）。
    pub name: [u8; NAME_LEN],
    /// 应用自定义载荷，长度任意。
    pub data: Vec<u8>,
}

impl ApplicationDefined {
    /// 不含填充的报文字节数：固定区 12 字节加 payload。
    fn packet_len(&self) -> usize {
        MIN_PACKET_LEN + self.data.len()
    }

    /// 含填充的总编码字节数，恒为 4 的倍数。
    #[must_use]
    pub fn marshal_size(&self) -> usize {
        let len = self.packet_len();
        len + word_padding(len)
    }

    /// 按当前字段状态投影出编码时将写入的头部。
    ///
    /// # 调用契约（What）
    /// - **输出**：padding 标志取自当前报文长度的对齐奇偶，count 取自
    ///   subtype，长度字段为「总字节数 / 4 − 1」。
    /// - **前置条件**：长度字段的截断转换仅在 [`Self::marshal`] 能成功的
    ///   范围内有意义；`marshal` 在使用该投影前先行校验溢出。
    /// - **后置条件**：与 `marshal` 实际写出的头部字节保持一致。
    #[must_use]
    pub fn header(&self) -> Header {
        Header {
            padding: word_padding(self.packet_len()) != 0,
            count: self.subtype,
            packet_type: TYPE_APPLICATION_DEFINED,
            length: (self.marshal_size() / 4 - 1) as u16,
        }
    }

    /// 返回该报文引用的 SSRC 集合（APP 报文恒为单元素）。
    #[must_use]
    pub fn destination_ssrc(&self) -> SsrcVec {
        let mut sources = SsrcVec::new();
        sources.push(self.ssrc);
        sources
    }

    /// 将报文编码为完整的线上字节序列。
    ///
    /// # 调用契约（What）
    /// - **输出**：长度等于 [`Self::marshal_size`] 的字节序列，恒为 4 的
    ///   倍数；需要填充时最后一个字节记录填充字节数。
    /// - **错误**：总长超出 16-bit 长度字段表达范围时返回
    ///   [`HeaderError::LengthOverflow`]，subtype 超出 5-bit 位宽时返回
    ///   [`HeaderError::CountOverflow`]；两者均以 [`AppError::Header`]
    ///   原样外抛，且失败时不产生任何输出。
    /// - **后置条件**：纯函数，除返回值外无任何副作用。
    pub fn marshal(&self) -> Result<Vec<u8>, AppError> {
        let size = self.marshal_size();
        if size > MAX_PACKET_LEN {
            return Err(HeaderError::LengthOverflow { words: size / 4 }.into());
        }

        let header = self.header().marshal()?;

        let mut raw = vec![0u8; size];
        raw[..HEADER_LEN].copy_from_slice(&header);
        raw[HEADER_LEN..HEADER_LEN + SSRC_LEN].copy_from_slice(&self.ssrc.to_be_bytes());
        raw[HEADER_LEN + SSRC_LEN..MIN_PACKET_LEN].copy_from_slice(&self.name);
        raw[MIN_PACKET_LEN..MIN_PACKET_LEN + self.data.len()].copy_from_slice(&self.data);

        let padding = size - self.packet_len();
        if padding > 0 {
            // 填充区已是零，只需在末字节记录填充总数。
            raw[size - 1] = padding as u8;
        }

        Ok(raw)
    }

    /// 从线上字节序列解码 APP 报文。
    ///
    /// # 调用契约（What）
    /// - **校验顺序**：头部 → 类型判别字 (204) → 总长（≥12 且按 word
    ///   对齐）→ 填充声明；先触发的约束先报错，任何失败都发生在字段
    ///   产出之前。
    /// - **输出**：全新构造的报文值；payload 复制进新分配的缓冲，调用方
    ///   可在返回后立即复用或释放输入缓冲。
    /// - **错误**：头部层失败以 [`AppError::Header`] 原样转发；类型不符
    ///   返回 [`AppError::WrongType`]；长度/对齐违例返回
    ///   [`AppError::PacketTooShort`]；填充声明越界返回
    ///   [`AppError::InvalidPadding`]。
    pub fn unmarshal(raw: &[u8]) -> Result<Self, AppError> {
        let header = Header::unmarshal(raw)?;

        if header.packet_type != TYPE_APPLICATION_DEFINED {
            return Err(AppError::WrongType {
                packet_type: header.packet_type,
            });
        }

        if raw.len() < MIN_PACKET_LEN || word_padding(raw.len()) != 0 {
            return Err(AppError::PacketTooShort {
                total_bytes: raw.len(),
            });
        }

        let ssrc = u32::from_be_bytes([
            raw[HEADER_LEN],
            raw[HEADER_LEN + 1],
            raw[HEADER_LEN + 2],
            raw[HEADER_LEN + 3],
        ]);
        let mut name = [0u8; NAME_LEN];
        name.copy_from_slice(&raw[HEADER_LEN + SSRC_LEN..MIN_PACKET_LEN]);

        let mut region = &raw[MIN_PACKET_LEN..];
        if header.padding {
            let declared = region.last().copied().unwrap_or(0);
            let padding = declared as usize;
            if padding == 0 || padding > region.len() {
                return Err(AppError::InvalidPadding {
                    padding: declared,
                    region_len: region.len(),
                });
            }
            region = &region[..region.len() - padding];
        }

        Ok(Self {
            subtype: header.count,
            ssrc,
            name,
            data: region.to_vec(),
        })
    }
}

impl fmt::Display for ApplicationDefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "APP subtype={} ssrc={:#010x} name=\"{}\" data={} 字节",
            self.subtype,
            self.ssrc,
            self.name.escape_ascii(),
            self.data.len()
        )
    }
}

impl Packet for ApplicationDefined {
    fn header(&self) -> Header {
        ApplicationDefined::header(self)
    }

    fn marshal_size(&self) -> usize {
        ApplicationDefined::marshal_size(self)
    }

    fn marshal(&self) -> Result<Vec<u8>, AppError> {
        ApplicationDefined::marshal(self)
    }

    fn destination_ssrc(&self) -> SsrcVec {
        ApplicationDefined::destination_ssrc(self)
    }
}
