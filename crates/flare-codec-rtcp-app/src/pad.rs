//! 32-bit 对齐的填充字节计算。
//!
//! # 教案定位（Why）
//! - RTCP 全部报文均以 32-bit word 为单位计长，编码与解码两侧都需要同一份
//!   取整算式；将其抽成独立模块，保证两侧永远 bit 级一致。
//!
//! # 契约说明（What）
//! - 输入为任意字节长度，输出为补齐到下一个 4 字节边界所需的填充字节数；
//!   已对齐时返回 0。

/// RTCP 报文的对齐单位（32-bit word，4 字节）。
pub const WORD_LEN: usize = 4;

/// 计算把 `len` 字节补齐到 4 字节边界所需的填充字节数。
///
/// # 调用契约（What）
/// - **输入**：任意字节长度 `len`。
/// - **输出**：`0..=3` 之间的填充字节数；`len` 已是 4 的倍数时为 0。
/// - **后置条件**：`(len + word_padding(len)) % 4 == 0` 恒成立。
#[must_use]
pub const fn word_padding(len: usize) -> usize {
    match len % WORD_LEN {
        0 => 0,
        rem => WORD_LEN - rem,
    }
}
