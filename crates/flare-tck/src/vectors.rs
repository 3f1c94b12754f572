//! APP 报文的权威线上字节向量。
//!
//! # 教案定位（Why）
//! - 契约测试需要与具体实现无关的「标准答案」；这里的常量按 RFC 3550
//!   §6.7 的位域布局逐字节核算，既供本仓库的 TCK 断言，也可供外部实现
//!   做互操作对拍。
//!
//! # 覆盖范围（What）
//! - 最小报文（空 payload，无填充）与带填充报文各一条；
//! - 两条向量共享 subtype=0、SSRC=1、name="TEST"，差异只在 payload 与
//!   由此派生的填充/长度字段，便于对照阅读。

/// 空 payload 的最小 APP 报文：总长 12 字节，无填充，长度字段为 2。
pub const APP_MINIMAL: [u8; 12] = [
    0x80, 0xCC, 0x00, 0x02, // V=2, P=0, subtype=0, PT=204, length=2
    0x00, 0x00, 0x00, 0x01, // SSRC = 1
    0x54, 0x45, 0x53, 0x54, // name = "TEST"
];

/// 携带 3 字节 payload 的 APP 报文：15 字节补齐至 16，padding 标志置位，
/// 末字节记录填充总数 1。
pub const APP_PADDED: [u8; 16] = [
    0xA0, 0xCC, 0x00, 0x03, // V=2, P=1, subtype=0, PT=204, length=3
    0x00, 0x00, 0x00, 0x01, // SSRC = 1
    0x54, 0x45, 0x53, 0x54, // name = "TEST"
    0x01, 0x02, 0x03, 0x01, // payload {1,2,3} + 1 字节填充（计数 1）
];

/// [`APP_PADDED`] 中的原始 payload 字节。
pub const APP_PADDED_PAYLOAD: [u8; 3] = [0x01, 0x02, 0x03];
