//! APP 报文线上布局与拒绝分支的契约测试。
//!
//! # 教案定位（Why）
//! - 验证编码输出与 `vectors` 模块的权威字节向量逐字节一致，解码按
//!   「头部 → 类型判别字 → 总长对齐 → 填充」的顺序触发对应错误。
//! - 填充剥除行为单独立项断言：历史上存在「把填充连同 payload 一起复制」
//!   的实现变体，这里把 RFC 正确的剥除语义固定为契约，防止回退。
//!
//! # 覆盖范围（What）
//! - `marshal_minimal_packet` / `marshal_padded_packet`：编码布局对拍；
//! - `padding_stripped_before_payload_assignment`：填充剥除契约；
//! - 其余用例逐条覆盖 WrongType、PacketTooShort、头部错误转发与校验
//!   顺序。

use flare_codec_rtcp_app::{AppError, ApplicationDefined, HeaderError};

use crate::vectors::{APP_MINIMAL, APP_PADDED, APP_PADDED_PAYLOAD};

fn reference_message(data: &[u8]) -> ApplicationDefined {
    ApplicationDefined {
        subtype: 0,
        ssrc: 1,
        name: *b"TEST",
        data: data.to_vec(),
    }
}

#[test]
fn marshal_minimal_packet() {
    let message = reference_message(&[]);
    let raw = message.marshal().expect("空 payload 报文编码应成功");
    assert_eq!(raw, APP_MINIMAL, "编码输出必须与权威向量逐字节一致");
    assert_eq!(raw.len() % 4, 0, "编码长度恒为 4 的倍数");
    assert_eq!(raw[0] & 0x20, 0, "无填充时 padding 标志必须清零");
}

#[test]
fn marshal_padded_packet() {
    let message = reference_message(&APP_PADDED_PAYLOAD);
    let raw = message.marshal().expect("带 payload 报文编码应成功");
    assert_eq!(raw, APP_PADDED, "编码输出必须与权威向量逐字节一致");
    assert_eq!(raw[0] & 0x20, 0x20, "需要填充时 padding 标志必须置位");
    assert_eq!(*raw.last().expect("非空输出"), 1, "末字节应记录填充总数");
}

#[test]
fn padding_stripped_before_payload_assignment() {
    // 两种历史实现变体中，只有「先剥除填充再赋值 payload」符合 RFC；
    // 本用例把该语义固定为契约。
    let decoded = ApplicationDefined::unmarshal(&APP_PADDED).expect("权威向量应可解码");
    assert_eq!(
        decoded.data, APP_PADDED_PAYLOAD,
        "payload 必须恰为原始 3 字节，不得携带填充"
    );
    assert_eq!(decoded, reference_message(&APP_PADDED_PAYLOAD));
}

#[test]
fn unmarshal_minimal_packet() {
    let decoded = ApplicationDefined::unmarshal(&APP_MINIMAL).expect("最小报文应可解码");
    assert_eq!(decoded, reference_message(&[]));
    assert!(decoded.data.is_empty(), "空 payload 解码后应保持为空");
}

#[test]
fn reject_wrong_packet_type() {
    let mut raw = APP_MINIMAL;
    raw[1] = 203; // BYE 的类型判别字。
    assert_eq!(
        ApplicationDefined::unmarshal(&raw),
        Err(AppError::WrongType { packet_type: 203 }),
        "类型判别字不符必须返回 WrongType"
    );
}

#[test]
fn wrong_type_checked_before_length() {
    // 校验顺序契约：类型判别字先于总长校验，即便输入同时违反两者。
    let raw = [0x80, 0xCB, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01];
    assert_eq!(
        ApplicationDefined::unmarshal(&raw),
        Err(AppError::WrongType { packet_type: 203 }),
    );
}

#[test]
fn reject_truncated_packet() {
    // 10 字节：头部合法、类型正确，但短于 12 字节固定区。
    let raw = &APP_MINIMAL[..10];
    assert_eq!(
        ApplicationDefined::unmarshal(raw),
        Err(AppError::PacketTooShort { total_bytes: 10 }),
    );
}

#[test]
fn reject_unaligned_packet() {
    // 14 字节：超过固定区但不是 4 的倍数。
    let mut raw = APP_PADDED.to_vec();
    raw.truncate(14);
    assert_eq!(
        ApplicationDefined::unmarshal(&raw),
        Err(AppError::PacketTooShort { total_bytes: 14 }),
    );
}

#[test]
fn forward_header_error_verbatim() {
    let mut raw = APP_MINIMAL;
    raw[0] = 0x40; // 版本位改写为 1。
    assert_eq!(
        ApplicationDefined::unmarshal(&raw),
        Err(AppError::Header(HeaderError::InvalidVersion { version: 1 })),
        "头部层失败必须原样转发"
    );
}

#[test]
fn decode_never_aliases_input() {
    // 解码产物独占所有权：改写输入缓冲不得影响已解码的报文。
    let mut raw = APP_PADDED.to_vec();
    let decoded = ApplicationDefined::unmarshal(&raw).expect("解码应成功");
    raw.fill(0xFF);
    assert_eq!(decoded.data, APP_PADDED_PAYLOAD, "payload 不得与输入共享存储");
    assert_eq!(decoded.name, *b"TEST");
}
