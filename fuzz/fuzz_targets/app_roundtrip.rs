#![no_main]

use arbitrary::Arbitrary;
use flare_codec_rtcp_app::ApplicationDefined;
use libfuzzer_sys::fuzz_target;

/// Fuzz 用例：描述一条待编码的 APP 报文。
///
/// - **Why**：结构化建模让 fuzzer 直接探索字段空间，而不是先碰运气凑出
///   合法头部；差分断言「编码后再解码」必须恢复原始字段。
/// - **How**：`subtype` 在目标内掩码到 5-bit 合法域；payload 长度不设
///   上限，超出 16-bit 长度字段表达范围的用例应被编码侧显式拒绝。
#[derive(Debug, Arbitrary)]
struct AppFuzzCase {
    subtype: u8,
    ssrc: u32,
    name: [u8; 4],
    data: Vec<u8>,
}

fuzz_target!(|case: AppFuzzCase| {
    let message = ApplicationDefined {
        subtype: case.subtype & 0x1f,
        ssrc: case.ssrc,
        name: case.name,
        data: case.data,
    };

    let raw = match message.marshal() {
        Ok(raw) => raw,
        // 超长 payload 触发长度字段溢出属于契约内失败，不再继续差分。
        Err(_) => return,
    };

    assert_eq!(raw.len() % 4, 0, "编码长度必须按 word 对齐");
    assert_eq!(raw.len(), message.marshal_size());

    let decoded = ApplicationDefined::unmarshal(&raw).expect("刚编码的报文必须可解码");
    assert_eq!(decoded, message, "往返后字段必须逐项相等");
});
