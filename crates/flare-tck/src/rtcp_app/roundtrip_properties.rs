//! APP 报文编解码的性质验证。
//!
//! # 教案定位（Why）
//! - 字节向量只能覆盖有限样本；这里用 proptest 在随机报文空间上验证
//!   编解码的四条核心性质：往返恒等、长度对齐、填充算术与头部投影
//!   一致性。任一性质失效都意味着线上布局契约被破坏。
//!
//! # 合同与边界（What）
//! - 随机报文的 subtype 限定在 5-bit 合法域（0..=31），payload 长度覆盖
//!   0..512 字节，足以同时落入「无填充」与三种填充计数的全部分支。

use flare_codec_rtcp_app::{ApplicationDefined, MIN_PACKET_LEN};
use proptest::prelude::*;

fn arb_message() -> impl Strategy<Value = ApplicationDefined> {
    (
        0u8..=31,
        any::<u32>(),
        any::<[u8; 4]>(),
        prop::collection::vec(any::<u8>(), 0..512),
    )
        .prop_map(|(subtype, ssrc, name, data)| ApplicationDefined {
            subtype,
            ssrc,
            name,
            data,
        })
}

proptest! {
    #[test]
    fn prop_marshal_unmarshal_roundtrip(message in arb_message()) {
        let raw = message.marshal().expect("合法报文编码应成功");
        let decoded = ApplicationDefined::unmarshal(&raw).expect("刚编码的报文应可解码");
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn prop_encoded_length_word_aligned(message in arb_message()) {
        let raw = message.marshal().expect("合法报文编码应成功");
        prop_assert_eq!(raw.len() % 4, 0, "编码长度必须是 4 的倍数");
        prop_assert_eq!(raw.len(), message.marshal_size(), "实际长度必须等于 marshal_size");
    }

    #[test]
    fn prop_padding_arithmetic(message in arb_message()) {
        let raw = message.marshal().expect("合法报文编码应成功");
        let unpadded = MIN_PACKET_LEN + message.data.len();
        let pad = raw.len() - unpadded;
        prop_assert!(pad <= 3, "填充字节数必须落在 0..=3");
        if pad > 0 {
            prop_assert_eq!(raw[raw.len() - 1] as usize, pad, "末字节必须记录填充总数");
            prop_assert_eq!(raw[0] & 0x20, 0x20, "padding 标志必须置位");
        } else {
            prop_assert_eq!(raw[0] & 0x20, 0, "无填充时 padding 标志必须清零");
        }
    }

    #[test]
    fn prop_header_projection_matches_wire(message in arb_message()) {
        let raw = message.marshal().expect("合法报文编码应成功");
        let projected = message.header().marshal().expect("投影头部应可编码");
        prop_assert_eq!(&raw[..4], &projected, "投影头部必须与线上头部一致");
    }
}
