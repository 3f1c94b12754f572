#![no_main]

use flare_codec_rtcp_app::ApplicationDefined;
use libfuzzer_sys::fuzz_target;

// 原始字节解码：任意输入都不得 panic；解码成功的报文再编码、再解码
// 必须收敛到同一个值（非最小填充计数在首轮解码时即被归一化）。
fuzz_target!(|data: &[u8]| {
    let Ok(decoded) = ApplicationDefined::unmarshal(data) else {
        return;
    };

    let raw = decoded.marshal().expect("解码产物必须可再编码");
    let converged = ApplicationDefined::unmarshal(&raw).expect("再编码结果必须可解码");
    assert_eq!(converged, decoded, "编解码必须在一轮内收敛");
});
