//! APP 报文契约测试的模块入口。

mod app_vectors;
mod roundtrip_properties;
