//! TCP 段模型与编解码
//!
//! 此模块覆盖传输层头部的三件事：
//! - 段模型（字段与默认值）
//! - 端口文本解析
//! - 20 字节线上格式的 pack / unpack（不支持 TCP 选项）
//!
//! 连接状态机（握手、重传、拥塞控制）不在此层。

// 子模块声明
mod flags;
mod port;
mod segment;
mod wire;

// 重新导出公共接口
pub use flags::Control;
pub use port::parse_port;
pub use segment::TcpSegment;
pub use wire::HEADER_LEN;
