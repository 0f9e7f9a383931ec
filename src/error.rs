//! 错误类型
//!
//! 整个协议栈共用的封闭错误集合。所有可失败的操作返回 `Result`，
//! 成功即 `Ok`（对应原始状态码中的 “None”）。错误不会在内部重试或
//! 恢复，而是原样上抛给调用方。

use thiserror::Error;

/// 协议栈操作的错误集合。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// 字段格式错误或超出有效取值范围（例如端口文本解析失败）。
    #[error("field is malformed or out of range")]
    BadField,

    /// 可用字节不足以解码一个定长结构。
    #[error("not enough data to decode a fixed-size structure")]
    MissingData,

    /// 缓冲区的预留空间无法容纳请求的字节数。
    #[error("buffer cannot make room for the requested bytes")]
    NoRoom,
}
