//! TCP 段模型

use serde::{Deserialize, Serialize};

use super::flags::Control;
use super::port::parse_port;
use crate::error::Error;
use crate::mutator::Mutator;

/// 一个传输段的头部字段（无选项）。
///
/// 纯值数据，不持有任何外部资源；由调用方完全拥有，
/// 可经 setter、mutator 或 `unpack` 自由修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpSegment {
    /// 源端口
    pub source: u16,
    /// 目的端口
    pub destination: u16,
    /// 序列号
    pub sequence: u32,
    /// 确认号
    pub acknowledgment: u32,
    /// 头部长度（32 位字数）；本层只支持 5（20 字节，无选项），
    /// pack 时无论当前值如何都会覆写为 5
    pub data_offset: u8,
    /// 控制位集合
    pub control_bits: Control,
    /// 窗口大小
    pub window_size: u16,
    /// 校验和；pack 时恒写 0（暂不计算），unpack 时按线上值读取
    pub checksum: u16,
    /// 紧急指针
    pub urgent_pointer: u16,
}

impl Default for TcpSegment {
    fn default() -> Self {
        Self {
            source: 0,
            destination: 0,
            sequence: 0,
            acknowledgment: 0,
            data_offset: 5,
            control_bits: Control::empty(),
            window_size: 1,
            checksum: 0,
            urgent_pointer: 0,
        }
    }
}

impl TcpSegment {
    /// 创建一个取默认值的段。
    pub fn new() -> Self {
        Self::default()
    }

    /// 从文本设置源端口。
    ///
    /// 失败时上抛解析错误；此时字段取值视为未定义，
    /// 调用方不应假定旧值保留或被清除。
    pub fn set_source(&mut self, text: &[u8]) -> Result<(), Error> {
        self.source = parse_port(text)?;
        Ok(())
    }

    /// 从文本设置目的端口。失败语义同 [`set_source`](Self::set_source)。
    pub fn set_destination(&mut self, text: &[u8]) -> Result<(), Error> {
        self.destination = parse_port(text)?;
        Ok(())
    }

    /// 应用可选的 mutator 能力。
    ///
    /// 未附加 mutator 时是成功的空操作；附加时直接返回其结果。
    pub fn mutate(&mut self, mutator: Option<&dyn Mutator>) -> Result<(), Error> {
        match mutator {
            Some(m) => m.mutate_tcp(self),
            None => Ok(()),
        }
    }
}
