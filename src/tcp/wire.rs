//! TCP 头部线上格式
//!
//! 20 字节、网络字节序、不支持选项：
//!
//! ```text
//! | 0-1 源端口 | 2-3 目的端口 | 4-7 序列号 | 8-11 确认号 |
//! | 12 数据偏移(7-4) 保留(3-1) NS(0) | 13 CWR..FIN(7-0) |
//! | 14-15 窗口 | 16-17 校验和 | 18-19 紧急指针 |
//! ```
//!
//! 控制位的字节/掩码位置由 pack 与 unpack 共用一张对应表，
//! 两个方向不会各自漂移。

use tracing::trace;

use super::flags::Control;
use super::segment::TcpSegment;
use crate::buf::Buffer;
use crate::error::Error;

/// TCP 头部长度（字节，无选项）。
pub const HEADER_LEN: usize = 20;

/// 头部固定 5 个 32 位字。
const DATA_OFFSET_WORDS: u8 = 5;

/// 控制位 ↔ (头部字节下标, 掩码) 对应表。
const CONTROL_BITS: [(Control, usize, u8); 9] = [
    (Control::NS, 12, 0x01),
    (Control::CWR, 13, 0x80),
    (Control::ECE, 13, 0x40),
    (Control::URG, 13, 0x20),
    (Control::ACK, 13, 0x10),
    (Control::PSH, 13, 0x08),
    (Control::RST, 13, 0x04),
    (Control::SYN, 13, 0x02),
    (Control::FIN, 13, 0x01),
];

impl TcpSegment {
    /// 将段序列化为 20 字节头部，前插到缓冲区已有数据之前。
    ///
    /// 唯一的失败路径是缓冲区无法预留空间，其错误原样上抛。
    /// `data_offset` 无论当前值如何都会被覆写为 5；校验和恒写 0。
    pub fn pack(&mut self, buffer: &mut Buffer) -> Result<(), Error> {
        self.data_offset = DATA_OFFSET_WORDS;

        buffer.shift(HEADER_LEN)?;
        let header = &mut buffer.as_mut_slice()[..HEADER_LEN];

        header[0..2].copy_from_slice(&self.source.to_be_bytes());
        header[2..4].copy_from_slice(&self.destination.to_be_bytes());
        header[4..8].copy_from_slice(&self.sequence.to_be_bytes());
        header[8..12].copy_from_slice(&self.acknowledgment.to_be_bytes());

        header[12] = DATA_OFFSET_WORDS << 4;
        header[13] = 0;
        for (flag, byte, mask) in CONTROL_BITS {
            if self.control_bits.contains(flag) {
                header[byte] |= mask;
            }
        }

        header[14..16].copy_from_slice(&self.window_size.to_be_bytes());
        // TODO: 校验和计算（需要 IP 伪头部），当前写占位 0
        header[16..18].copy_from_slice(&0u16.to_be_bytes());
        header[18..20].copy_from_slice(&self.urgent_pointer.to_be_bytes());

        trace!(
            source = self.source,
            destination = self.destination,
            control_bits = ?self.control_bits,
            "packed tcp header"
        );
        Ok(())
    }

    /// 从缓冲区前 20 字节填充段字段，不消费这些字节。
    ///
    /// 字节不足时返回 [`Error::MissingData`]，段保持原状。
    /// `data_offset` 按线上实际值读取（不强制为 5），校验和原样读取。
    pub fn unpack(&mut self, buffer: &Buffer) -> Result<(), Error> {
        let data = buffer.as_slice();
        if data.len() < HEADER_LEN {
            return Err(Error::MissingData);
        }
        let header = &data[..HEADER_LEN];

        self.source = u16::from_be_bytes([header[0], header[1]]);
        self.destination = u16::from_be_bytes([header[2], header[3]]);
        self.sequence = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
        self.acknowledgment = u32::from_be_bytes([header[8], header[9], header[10], header[11]]);

        self.data_offset = header[12] >> 4;

        self.control_bits = Control::empty();
        for (flag, byte, mask) in CONTROL_BITS {
            if header[byte] & mask != 0 {
                self.control_bits |= flag;
            }
        }

        self.window_size = u16::from_be_bytes([header[14], header[15]]);
        self.checksum = u16::from_be_bytes([header[16], header[17]]);
        self.urgent_pointer = u16::from_be_bytes([header[18], header[19]]);

        trace!(
            source = self.source,
            destination = self.destination,
            control_bits = ?self.control_bits,
            "unpacked tcp header"
        );
        Ok(())
    }
}
