//! 字节缓冲区
//!
//! 一段连续的字节区域，带有调用方指定的预留上限。协议层通过
//! `shift` 在已序列化的上层数据之前预留头部空间，再经由切片视图
//! 写入各字段。

use tracing::trace;

use crate::error::Error;

/// 连续字节缓冲区。
///
/// `len()` 是当前有效字节数；`reserved` 是构造时确定的容量上限，
/// `shift` 超出上限时返回 [`Error::NoRoom`]。
#[derive(Debug, Clone)]
pub struct Buffer {
    data: Vec<u8>,
    reserved: usize,
}

impl Buffer {
    /// 创建一个空缓冲区，预留 `reserved` 字节。
    pub fn with_reserved(reserved: usize) -> Self {
        Self {
            data: Vec::with_capacity(reserved),
            reserved,
        }
    }

    /// 用现有字节创建缓冲区；预留上限即初始长度。
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
            reserved: bytes.len(),
        }
    }

    /// 当前有效字节数。
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 预留上限。
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// 在尾部追加字节（例如载荷），受预留上限约束。
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if self.data.len() + bytes.len() > self.reserved {
            return Err(Error::NoRoom);
        }
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// 在前端预留 `n` 个清零字节，已有数据整体后移。
    ///
    /// 调用后此前获取的任何切片视图都已失效，必须重新获取。
    pub fn shift(&mut self, n: usize) -> Result<(), Error> {
        let old = self.data.len();
        if old + n > self.reserved {
            return Err(Error::NoRoom);
        }
        self.data.resize(old + n, 0);
        self.data.copy_within(0..old, n);
        self.data[..n].fill(0);
        trace!(n, len = self.data.len(), "shifted buffer front");
        Ok(())
    }
}
