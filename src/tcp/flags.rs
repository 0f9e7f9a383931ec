//! TCP 控制位

bitflags::bitflags! {
    /// TCP 头部的九个控制位。
    ///
    /// 任意子集（包括空集）都是合法取值。线上字节/比特位置由
    /// 编解码共用的对应表决定，见 `wire` 模块。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Control: u16 {
        const NS  = 1 << 8;
        const CWR = 1 << 7;
        const ECE = 1 << 6;
        const URG = 1 << 5;
        const ACK = 1 << 4;
        const PSH = 1 << 3;
        const RST = 1 << 2;
        const SYN = 1 << 1;
        const FIN = 1 << 0;
    }
}

impl serde::Serialize for Control {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Control {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}
