//! TCP 头部编解码命令行工具
//!
//! 编码：用命令行参数构造一个段（端口按文本解析），pack 后输出
//! 十六进制字节与 JSON 字段；解码：`--decode` 传入十六进制字节，
//! unpack 后输出 JSON 字段。

use clap::Parser;
use netstack_rs::buf::Buffer;
use netstack_rs::tcp::{Control, HEADER_LEN, TcpSegment};

#[derive(Debug, Parser)]
#[command(name = "tcp-header", about = "编解码 20 字节 TCP 头部（无选项）")]
struct Args {
    /// 解码模式：十六进制字节串（至少 20 字节）
    #[arg(long)]
    decode: Option<String>,

    /// 源端口（文本，经端口解析器校验）
    #[arg(long, default_value = "0")]
    source: String,

    /// 目的端口（文本，经端口解析器校验）
    #[arg(long, default_value = "0")]
    destination: String,

    /// 序列号
    #[arg(long, default_value_t = 0)]
    seq: u32,

    /// 确认号
    #[arg(long, default_value_t = 0)]
    ack: u32,

    /// 窗口大小
    #[arg(long, default_value_t = 1)]
    window: u16,

    /// 紧急指针
    #[arg(long, default_value_t = 0)]
    urgent: u16,

    /// 控制位，逗号分隔（如 syn,ack）
    #[arg(long)]
    flags: Option<String>,

    /// 载荷（十六进制字节串），头部会前插在其之前
    #[arg(long)]
    payload: Option<String>,
}

fn parse_hex(text: &str) -> Vec<u8> {
    let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    assert!(text.len() % 2 == 0, "hex input must have an even number of digits");
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&text[i..i + 2], 16).expect("hex digit"))
        .collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn parse_flags(text: &str) -> Control {
    let mut flags = Control::empty();
    for name in text.split(',').filter(|s| !s.is_empty()) {
        let flag = Control::from_name(&name.trim().to_ascii_uppercase())
            .unwrap_or_else(|| panic!("unknown control flag: {name}"));
        flags |= flag;
    }
    flags
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    if let Some(hex) = args.decode {
        let bytes = parse_hex(&hex);
        let buffer = Buffer::from_bytes(&bytes);
        let mut seg = TcpSegment::new();
        seg.unpack(&buffer).expect("decode tcp header");
        let json = serde_json::to_string_pretty(&seg).expect("serialize segment");
        println!("{json}");
        return;
    }

    let mut seg = TcpSegment::new();
    seg.set_source(args.source.as_bytes()).expect("parse source port");
    seg.set_destination(args.destination.as_bytes())
        .expect("parse destination port");
    seg.sequence = args.seq;
    seg.acknowledgment = args.ack;
    seg.window_size = args.window;
    seg.urgent_pointer = args.urgent;
    if let Some(flags) = args.flags.as_deref() {
        seg.control_bits = parse_flags(flags);
    }

    let payload = args.payload.as_deref().map(parse_hex).unwrap_or_default();
    let mut buffer = Buffer::with_reserved(HEADER_LEN + payload.len());
    buffer.push_bytes(&payload).expect("stage payload");
    seg.pack(&mut buffer).expect("pack tcp header");

    println!("{}", to_hex(buffer.as_slice()));
    let json = serde_json::to_string_pretty(&seg).expect("serialize segment");
    println!("{json}");
}
