use crate::buf::Buffer;
use crate::error::Error;
use crate::tcp::{Control, HEADER_LEN, TcpSegment};

fn packed(seg: &mut TcpSegment) -> Vec<u8> {
    let mut buf = Buffer::with_reserved(HEADER_LEN);
    seg.pack(&mut buf).unwrap();
    buf.as_slice().to_vec()
}

#[test]
fn pack_writes_the_exact_wire_layout() {
    let mut seg = TcpSegment::new();
    seg.set_source(b"8080").unwrap();
    seg.set_destination(b"80").unwrap();
    seg.sequence = 1;
    seg.acknowledgment = 0;
    seg.control_bits = Control::SYN;
    seg.window_size = 65535;

    let bytes = packed(&mut seg);
    assert_eq!(
        bytes,
        vec![
            0x1f, 0x90, // source port 8080
            0x00, 0x50, // destination port 80
            0x00, 0x00, 0x00, 0x01, // sequence 1
            0x00, 0x00, 0x00, 0x00, // acknowledgment 0
            0x50, 0x02, // data offset 5, SYN
            0xff, 0xff, // window 65535
            0x00, 0x00, // checksum placeholder
            0x00, 0x00, // urgent pointer
        ]
    );
}

#[test]
fn pack_forces_data_offset_to_five() {
    let mut seg = TcpSegment::new();
    seg.data_offset = 9;
    let bytes = packed(&mut seg);
    assert_eq!(bytes[12] >> 4, 5);
    assert_eq!(seg.data_offset, 5);
}

#[test]
fn pack_zeroes_the_checksum_even_when_set() {
    let mut seg = TcpSegment::new();
    seg.checksum = 0xdead;
    let bytes = packed(&mut seg);
    assert_eq!(&bytes[16..18], &[0, 0]);
}

#[test]
fn pack_prepends_ahead_of_payload() {
    let payload = [0xde, 0xad, 0xbe, 0xef];
    let mut buf = Buffer::with_reserved(HEADER_LEN + payload.len());
    buf.push_bytes(&payload).unwrap();

    let mut seg = TcpSegment::new();
    seg.set_source(b"443").unwrap();
    seg.pack(&mut buf).unwrap();

    assert_eq!(buf.len(), HEADER_LEN + payload.len());
    assert_eq!(&buf.as_slice()[HEADER_LEN..], &payload);
    assert_eq!(&buf.as_slice()[0..2], &443u16.to_be_bytes());
}

#[test]
fn pack_reports_the_buffer_error_when_out_of_room() {
    let mut buf = Buffer::with_reserved(HEADER_LEN - 1);
    let mut seg = TcpSegment::new();
    assert_eq!(seg.pack(&mut buf), Err(Error::NoRoom));
}

#[test]
fn round_trip_preserves_every_field() {
    let mut seg = TcpSegment::new();
    seg.set_source(b"65535").unwrap();
    seg.set_destination(b"1024").unwrap();
    seg.sequence = 0xdead_beef;
    seg.acknowledgment = 0x0102_0304;
    seg.data_offset = 12; // irrelevant: pack forces 5
    seg.control_bits = Control::NS | Control::ACK | Control::FIN;
    seg.window_size = 29200;
    seg.checksum = 0xffff; // zeroed on the wire
    seg.urgent_pointer = 7;

    let mut buf = Buffer::with_reserved(HEADER_LEN);
    seg.pack(&mut buf).unwrap();

    let mut out = TcpSegment::new();
    out.unpack(&buf).unwrap();

    assert_eq!(out.source, 65535);
    assert_eq!(out.destination, 1024);
    assert_eq!(out.sequence, 0xdead_beef);
    assert_eq!(out.acknowledgment, 0x0102_0304);
    assert_eq!(out.data_offset, 5);
    assert_eq!(out.control_bits, Control::NS | Control::ACK | Control::FIN);
    assert_eq!(out.window_size, 29200);
    assert_eq!(out.checksum, 0);
    assert_eq!(out.urgent_pointer, 7);
}

#[test]
fn each_control_flag_round_trips_alone() {
    for flag in [
        Control::NS,
        Control::CWR,
        Control::ECE,
        Control::URG,
        Control::ACK,
        Control::PSH,
        Control::RST,
        Control::SYN,
        Control::FIN,
    ] {
        let mut seg = TcpSegment::new();
        seg.control_bits = flag;
        let mut buf = Buffer::with_reserved(HEADER_LEN);
        seg.pack(&mut buf).unwrap();

        let mut out = TcpSegment::new();
        out.unpack(&buf).unwrap();
        assert_eq!(out.control_bits, flag, "flag {flag:?} did not round trip");
    }
}

#[test]
fn arbitrary_flag_combinations_round_trip() {
    let combos = [
        Control::empty(),
        Control::SYN | Control::ACK,
        Control::CWR | Control::ECE | Control::NS,
        Control::all(),
    ];
    for flags in combos {
        let mut seg = TcpSegment::new();
        seg.control_bits = flags;
        let mut buf = Buffer::with_reserved(HEADER_LEN);
        seg.pack(&mut buf).unwrap();

        let mut out = TcpSegment::new();
        out.unpack(&buf).unwrap();
        assert_eq!(out.control_bits, flags);
    }
}

#[test]
fn unpack_reads_data_offset_as_found_on_the_wire() {
    let mut bytes = [0u8; HEADER_LEN];
    bytes[12] = 0x60; // data offset 6 (options present, unsupported but reported)
    let buf = Buffer::from_bytes(&bytes);

    let mut seg = TcpSegment::new();
    seg.unpack(&buf).unwrap();
    assert_eq!(seg.data_offset, 6);
}

#[test]
fn unpack_reads_checksum_verbatim() {
    let mut bytes = [0u8; HEADER_LEN];
    bytes[16] = 0xab;
    bytes[17] = 0xcd;
    let buf = Buffer::from_bytes(&bytes);

    let mut seg = TcpSegment::new();
    seg.unpack(&buf).unwrap();
    assert_eq!(seg.checksum, 0xabcd);
}

#[test]
fn unpack_does_not_consume_buffer_bytes() {
    let mut seg = TcpSegment::new();
    seg.window_size = 1234;
    let mut buf = Buffer::with_reserved(HEADER_LEN);
    seg.pack(&mut buf).unwrap();
    let before = buf.as_slice().to_vec();

    let mut out = TcpSegment::new();
    out.unpack(&buf).unwrap();
    assert_eq!(buf.as_slice(), &before[..]);
    assert_eq!(buf.len(), HEADER_LEN);
}

#[test]
fn unpack_short_buffer_fails_and_leaves_segment_alone() {
    let buf = Buffer::from_bytes(&[0u8; HEADER_LEN - 1]);

    let mut seg = TcpSegment::new();
    seg.set_source(b"8080").unwrap();
    seg.sequence = 42;
    assert_eq!(seg.unpack(&buf), Err(Error::MissingData));
    // The length check runs before any field is touched.
    assert_eq!(seg.source, 8080);
    assert_eq!(seg.sequence, 42);
    assert_eq!(seg.window_size, 1);
}
