//! Test corpus: BMP decoding across sizes and row paddings, and noisy hex streams.

use zenrgb565::*;

fn checkerboard(w: u32, h: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            pixels.push(if (x + y) % 2 == 0 {
                RGB8::new(200, 220, 240)
            } else {
                RGB8::new(10, 40, 70)
            });
        }
    }
    PixelBuffer::new(pixels, w, h).unwrap()
}

fn noise_pattern(w: u32, h: u32) -> PixelBuffer {
    let mut state: u32 = 0xCAFE_BABE;
    let pixels = (0..w * h)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            RGB8::new(state as u8, (state >> 8) as u8, (state >> 16) as u8)
        })
        .collect();
    PixelBuffer::new(pixels, w, h).unwrap()
}

// ── BMP decoding ─────────────────────────────────────────────────────

#[test]
fn every_row_padding_decodes() {
    // widths 1..=8 cover padding of 1, 2, 3 and 0 bytes twice over
    for w in 1..=8 {
        for h in [1, 2, 5] {
            let img = noise_pattern(w, h);
            for bmp in [
                encode_bmp(&img, Unstoppable).unwrap(),
                encode_bmp_top_down(&img, Unstoppable).unwrap(),
            ] {
                let header = probe_bmp(&bmp).unwrap();
                assert_eq!(header.row_stride().unwrap() % 4, 0);
                assert!(header.row_stride().unwrap() >= w as usize * 3);
                let decoded = decode_bmp(&bmp, Unstoppable).unwrap();
                assert_eq!(decoded, img, "{w}x{h} top_down={}", header.is_top_down());
            }
        }
    }
}

#[test]
fn padding_bytes_are_ignored() {
    let img = checkerboard(5, 3);
    let mut bmp = encode_bmp(&img, Unstoppable).unwrap();
    let header = probe_bmp(&bmp).unwrap();
    let stride = header.row_stride().unwrap();
    let offset = header.data_offset as usize;
    // width 5 -> 15 pixel bytes + 1 padding byte per row
    for row in 0..3 {
        bmp[offset + row * stride + 15] = 0xAB;
    }
    assert_eq!(decode_bmp(&bmp, Unstoppable).unwrap(), img);
}

#[test]
fn pixel_data_offset_is_honored() {
    let img = checkerboard(2, 2);
    let bmp = encode_bmp(&img, Unstoppable).unwrap();

    // Insert 10 junk bytes between header and pixel data.
    let mut shifted = bmp[..54].to_vec();
    shifted.extend_from_slice(&[0xEE; 10]);
    shifted.extend_from_slice(&bmp[54..]);
    shifted[10..14].copy_from_slice(&64u32.to_le_bytes());

    assert_eq!(decode_bmp(&shifted, Unstoppable).unwrap(), img);
}

#[test]
fn larger_info_headers_are_accepted() {
    // Report a 124-byte (V5) header; the first 40 bytes keep their layout.
    let img = checkerboard(3, 3);
    let mut bmp = encode_bmp(&img, Unstoppable).unwrap();
    bmp[14..18].copy_from_slice(&124u32.to_le_bytes());
    let header = probe_bmp(&bmp).unwrap();
    assert_eq!(header.info_size, 124);
    assert_eq!(decode_bmp(&bmp, Unstoppable).unwrap(), img);
}

#[test]
fn os2_core_header_is_unsupported() {
    let mut bmp = encode_bmp(&checkerboard(1, 1), Unstoppable).unwrap();
    bmp[14..18].copy_from_slice(&12u32.to_le_bytes());
    assert!(matches!(
        decode_bmp(&bmp, Unstoppable),
        Err(FrameError::UnsupportedVariant(_))
    ));
}

#[test]
fn non_bmp_inputs_are_rejected() {
    for data in [&b"P6\n1 1\n255\n\0\0\0"[..], b"GIF89a", b"B"] {
        match decode_bmp(data, Unstoppable) {
            Err(FrameError::InvalidSignature { .. }) | Err(FrameError::UnexpectedEof) => {}
            other => panic!("expected rejection, got {other:?}"),
        }
    }
    assert!(matches!(
        decode_bmp(b"", Unstoppable),
        Err(FrameError::UnexpectedEof)
    ));
}

#[test]
fn bit_depth_and_compression_are_checked() {
    let bmp = encode_bmp(&checkerboard(2, 2), Unstoppable).unwrap();

    let mut depth32 = bmp.clone();
    depth32[28..30].copy_from_slice(&32u16.to_le_bytes());
    assert!(matches!(
        decode_bmp(&depth32, Unstoppable),
        Err(FrameError::UnsupportedVariant(_))
    ));

    let mut rle = bmp.clone();
    rle[30..34].copy_from_slice(&1u32.to_le_bytes());
    assert!(matches!(
        decode_bmp(&rle, Unstoppable),
        Err(FrameError::UnsupportedVariant(_))
    ));
}

#[test]
fn limits_reject_large() {
    let bmp = encode_bmp(&checkerboard(4, 4), Unstoppable).unwrap();

    let tight = Limits::default().with_max_dimensions(3, 100);
    assert!(matches!(
        decode_bmp_with_limits(&bmp, &tight, Unstoppable),
        Err(FrameError::LimitExceeded(_))
    ));

    let memory = Limits::default().with_max_memory(47);
    assert!(matches!(
        decode_bmp_with_limits(&bmp, &memory, Unstoppable),
        Err(FrameError::LimitExceeded(_))
    ));

    let roomy = Limits::default().with_max_pixels(16).with_max_memory(48);
    assert!(decode_bmp_with_limits(&bmp, &roomy, Unstoppable).is_ok());
}

#[test]
fn truncated_files_never_panic() {
    let bmp = encode_bmp(&noise_pattern(7, 4), Unstoppable).unwrap();
    for len in 0..bmp.len() {
        let result = decode_bmp(&bmp[..len], Unstoppable);
        // the last row may drop its single padding byte
        if len >= bmp.len() - 3 {
            assert!(result.is_ok(), "len {len}");
        } else {
            assert!(result.is_err(), "len {len}");
        }
    }
}

#[test]
fn arbitrary_sizes_resize_to_frame() {
    for (w, h) in [(1, 1), (3, 7), (640, 480), (321, 239), (1000, 2)] {
        let out = resize_to_frame(checkerboard(w, h), Unstoppable).unwrap();
        assert!(out.has_dimensions(FRAME_WIDTH, FRAME_HEIGHT), "{w}x{h}");
    }
}

#[test]
fn uniform_image_stays_uniform() {
    let color = RGB8::new(77, 150, 201);
    let flat = PixelBuffer::try_filled(13, 11, color).unwrap();
    let out = resize_to_frame(flat, Unstoppable).unwrap();
    // Mixed weights may land a hair under the true value before truncation.
    for px in out.pixels() {
        assert!(px.r.abs_diff(color.r) <= 1, "{px:?}");
        assert!(px.g.abs_diff(color.g) <= 1, "{px:?}");
        assert!(px.b.abs_diff(color.b) <= 1, "{px:?}");
    }
}

// ── Hex streams ──────────────────────────────────────────────────────

#[test]
fn simulator_dump_with_noise() {
    let text = "\
// memory dump of frame_buffer
// width=4 height=2

F800
  07E0
001F\r
xxxx
XXXX
FFFF trailing
12345
0x00
zz

FFFF
1
";
    let frame = decode_hex_with_count(text.as_bytes(), 8).unwrap();
    let bits: Vec<u16> = frame.colors().iter().map(|c| c.to_bits()).collect();
    assert_eq!(bits, [0xF800, 0x07E0, 0x001F, 0xFFFF, 0x0001, 1, 1, 1]);

    let stats = frame.stats();
    assert_eq!(stats.data_lines, 5);
    assert_eq!(stats.comment_lines, 2);
    assert_eq!(stats.blank_lines, 2);
    assert_eq!(stats.placeholder_lines, 3);
    assert_eq!(stats.malformed_lines, 3);
    assert_eq!(stats.padded_pixels, 3);
    assert!(!stats.stopped_early);
}

#[test]
fn line_classes() {
    let cases = [
        ("FFFF\n", HexLine::Data(Rgb565::from_bits(0xFFFF))),
        ("1\n", HexLine::Data(Rgb565::from_bits(0x0001))),
        ("beef\n", HexLine::Data(Rgb565::from_bits(0xBEEF))),
        ("//comment\n", HexLine::Comment),
        ("xxxx\n", HexLine::Placeholder),
        ("12G4\n", HexLine::Malformed),
        ("\n", HexLine::Blank),
    ];
    for (line, expected) in cases {
        let class = HexLine::classify(line.as_bytes());
        assert_eq!(class, expected, "{line:?}");
        assert_eq!(class.value(), expected.value());
    }
}

#[test]
fn quota_stops_reading() {
    let mut text = String::new();
    for i in 0..(TOTAL_PIXELS + 10) {
        text.push_str(&format!("{:04X}\n", i as u16));
    }
    let frame = decode_hex(text.as_bytes()).unwrap();
    assert_eq!(frame.colors().len(), TOTAL_PIXELS);
    assert_eq!(
        frame.colors()[TOTAL_PIXELS - 1].to_bits(),
        (TOTAL_PIXELS - 1) as u16
    );
    assert!(frame.stats().stopped_early);
    assert_eq!(frame.stats().padded_pixels, 0);
}

#[test]
fn oversized_quota_is_an_error() {
    assert!(matches!(
        decode_hex_with_count(b"0001\n", usize::MAX),
        Err(FrameError::AllocationFailed { .. })
    ));
}

#[test]
fn garbage_bytes_never_panic() {
    let mut state: u32 = 0x1234_5678;
    let mut data: Vec<u8> = (0..4096)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect();
    data[0] = b'?';
    let frame = decode_hex_with_count(&data, 100).unwrap();
    assert_eq!(frame.colors().len(), 100);
    assert!(decode_bmp(&data, Unstoppable).is_err());
}
