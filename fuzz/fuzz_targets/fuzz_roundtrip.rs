#![no_main]
use libfuzzer_sys::fuzz_target;
use zenrgb565::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick a small size; the rest are pixel bytes
    let [w, h, rest @ ..] = data else { return };
    let (w, h) = (u32::from(*w % 16) + 1, u32::from(*h % 16) + 1);
    let count = (w * h) as usize;
    if rest.len() < count * 3 {
        return;
    }
    let pixels = rest[..count * 3]
        .chunks_exact(3)
        .map(|c| RGB8::new(c[0], c[1], c[2]))
        .collect();
    let img = PixelBuffer::new(pixels, w, h).unwrap();

    // BMP roundtrip is lossless in both orientations
    for bmp in [
        encode_bmp(&img, enough::Unstoppable).unwrap(),
        encode_bmp_top_down(&img, enough::Unstoppable).unwrap(),
    ] {
        let decoded = decode_bmp(&bmp, enough::Unstoppable).expect("re-encoded BMP failed to decode");
        assert_eq!(decoded, img, "BMP roundtrip pixel mismatch");
    }

    // Hex roundtrip preserves the RGB565 quantization
    let hex = encode_hex(&img, enough::Unstoppable).unwrap();
    let frame = decode_hex_with_count(hex.as_bytes(), count).unwrap();
    assert!(frame.stats().is_clean());
    for (got, px) in frame.colors().iter().zip(img.pixels()) {
        assert_eq!(*got, Rgb565::from(*px));
    }
});
