#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // BMP parsing must never panic
    let _ = zenrgb565::probe_bmp(data);
    let limits = zenrgb565::Limits::default().with_max_pixels(1 << 22);
    let _ = zenrgb565::decode_bmp_with_limits(data, &limits, enough::Unstoppable);

    // Hex decoding always yields exactly the requested count
    let frame = zenrgb565::decode_hex_with_count(data, 64).unwrap();
    assert_eq!(frame.colors().len(), 64);
    assert_eq!(
        frame.stats().data_lines + frame.stats().padded_pixels,
        64,
        "data and padding must fill the quota"
    );
});
