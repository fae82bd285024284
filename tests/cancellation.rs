//! Every long-running operation honors a stop request.

use std::sync::atomic::{AtomicUsize, Ordering};

use zenrgb565::*;

/// Allows `remaining` checks, then reports cancellation.
struct StopAfter {
    remaining: AtomicUsize,
}

impl StopAfter {
    fn new(checks: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(checks),
        }
    }
}

impl Stop for StopAfter {
    fn check(&self) -> Result<(), StopReason> {
        let left = self.remaining.load(Ordering::Relaxed);
        if left == 0 {
            return Err(StopReason::Cancelled);
        }
        self.remaining.store(left - 1, Ordering::Relaxed);
        Ok(())
    }
}

fn image(w: u32, h: u32) -> PixelBuffer {
    let pixels = (0..w * h)
        .map(|i| RGB8::new(i as u8, (i >> 8) as u8, 7))
        .collect();
    PixelBuffer::new(pixels, w, h).unwrap()
}

fn is_cancelled<T: std::fmt::Debug>(result: Result<T, FrameError>) -> bool {
    matches!(result, Err(FrameError::Cancelled(StopReason::Cancelled)))
}

#[test]
fn stopped_before_start() {
    let img = image(40, 40);
    let bmp = encode_bmp(&img, Unstoppable).unwrap();

    assert!(is_cancelled(decode_bmp(&bmp, StopAfter::new(0))));
    assert!(is_cancelled(resize_bilinear(img.clone(), 80, 60, &StopAfter::new(0))));
    assert!(is_cancelled(encode_hex(&img, StopAfter::new(0))));
    assert!(is_cancelled(encode_ppm(&img, StopAfter::new(0))));
    assert!(is_cancelled(encode_bmp(&img, StopAfter::new(0))));
    assert!(is_cancelled(write_hex(&img, Vec::new(), StopAfter::new(0))));
    assert!(is_cancelled(write_ppm(&img, Vec::new(), StopAfter::new(0))));
    assert!(is_cancelled(bmp_to_hex(&bmp, StopAfter::new(0))));
}

#[test]
fn stopped_part_way_through_rows() {
    // 40 rows are checked at rows 0, 16 and 32; allow only the first.
    let img = image(40, 40);
    let bmp = encode_bmp(&img, Unstoppable).unwrap();

    // decode checks once after the header, once before the rows
    assert!(is_cancelled(decode_bmp(&bmp, StopAfter::new(3))));
    assert!(is_cancelled(resize_bilinear(img.clone(), 40, 41, &StopAfter::new(1))));
    assert!(is_cancelled(encode_hex(&img, StopAfter::new(1))));
    assert!(is_cancelled(encode_ppm(&img, StopAfter::new(1))));
}

#[test]
fn enough_checks_let_work_finish() {
    let img = image(40, 40);
    let bmp = encode_bmp(&img, Unstoppable).unwrap();

    assert_eq!(decode_bmp(&bmp, StopAfter::new(5)).unwrap(), img);
    assert!(resize_bilinear(img.clone(), 40, 41, &StopAfter::new(3)).is_ok());
    assert!(encode_hex(&img, StopAfter::new(3)).is_ok());
    assert!(encode_ppm(&img, StopAfter::new(3)).is_ok());
}

#[test]
fn unchanged_size_needs_no_check() {
    let img = image(8, 8);
    let out = resize_bilinear(img.clone(), 8, 8, &StopAfter::new(0)).unwrap();
    assert_eq!(out, img);
}
