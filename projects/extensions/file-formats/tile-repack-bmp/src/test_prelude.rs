//! Common test imports and bitmap fixture builders.
#![allow(unused_imports)]

extern crate alloc;

pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::{parse_bmp, BmpError, BmpInfo};

use crate::bmp::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Writes a little endian u32 at `offset`.
pub fn write_u32(data: &mut [u8], offset: usize, value: u32) {
    assert!(offset + 4 <= data.len());
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u32_at(value, offset as isize) };
}

/// Writes a little endian u16 at `offset`.
pub fn write_u16(data: &mut [u8], offset: usize, value: u16) {
    assert!(offset + 2 <= data.len());
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u16_at(value, offset as isize) };
}

/// Creates a valid bitmap with a zeroed palette and a `0, 1, 2, ...` pixel pattern.
pub fn create_bmp(width: u32, height: u32, depth: u16) -> Vec<u8> {
    let palette_len = (1usize << depth) * BMP_PALETTE_ENTRY_SIZE;
    let pixel_len = (width * height * depth as u32 / 8) as usize;
    let total = BMP_HEADER_SIZE + palette_len + pixel_len;
    let mut data = vec![0u8; total];

    data[0..2].copy_from_slice(b"BM");
    write_u32(&mut data, FILE_SIZE_OFFSET, total as u32);
    write_u32(&mut data, 10, (BMP_HEADER_SIZE + palette_len) as u32);
    write_u32(&mut data, 14, 40);
    write_u32(&mut data, WIDTH_OFFSET, width);
    write_u32(&mut data, HEIGHT_OFFSET, height);
    write_u16(&mut data, 26, 1);
    write_u16(&mut data, BIT_COUNT_OFFSET, depth);

    for (index, byte) in data[BMP_HEADER_SIZE + palette_len..].iter_mut().enumerate() {
        *byte = index as u8;
    }
    data
}
