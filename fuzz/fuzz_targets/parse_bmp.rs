#![no_main]

use libfuzzer_sys::fuzz_target;
use tile_repack_bmp::parse_bmp;

// Any accepted header must describe a palette and pixel area inside the buffer.
fuzz_target!(|data: &[u8]| {
    let Ok(info) = parse_bmp(data) else {
        return;
    };

    assert_eq!(info.file_size as usize, data.len());
    assert!(info.palette_range().end <= data.len());
    assert!(info.palette_range().end as u128 + info.pixel_data_len() <= data.len() as u128);
});
