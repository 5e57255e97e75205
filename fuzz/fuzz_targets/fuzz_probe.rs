#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match imgprobe_core::probe_bytes(data) {
        Ok(result) => {
            assert_eq!(result.file_size(), data.len() as u64);
            assert!(result.blank_header_len() <= 8);
            if !result.is_known() {
                assert_eq!(result.width(), 0);
                assert_eq!(result.height(), 0);
            }
        }
        Err(e) => assert!(e.is_fatal()),
    }
});
