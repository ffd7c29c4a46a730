#![no_main]

use libfuzzer_sys::fuzz_target;
use flexpolyline::FlexVarIntBuf;

fuzz_target!(|data: &[u8]| {
    // decode errors are ok, panics are not
    let mut src = data;
    for value in src.iter_flex_varint::<u64>() {
        if value.is_err() {
            break;
        }
    }
});
