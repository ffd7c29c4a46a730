#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // errors are ok, panics are not
    if let Ok(polyline) = flexpolyline::decode(data) {
        // decoded headers are not validated, encoding them must not panic either
        let _ = polyline.encode();
        let _ = polyline.to_string();
    }
    let _ = flexpolyline::peek_third_dimension(data);
});
