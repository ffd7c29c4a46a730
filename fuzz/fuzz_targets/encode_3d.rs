#![no_main]

use libfuzzer_sys::fuzz_target;
use flexpolyline::{Point, Polyline};

fuzz_target!(|data: &[u8]| {
    let Some((&header, data)) = data.split_first() else {
        return;
    };
    let kind = [1u8, 2, 3, 6, 7][usize::from(header >> 4) % 5];
    let precision3d = u32::from(header % 16);
    let scale = 10f64.powi(precision3d as i32);
    let points: Vec<Point> = data
        .chunks_exact(4)
        .map(|chunk| {
            let z = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            Point::with_z(0.0, 0.0, f64::from(z) / scale)
        })
        .collect();

    let polyline = Polyline::from_raw_parts(kind, 0, precision3d, points).unwrap();
    let encoded = polyline.encode();
    assert_eq!(
        flexpolyline::peek_third_dimension(&encoded).unwrap(),
        polyline.third_dimension()
    );
    let decoded = Polyline::decode(encoded).unwrap();
    for (d, p) in decoded.points().iter().zip(polyline.points()) {
        assert_eq!((d.z * scale).round(), (p.z * scale).round());
    }
});
