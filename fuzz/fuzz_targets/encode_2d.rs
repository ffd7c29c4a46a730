#![no_main]

use libfuzzer_sys::fuzz_target;
use flexpolyline::{Point, Polyline};

fuzz_target!(|data: &[u8]| {
    let Some((&precision, data)) = data.split_first() else {
        return;
    };
    let precision = u32::from(precision % 16);
    let scale = 10f64.powi(precision as i32);
    // whole units of the precision so that the round trip is exact
    let points: Vec<Point> = data
        .chunks_exact(8)
        .map(|chunk| {
            let lat = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let lng = i32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            Point::new(f64::from(lat) / scale, f64::from(lng) / scale)
        })
        .collect();

    let polyline = Polyline::from_raw_parts_2d(precision, points).unwrap();
    let decoded = Polyline::decode(polyline.encode()).unwrap();
    assert_eq!(decoded.points().len(), polyline.points().len());
    for (d, p) in decoded.points().iter().zip(polyline.points()) {
        assert_eq!((d.lat * scale).round(), (p.lat * scale).round());
        assert_eq!((d.lng * scale).round(), (p.lng * scale).round());
    }
});
