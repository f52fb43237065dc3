#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use asn1_useful::{GeneralizedTime, UtcTime};
use asn1_useful::time::{self, YearDigits};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // The free functions must accept anything without panicking.
        for &digits in &[YearDigits::Four, YearDigits::Two] {
            if let Ok(value) = time::parse(s, digits) {
                // Whatever parses must format and parse back the same.
                let formatted = time::format(&value, digits).unwrap();
                let reparsed = time::parse(&formatted, digits).unwrap();
                assert_eq!(reparsed.naive(), value.naive());
                // Naive values come back as UTC.
                assert_eq!(
                    reparsed.timezone().map(|tz| tz.offset_minutes()),
                    Some(value.timezone().map_or(0, |tz| tz.offset_minutes()))
                );
            }
        }
    }

    let data = Bytes::copy_from_slice(data);
    if let Ok(gt) = GeneralizedTime::new(data.clone()) {
        if let Ok(value) = gt.to_calendar() {
            assert_eq!(
                GeneralizedTime::from_calendar(&value).to_calendar()
                    .map(|v| v.naive()),
                Ok(value.naive())
            );
        }
    }
    if let Ok(ut) = UtcTime::new(data) {
        if let Ok(value) = ut.to_calendar() {
            assert!(UtcTime::try_from_calendar(&value).is_ok());
        }
    }
});
