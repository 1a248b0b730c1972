#![no_main]

use bigmath::radix;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&radix, rest)) = data.split_first() else {
        return;
    };
    let radix = u32::from(radix % 40);
    if let Ok(s) = std::str::from_utf8(rest) {
        if let Ok(value) = radix::parse(s, radix) {
            let text = radix::format(&value, radix).unwrap();
            assert_eq!(radix::parse(&text, radix).unwrap(), value);
        }
    }
});
