//! Property-based tests using proptest

use lsbstego_core::{
    bitstream::{find_premature_marker, required_samples},
    embedder::{embed_in_place, embed_samples},
    extractor::{extract_samples, extract_with_stats},
    StegoError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_round_trip_embed_extract(
        payload in prop::collection::vec(any::<u8>(), 0..256),
        cover in prop::collection::vec(any::<u8>(), 4200..6000)
    ) {
        // Payloads carrying the marker pattern early are cut short by design
        prop_assume!(find_premature_marker(&payload).is_none());

        let stego = embed_samples(&cover, &payload).unwrap();
        let extracted = extract_samples(&stego).unwrap();

        prop_assert_eq!(&extracted[..], &payload[..]);
    }

    #[test]
    fn prop_only_lsb_changes(
        payload in prop::collection::vec(any::<u8>(), 0..128),
        cover in prop::collection::vec(any::<u8>(), 2100..3000)
    ) {
        let stego = embed_samples(&cover, &payload).unwrap();
        let used = required_samples(payload.len());

        prop_assert_eq!(stego.len(), cover.len());
        for (i, (before, after)) in cover.iter().zip(stego.iter()).enumerate() {
            prop_assert!(before.abs_diff(*after) <= 1);
            if i >= used {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn prop_capacity_boundary(
        payload in prop::collection::vec(any::<u8>(), 0..64),
        fill in any::<u8>()
    ) {
        let exact = required_samples(payload.len());

        let mut fits = vec![fill; exact];
        let stats = embed_in_place(&mut fits, &payload).unwrap();
        prop_assert_eq!(stats.samples_used, exact);

        let mut short = vec![fill; exact - 1];
        let result = embed_in_place(&mut short, &payload);
        let is_capacity_error = matches!(result, Err(StegoError::CapacityExceeded { .. }));
        prop_assert!(is_capacity_error);
        prop_assert!(short.iter().all(|&s| s == fill));
    }

    #[test]
    fn prop_extract_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..8192)
    ) {
        // Should either succeed or return an error, never panic
        let first = extract_with_stats(&data);
        let second = extract_with_stats(&data);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_extracted_prefix_for_unframeable_payload(
        payload in prop::collection::vec(any::<u8>(), 2..64)
    ) {
        let cover = vec![0u8; required_samples(payload.len())];
        let stego = embed_samples(&cover, &payload).unwrap();

        match find_premature_marker(&payload) {
            None => {
                prop_assert_eq!(&extract_samples(&stego).unwrap()[..], &payload[..]);
            }
            Some(bits) if bits % 8 == 0 => {
                prop_assert_eq!(&extract_samples(&stego).unwrap()[..], &payload[..bits / 8]);
            }
            Some(bits) => {
                prop_assert_eq!(
                    extract_samples(&stego).unwrap_err(),
                    StegoError::Framing { payload_bits: bits }
                );
            }
        }
    }
}
