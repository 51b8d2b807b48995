//! Signed-container assembly and splitting.

use crate::error::{Error, Result};

/// Byte sequence separating document content from the trailing signature.
pub const SIGNATURE_MARKER: &[u8] = b"\n%%PAdES_SIGNATURE%%\n";

/// Assemble a signed container: `content ‖ marker ‖ signature`.
pub fn build_container(content: &[u8], signature: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + SIGNATURE_MARKER.len() + signature.len());
    out.extend_from_slice(content);
    out.extend_from_slice(SIGNATURE_MARKER);
    out.extend_from_slice(signature);
    out
}

/// Split a signed container into `(content, signature)`.
///
/// The split happens at the first marker occurrence; the first match is
/// authoritative so splitting stays deterministic even when the content
/// bytes happen to contain the marker themselves. Returns
/// [`Error::NotSigned`] when no marker is present.
pub fn split_container(data: &[u8]) -> Result<(&[u8], &[u8])> {
    let pos = find_marker(data).ok_or(Error::NotSigned)?;
    let content = &data[..pos];
    let signature = &data[pos + SIGNATURE_MARKER.len()..];
    Ok((content, signature))
}

fn find_marker(data: &[u8]) -> Option<usize> {
    data.windows(SIGNATURE_MARKER.len())
        .position(|window| window == SIGNATURE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip() {
        let content = b"%PDF-1.4 pretend document";
        let signature = [0xabu8; 512];

        let container = build_container(content, &signature);
        let (c, s) = split_container(&container).unwrap();
        assert_eq!(c, content);
        assert_eq!(s, &signature[..]);
    }

    #[test]
    fn test_empty_content_round_trip() {
        let container = build_container(b"", &[1, 2, 3]);
        let (c, s) = split_container(&container).unwrap();
        assert!(c.is_empty());
        assert_eq!(s, &[1, 2, 3]);
    }

    #[test]
    fn test_unsigned_data_rejected() {
        let err = split_container(b"no marker anywhere").unwrap_err();
        assert!(matches!(err, Error::NotSigned));
    }

    #[test]
    fn test_short_data_rejected() {
        assert!(matches!(split_container(b"\n%%"), Err(Error::NotSigned)));
        assert!(matches!(split_container(b""), Err(Error::NotSigned)));
    }

    #[test]
    fn test_first_marker_wins() {
        // Content containing the marker splits at its first occurrence; the
        // remainder, marker included, lands in the signature part.
        let mut content = b"before".to_vec();
        content.extend_from_slice(SIGNATURE_MARKER);
        content.extend_from_slice(b"after");

        let container = build_container(&content, b"sig");
        let (c, s) = split_container(&container).unwrap();
        assert_eq!(c, b"before");

        let mut expected_tail = b"after".to_vec();
        expected_tail.extend_from_slice(SIGNATURE_MARKER);
        expected_tail.extend_from_slice(b"sig");
        assert_eq!(s, &expected_tail[..]);
    }

    #[test]
    fn test_marker_in_signature_is_harmless() {
        let mut signature = vec![0u8; 100];
        signature.extend_from_slice(SIGNATURE_MARKER);
        let container = build_container(b"doc", &signature);
        let (c, s) = split_container(&container).unwrap();
        assert_eq!(c, b"doc");
        assert_eq!(s, &signature[..]);
    }

    fn contains_marker(data: &[u8]) -> bool {
        super::find_marker(data).is_some()
    }

    proptest! {
        #[test]
        fn prop_round_trip_for_marker_free_content(
            content in proptest::collection::vec(any::<u8>(), 0..2048),
            signature in proptest::collection::vec(any::<u8>(), 0..600),
        ) {
            prop_assume!(!contains_marker(&content));
            let container = build_container(&content, &signature);
            let (c, s) = split_container(&container).unwrap();
            prop_assert_eq!(c, &content[..]);
            prop_assert_eq!(s, &signature[..]);
        }
    }
}
