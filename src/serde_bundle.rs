//! Canonical base64 and hex encodings of [`Bundle`]s.
//!
//! Both encodings share the same field-by-field shape: `required_shares`
//! passes through as-is, `prime_mod`/`prime2`/`generator` are encoded
//! from `int_to_bytes`, each share is the string `"{x}-{enc(y_bytes)}"`,
//! and each commit is `enc(bytes)`. The hex encoding omits `prime2` and
//! `generator` on the way out and therefore cannot reconstruct a
//! verifiable bundle on the way back in — that asymmetry is preserved
//! from the scheme this crate implements, not accidental.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use num_bigint::BigUint;

use crate::codec;
use crate::error::Error;
use crate::shamir::{Bundle, Share};

/// The textual form of a [`Bundle`]: same fields, bytes encoded as
/// base64 or hex strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBundle {
    pub required_shares: Option<u16>,
    pub prime_mod: String,
    pub prime2: String,
    pub generator: String,
    pub shares: Vec<String>,
    pub commits: Vec<String>,
}

fn encode_share(engine_encode: impl Fn(&[u8]) -> String, share: &Share) -> String {
    format!("{}-{}", share.x, engine_encode(&share.y_bytes))
}

fn decode_share(
    engine_decode: impl Fn(&str) -> Result<Vec<u8>, Error>,
    s: &str,
) -> Result<Share, Error> {
    let (x_str, y_str) = s
        .split_once('-')
        .ok_or_else(|| Error::Codec(format!("malformed share string: {}", s)))?;
    let x: u16 = x_str
        .parse()
        .map_err(|_| Error::Codec(format!("malformed share index: {}", x_str)))?;
    let y_bytes = engine_decode(y_str)?;
    Ok(Share { x, y_bytes })
}

fn b64_encode(b: &[u8]) -> String {
    B64.encode(b)
}

fn b64_decode(s: &str) -> Result<Vec<u8>, Error> {
    B64.decode(s).map_err(|e| Error::Codec(e.to_string()))
}

fn hex_decode(s: &str) -> Result<Vec<u8>, Error> {
    hex::decode(s).map_err(|e| Error::Codec(e.to_string()))
}

pub fn to_base64(bundle: &Bundle) -> TextBundle {
    TextBundle {
        required_shares: bundle.required_shares,
        prime_mod: b64_encode(&codec::int_to_bytes(&bundle.prime_mod)),
        prime2: b64_encode(&codec::int_to_bytes(&bundle.prime2)),
        generator: b64_encode(&codec::int_to_bytes(&bundle.generator)),
        shares: bundle.shares.iter().map(|s| encode_share(b64_encode, s)).collect(),
        commits: bundle.commits.iter().map(|c| b64_encode(c)).collect(),
    }
}

pub fn from_base64(text: &TextBundle) -> Result<Bundle, Error> {
    let shares = text
        .shares
        .iter()
        .map(|s| decode_share(b64_decode, s))
        .collect::<Result<Vec<_>, _>>()?;
    let commits = text
        .commits
        .iter()
        .map(|c| b64_decode(c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Bundle {
        required_shares: text.required_shares,
        prime_mod: codec::int_from_bytes(&b64_decode(&text.prime_mod)?),
        prime2: codec::int_from_bytes(&b64_decode(&text.prime2)?),
        generator: codec::int_from_bytes(&b64_decode(&text.generator)?),
        shares,
        commits,
    })
}

pub fn to_hex(bundle: &Bundle) -> TextBundle {
    TextBundle {
        required_shares: bundle.required_shares,
        prime_mod: hex::encode(codec::int_to_bytes(&bundle.prime_mod)),
        prime2: String::new(),
        generator: String::new(),
        shares: bundle
            .shares
            .iter()
            .map(|s| encode_share(|b| hex::encode(b), s))
            .collect(),
        commits: bundle.commits.iter().map(|c| hex::encode(c)).collect(),
    }
}

/// `prime2` and `generator` come back as `0`: the hex form never carried
/// them, so a verifiable bundle round-tripped through hex loses its
/// Feldman parameters (though not its commitments).
pub fn from_hex(text: &TextBundle) -> Result<Bundle, Error> {
    let shares = text
        .shares
        .iter()
        .map(|s| decode_share(hex_decode, s))
        .collect::<Result<Vec<_>, _>>()?;
    let commits = text
        .commits
        .iter()
        .map(|c| hex_decode(c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Bundle {
        required_shares: text.required_shares,
        prime_mod: codec::int_from_bytes(&hex_decode(&text.prime_mod)?),
        prime2: BigUint::from(0u8),
        generator: BigUint::from(0u8),
        shares,
        commits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shamir::split_secret;

    #[test]
    fn base64_round_trip_preserves_everything() {
        let bundle = split_secret(b"round trip me", 3, 5, true, None, None).unwrap();
        let text = to_base64(&bundle);
        let decoded = from_base64(&text).unwrap();
        assert_eq!(decoded.required_shares, bundle.required_shares);
        assert_eq!(decoded.prime_mod, bundle.prime_mod);
        assert_eq!(decoded.prime2, bundle.prime2);
        assert_eq!(decoded.generator, bundle.generator);
        assert_eq!(decoded.shares, bundle.shares);
        assert_eq!(decoded.commits, bundle.commits);
    }

    #[test]
    fn hex_round_trip_preserves_fields_it_carries() {
        let bundle = split_secret(b"round trip me", 3, 5, false, None, None).unwrap();
        let text = to_hex(&bundle);
        let decoded = from_hex(&text).unwrap();
        assert_eq!(decoded.required_shares, bundle.required_shares);
        assert_eq!(decoded.prime_mod, bundle.prime_mod);
        assert_eq!(decoded.shares, bundle.shares);
        assert_eq!(decoded.commits, bundle.commits);
    }

    #[test]
    fn hex_drops_feldman_parameters() {
        let bundle = split_secret(b"verifiable", 3, 5, true, None, None).unwrap();
        let text = to_hex(&bundle);
        assert!(text.prime2.is_empty());
        assert!(text.generator.is_empty());
        let decoded = from_hex(&text).unwrap();
        assert_eq!(decoded.prime2, BigUint::from(0u8));
        assert_eq!(decoded.generator, BigUint::from(0u8));
    }

    #[test]
    fn malformed_share_string_is_a_codec_error() {
        let text = TextBundle {
            required_shares: Some(2),
            prime_mod: b64_encode(&[1, 2, 3]),
            prime2: b64_encode(&[0]),
            generator: b64_encode(&[0]),
            shares: vec!["not-a-valid-share-format-zz".to_string()],
            commits: vec![],
        };
        assert!(matches!(from_base64(&text), Err(Error::Codec(_))));
    }
}
