//! Example showing how to use `shamir_vss` end-to-end: split a secret
//! with Feldman VSS enabled, verify every share against the published
//! commitments, round-trip the bundle through base64, and recover the
//! secret from an arbitrary quorum.

use shamir_vss::serde_bundle::{from_base64, to_base64};
use shamir_vss::shamir::{feldman_verification, recover_secret, split_secret, Bundle};

fn main() {
    /* SHARE GENERATION */

    let secret = b"correct horse battery staple".to_vec();
    let required_shares = 3u16;
    let distributed_shares = 6u16;
    let verifiable = true;

    // split_secret picks a catalog prime (and, since verifiable=true, a
    // matching Feldman p/g) automatically when no prime_mod is supplied,
    // and a default OS-backed randomness source when no rng is supplied.
    let bundle = split_secret(
        &secret,
        required_shares,
        distributed_shares,
        verifiable,
        None,
        None,
    )
    .expect("split_secret failed");

    for share in &bundle.shares {
        println!("share: x={} y_bytes.len()={}", share.x, share.y_bytes.len());
    }

    /* VERIFICATION */

    for share in &bundle.shares {
        feldman_verification(
            &bundle.prime2,
            &bundle.generator,
            share.x,
            &share.y_bytes,
            &bundle.commits,
        )
        .expect("every honestly generated share must verify");
    }
    println!(
        "all {} shares verify against the published commitments",
        bundle.shares.len()
    );

    /* SERIALIZATION ROUND-TRIP */

    let text = to_base64(&bundle);
    let decoded = from_base64(&text).expect("bundle must round-trip through base64");

    /* RECONSTRUCTION */

    // Any `required_shares` of the `distributed_shares` shares recover
    // the secret; here we pick a non-trivial, non-prefix subset.
    let quorum = Bundle {
        shares: vec![
            decoded.shares[5].clone(),
            decoded.shares[0].clone(),
            decoded.shares[3].clone(),
        ],
        ..decoded
    };
    let recovered = recover_secret(&quorum).expect("recover_secret failed");
    assert_eq!(recovered, secret);
    println!("recovered secret matches the original");
}
