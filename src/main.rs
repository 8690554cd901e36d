//! Thin CLI driver: split a secret, verify every share (when
//! verifiable), recover it, and print the base64 bundle. All real logic
//! lives in the library; this binary only wires it to stdout and a
//! logger.

use shamir_vss::serde_bundle::to_base64;
use shamir_vss::shamir::{feldman_verification, recover_secret, split_secret, Bundle};

fn main() {
    env_logger::init();

    let secret = b"correct horse battery staple".to_vec();
    let required_shares = 3u16;
    let distributed_shares = 5u16;
    let verifiable = true;

    let bundle = split_secret(&secret, required_shares, distributed_shares, verifiable, None, None)
        .expect("split_secret failed");

    println!("{:#?}", to_base64(&bundle));

    if verifiable {
        for share in &bundle.shares {
            feldman_verification(
                &bundle.prime2,
                &bundle.generator,
                share.x,
                &share.y_bytes,
                &bundle.commits,
            )
            .expect("feldman verification failed for a legitimate share");
        }
        println!("all {} shares verified", bundle.shares.len());
    }

    let quorum = Bundle {
        shares: bundle.shares[0..required_shares as usize].to_vec(),
        ..bundle
    };
    let recovered = recover_secret(&quorum).expect("recover_secret failed");
    println!("recovered == secret: {}", recovered == secret);
}
