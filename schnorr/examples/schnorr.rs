use secp_schnorr::{Signature, Signer, SignerConfig, TracingTrace};
use tracing::{Level, info};

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let signer = Signer::secp256k1()
        .with_config(SignerConfig::default())
        .with_trace(TracingTrace);

    let mut private_key = [0u8; 32];
    hex::decode_to_slice(
        "b7e151628aed2a6abf7158809cf4f3c762e7160f38b4da56a784d9045190cfef",
        &mut private_key,
    )
    .expect("hex key");
    let mut digest = [0u8; 32];
    hex::decode_to_slice(
        "243f6a8885a308d313198a2e03707344a4093822299f31d0082efa98ec4e6c89",
        &mut digest,
    )
    .expect("hex digest");

    let vk = signer.verifying_key(&private_key).expect("verifying key");
    let sig = signer.sign(&private_key, &digest).expect("sign");

    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    assert_eq!(sig, sig2);

    info!(
        public_key = %hex::encode(vk.to_compressed().expect("compress")),
        signature = %hex::encode(sig2.to_bytes()),
        "signed"
    );
}
