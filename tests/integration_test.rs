//! Integration tests for the STARK bridge
//!
//! These tests pin every operation against published reference vectors
//! (generated with the cairo-lang toolchain) and check the end-to-end
//! sign/verify flow through both naming facades.

use stark_bridge::ops::facade::{crypto_cpp, poseidon, starknet_curve};
use stark_bridge::ops::{invert_mod_order, BridgeError, OperationBridge};
use stark_bridge::primitives::{FieldElement, PoseidonState, SizeError, WireElement};
use starknet_crypto::Felt;

// =============================================================================
// Test Helpers
// =============================================================================

const PRIVATE_KEY: &str = "0x4070e7abfa479cf8a30d38895e93800a88862c4a65aa00e2b11495998818046";
const PUBLIC_KEY: &str = "0x7697f8f9a4c3e2b1efd882294462fda2ca9c439d02a3a04cf0a0cdb627f11ee";

/// STARK field prime minus one
const MAX_FELT: &str = "0x800000000000011000000000000000000000000000000000000000000000000";

fn fe(hex: &str) -> WireElement {
    FieldElement::from_hex(hex).unwrap().encode()
}

fn grid_of(elements: [&str; 3]) -> Vec<Vec<u64>> {
    elements
        .iter()
        .map(|h| FieldElement::from_hex(h).unwrap().0.to_vec())
        .collect()
}

fn row_element(row: &[u64]) -> FieldElement {
    FieldElement::from_limbs([row[0], row[1], row[2], row[3]])
}

// =============================================================================
// Pedersen
// =============================================================================

#[test]
fn test_pedersen_of_zeros() {
    let bridge = OperationBridge::new();
    let digest = bridge.pedersen(&[0u8; 32], &[0u8; 32]).unwrap();
    assert_eq!(
        digest,
        fe("0x49ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804")
    );
}

#[test]
fn test_pedersen_reference_table() {
    let cases = [
        ("0x1", "0x2", "0x5bb9440e27889a364bcb678b1f679ecd1347acdedcbf36e83494f857cc58026"),
        ("0x1", "0x0", "0x268a9d47dde48af4b6e2c33932ed1c13adec25555abaa837c376af4ea2f8a94"),
        ("0x0", "0x1", "0x46c9aeb066cc2f41c7124af30514f9e607137fbac950524f5fdace5788f9d43"),
        (MAX_FELT, MAX_FELT, "0x7258fccaf3371fad51b117471d9d888a1786c5694c3e6099160477b593a576e"),
        (
            "0x7abcde123245643903241432abcde",
            "0x791234124214214728147241242142a89b812221c21d",
            "0x440a3075f082daa47147a22a4cd0c934ef65ea13ef87bf13adf45613e12f6ee",
        ),
        (
            "0x46c9aeb066cc2f41c7124af30514f9e607137fbac950524f5fdace5788f9d43",
            "0x49ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804",
            "0x68ad69169c41c758ebd02e2fce51716497a708232a45a1b83e82fac1ade326e",
        ),
        (
            "0x15d40a3d6ca2ac30f4031e42be28da9b056fef9bb7357ac5e85627ee876e5ad",
            "0x43e637ca70a5daac877cba6b57e0b9ceffc5b37d28509e46b4fd2dee968a70c",
            "0x4b9281c85cfc5ab1f4046663135329020f57c1a88a50f4423eff37dd5fe81e8",
        ),
        (
            "0x0",
            "0x15d40a3d6ca2ac30f4031e42be28da9b056fef9bb7357ac5e85627ee876e5ad",
            "0x1a0c3e0f68c3ee702017fdb6452339244840eedbb70ab3d4f45e2affd1c9420",
        ),
    ];

    for (a, b, expected) in cases {
        let digest = starknet_curve::pedersen(&fe(a), &fe(b)).unwrap();
        assert_eq!(
            FieldElement::decode(&digest).to_hex(),
            expected,
            "pedersen({}, {})",
            a,
            b
        );
    }
}

#[test]
fn test_pedersen_deterministic() {
    let a = fe("0x7abcde123245643903241432abcde");
    let b = fe("0x1234");
    assert_eq!(crypto_cpp::pedersen(&a, &b), crypto_cpp::pedersen(&a, &b));
}

#[test]
fn test_pedersen_on_elements_vectors() {
    let empty: [WireElement; 0] = [];
    assert_eq!(
        starknet_curve::pedersen_on_elements(&empty).unwrap(),
        fe("0x49ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804")
    );

    let numbers = [fe("0x760c4e8"), fe("0x343e0"), fe("0x1dfae76929")];
    assert_eq!(
        FieldElement::decode(&numbers[0]),
        FieldElement::from_u64(123782376)
    );
    assert_eq!(
        FieldElement::decode(&numbers[2]),
        FieldElement::from_u64(128763521321)
    );
    assert_eq!(
        starknet_curve::pedersen_on_elements(&numbers).unwrap(),
        fe("0x7b422405da6571242dfc245a43de3b0fe695e7021c148b918cd9cdb462cac59")
    );

    let pair = [
        fe("0x15d40a3d6ca2ac30f4031e42be28da9b056fef9bb7357ac5e85627ee876e5ad"),
        fe("0x10927538dee311ae5093324fc180ab87f23bbd7bc05456a12a1a506f220db25"),
    ];
    assert_eq!(
        starknet_curve::pedersen_on_elements(&pair).unwrap(),
        fe("0x43e637ca70a5daac877cba6b57e0b9ceffc5b37d28509e46b4fd2dee968a70c")
    );
}

// =============================================================================
// ECDSA
// =============================================================================

#[test]
fn test_get_public_key() {
    let public_key = starknet_curve::get_public_key(&fe(PRIVATE_KEY)).unwrap();
    assert_eq!(public_key, fe(PUBLIC_KEY));
}

#[test]
fn test_get_public_key_second_vector() {
    let public_key = crypto_cpp::getPublicKey(&fe(
        "0x019800ea6a9a73f94aee6a3d2edf018fc770443e90c7ba121e8303ec6b349279",
    ))
    .unwrap();
    assert_eq!(
        FieldElement::decode(&public_key).to_hex(),
        "0x33f45f07e1bd1a51b45fc24ec8c8c9908db9e42191be9e169bfcac0c0d99745"
    );
}

#[test]
fn test_sign_with_fixed_k() {
    let hash = fe("0x052fc40e34aee86948cd47e1a0096fa67df8410f81421f314a1eb18102251a82");
    let k = fe("0x6d45bce40ffc4a8cd4cb656048d023a90913e70e589362b41e4334c721cec4b");

    let signature = starknet_curve::sign(&fe(PRIVATE_KEY), &hash, &k).unwrap();
    assert_eq!(
        &signature[..32],
        &fe("0x76a835cfbccd598b9429f6fce09acace91001abcfa68c36022e42dbdb024385")
    );
    // The wire carries w = s^-1 mod n
    assert_eq!(
        &signature[32..],
        &fe("0x6c599e0324ab26e71e385935732d9a8c925b2c6c2f0a91d37ff5df699b207b7")
    );
    let w = FieldElement::decode(signature[32..].try_into().unwrap());
    assert_eq!(
        invert_mod_order(&w).unwrap().to_hex(),
        "0x198ef0ca145ad0fbd175426788d9a7c84de3764f51bfc0fe0579caca660bfe4"
    );

    assert!(starknet_curve::verify(
        &fe(PUBLIC_KEY),
        &hash,
        &signature[..32],
        &signature[32..]
    ));
    assert!(crypto_cpp::verify(
        &fe(PUBLIC_KEY),
        &hash,
        &signature[..32],
        &signature[32..]
    ));
}

#[test]
fn test_verify_reference_signature() {
    let r = fe("0x66f8955f5c4cbad5c21905ca2a968bc32a183e81069b851b7fc388eceaf57f1");
    let s = FieldElement::from_hex(
        "0x13d5af50c934213f27a8cc5863aa304165aa886487fcc575fe6e1228879f9fe",
    )
    .unwrap();
    let w = invert_mod_order(&s).unwrap();
    assert_eq!(
        w.to_hex(),
        "0x3d40c7e396ea157a3a0faf3b472bd1717bbc87a3672e7a25a3a9b0c1a5683fc"
    );
    let hash = fe("0x1");

    assert!(starknet_curve::verify(&fe(PUBLIC_KEY), &hash, &r, &w.encode()));
    assert!(crypto_cpp::verify(&fe(PUBLIC_KEY), &hash, &r, &w.encode()));

    // s itself is not the wire component
    assert!(!crypto_cpp::verify(&fe(PUBLIC_KEY), &hash, &r, &s.encode()));
    assert!(!starknet_curve::verify(&fe(PUBLIC_KEY), &hash, &w.encode(), &r));
}

#[test]
fn test_zero_w_does_not_verify() {
    let r = fe("0x66f8955f5c4cbad5c21905ca2a968bc32a183e81069b851b7fc388eceaf57f1");
    assert!(!crypto_cpp::verify(&fe(PUBLIC_KEY), &fe("0x1"), &r, &[0u8; 32]));
}

#[test]
fn test_scalars_reduced_modulo_curve_order() {
    // p mod n = p - n, so both keys must derive the same public key
    let prime = fe("0x800000000000011000000000000000000000000000000000000000000000001");
    let prime_minus_order = fe("0x487eed9235184dcde1995dbe5239b2d2");
    assert_eq!(
        crypto_cpp::getPublicKey(&prime).unwrap(),
        crypto_cpp::getPublicKey(&prime_minus_order).unwrap()
    );

    // Private key + n
    let shifted_key = fe("0xc070e7abfa479e08a30d38895e9380060097532714252404977eb9b4647cd75");
    assert_eq!(starknet_curve::get_public_key(&shifted_key).unwrap(), fe(PUBLIC_KEY));

    // k + n signs like k
    let hash = fe("0x052fc40e34aee86948cd47e1a0096fa67df8410f81421f314a1eb18102251a82");
    let k = fe("0x6d45bce40ffc4a8cd4cb656048d023a90913e70e589362b41e4334c721cec4b");
    let shifted_k = fe("0xed45bce40ffc4b9cd4cb656048d023a481250deb070e85d604ad58e1fe3397a");
    assert_eq!(
        starknet_curve::sign(&fe(PRIVATE_KEY), &hash, &shifted_k).unwrap(),
        starknet_curve::sign(&fe(PRIVATE_KEY), &hash, &k).unwrap()
    );
}

#[test]
fn test_public_key_sign_verify_roundtrip() {
    let bridge = OperationBridge::new();
    let private_keys = [PRIVATE_KEY, "0x1", "0x3c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"];
    let message = fe("0x2d6479c0758efbb5aa07d35ed5454d728637fceab7ba544d3ea95403a5630a8");
    let k = fe("0x54d3ea95403a5630a82d6479c0758efbb5aa07d35ed5454d728637fceab7ba");

    for private_key in private_keys {
        let private_key = fe(private_key);
        let public_key = bridge.get_public_key(&private_key).unwrap();
        let signature = bridge.sign(&private_key, &message, &k).unwrap();
        assert!(bridge.verify_signature(&public_key, &message, &signature));

        let other = fe("0x1234");
        assert!(!bridge.verify_signature(&public_key, &other, &signature));
    }
}

#[test]
fn test_sign_deterministic_verifies() {
    let hash = fe("0x052fc40e34aee86948cd47e1a0096fa67df8410f81421f314a1eb18102251a82");
    let first = starknet_curve::sign_deterministic(&fe(PRIVATE_KEY), &hash).unwrap();
    let second = starknet_curve::sign_deterministic(&fe(PRIVATE_KEY), &hash).unwrap();
    assert_eq!(first, second);
    assert!(starknet_curve::verify(
        &fe(PUBLIC_KEY),
        &hash,
        &first[..32],
        &first[32..]
    ));
}

#[test]
fn test_sign_with_short_private_key() {
    let err = starknet_curve::sign(&[7u8; 31], &fe("0x1"), &fe("0x2")).unwrap_err();
    assert_eq!(
        err,
        BridgeError::InvalidInputSize(SizeError::length("private_key", 32, 31))
    );
    assert_eq!(err.to_string(), "Invalid field element provided.");
}

#[test]
fn test_sign_with_zero_k_is_unknown_failure() {
    let err = starknet_curve::sign(&fe(PRIVATE_KEY), &fe("0x1"), &fe("0x0")).unwrap_err();
    assert_eq!(err, BridgeError::UnknownPrimitiveFailure);
    assert_eq!(err.to_string(), "Unknown crypto-cpp exception.");
}

// =============================================================================
// Poseidon
// =============================================================================

#[test]
fn test_hades_zero_grid_reproducible() {
    let zeros = vec![vec![0u64; 4]; 3];
    let first = poseidon::hades(&zeros).unwrap();
    let second = poseidon::hades(&zeros).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert!(first.iter().all(|row| row.len() == 4));
    assert_ne!(first, zeros);

    // Same result as the primitive applied directly
    let mut state = [Felt::ZERO; 3];
    starknet_crypto::poseidon_permute_comp(&mut state);
    for (row, felt) in first.iter().zip(state.iter()) {
        assert_eq!(row_element(row).encode(), felt.to_bytes_le());
    }
}

#[test]
fn test_hades_single_zero_vector() {
    let out = poseidon::hades(&grid_of(["0x0", "0x0", "0x1"])).unwrap();
    assert_eq!(
        row_element(&out[0]).to_hex(),
        "0x60009f680a43e6f760790f76214b26243464cdd4f31fdc460baf66d32897c1b"
    );
}

#[test]
fn test_hades_pair_vector() {
    let out = poseidon::hades(&grid_of(["0x0", "0x0", "0x2"])).unwrap();
    assert_eq!(
        row_element(&out[0]).to_hex(),
        "0x293d3e8a80f400daaaffdd5932e2bcc8814bab8f414a75dcacf87318f8b14c5"
    );
}

#[test]
fn test_hades_rows_stay_in_place() {
    // Permuting [a, b, c] and [c, b, a] gives different results, so rows
    // cannot have been reordered on the way in or out
    let forward = poseidon::hades(&grid_of(["0x1", "0x2", "0x3"])).unwrap();
    let backward = poseidon::hades(&grid_of(["0x3", "0x2", "0x1"])).unwrap();
    assert_ne!(forward, backward);

    let typed = poseidon::permute(PoseidonState::from_grid(&grid_of(["0x1", "0x2", "0x3"])).unwrap())
        .unwrap();
    assert_eq!(typed.to_grid(), forward);
}

#[test]
fn test_poseidon_hash_vectors() {
    let bridge = OperationBridge::new();
    let hex = |w: WireElement| FieldElement::decode(&w).to_hex();

    assert_eq!(
        hex(bridge.poseidon_hash_single(&fe("0x0")).unwrap()),
        "0x60009f680a43e6f760790f76214b26243464cdd4f31fdc460baf66d32897c1b"
    );
    assert_eq!(
        hex(bridge.poseidon_hash_single(&fe("0x1")).unwrap()),
        "0x6d226d4c804cd74567f5ac59c6a4af1fe2a6eced19fb7560a9124579877da25"
    );
    assert_eq!(
        hex(bridge.poseidon_hash(&fe("0x0"), &fe("0x0")).unwrap()),
        "0x293d3e8a80f400daaaffdd5932e2bcc8814bab8f414a75dcacf87318f8b14c5"
    );
    assert_eq!(
        hex(bridge
            .poseidon_hash_many(&[fe("0x0"), fe("0x0"), fe("0x0")])
            .unwrap()),
        "0x29aee7812642221479b7e8af204ceaa5a7b7e113349fc8fb93e6303b477eb4d"
    );
    assert_eq!(
        hex(bridge
            .poseidon_hash_many(&[fe("0xa"), fe("0x8"), fe("0x5")])
            .unwrap()),
        "0x53aa661c2388b74f48a16163c38893760e26884211599194ffe264f14b5c6e7"
    );
    assert_eq!(
        hex(bridge
            .poseidon_hash_many(&[fe("0x1"), fe("0xa"), fe("0x64"), fe("0x3e8")])
            .unwrap()),
        "0x51f923f87ee53d16c2d680c2c0c9eb0132ba255d52b6dd69f4b9918dcbe00a1"
    );
}

#[test]
fn test_poseidon_many_matches_library() {
    let bridge = OperationBridge::new();
    let values: Vec<WireElement> = (0u64..7).map(|i| FieldElement::from_u64(i * 31).encode()).collect();
    let felts: Vec<Felt> = (0u64..7).map(|i| Felt::from(i * 31)).collect();

    let ours = bridge.poseidon_hash_many(&values).unwrap();
    let theirs = starknet_crypto::poseidon_hash_many(&felts);
    assert_eq!(ours, theirs.to_bytes_le());
}
