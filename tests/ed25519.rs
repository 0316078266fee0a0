use ed25519_extract::{Error, Keypair, Seed, public_key, sign, sign2, verify, verify2};
use rand_core::OsRng;

fn unhex<const N: usize>(s: &str) -> [u8; N] {
    hex::decode(s).unwrap().try_into().unwrap()
}

// -------------------------------------------------------
// RFC 8032, SECTION 7.1
// -------------------------------------------------------

#[test]
fn rfc8032_test_1() {
    let seed: [u8; 32] = unhex("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let expected_pk: [u8; 32] =
        unhex("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");
    let expected_sig: [u8; 64] = unhex(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
    );

    let pk = public_key(&seed).unwrap();
    assert_eq!(pk, expected_pk, "public key must match RFC 8032");

    let sig = sign(b"", &seed, &pk).unwrap();
    assert_eq!(sig, expected_sig, "signature must match RFC 8032");

    assert_eq!(verify(&sig, b"", &pk), Ok(true));
}

#[test]
fn rfc8032_test_2() {
    let seed: [u8; 32] = unhex("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");
    let expected_pk: [u8; 32] =
        unhex("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c");
    let expected_sig: [u8; 64] = unhex(
        "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    );

    let pk = public_key(&seed).unwrap();
    assert_eq!(pk, expected_pk);

    let sig = sign(&[0x72], &seed, &pk).unwrap();
    assert_eq!(sig, expected_sig);

    assert_eq!(verify(&sig, &[0x72], &pk), Ok(true));
}

// -------------------------------------------------------
// SIGN / VERIFY
// -------------------------------------------------------

#[test]
fn test_ed25519_sign_and_verify() {
    let keypair = Keypair::generate(&mut OsRng);
    let pk = keypair.public().to_bytes();

    let message: &[u8] = b"Hello, world!";

    let mut signature = sign(message, keypair.seed().as_bytes(), &pk).unwrap();
    assert_eq!(
        verify(&signature, message, &pk),
        Ok(true),
        "signature should be valid"
    );

    signature[44] ^= 0x10;
    assert_eq!(
        verify(&signature, message, &pk),
        Ok(false),
        "signature modification must be detected"
    );
}

#[test]
fn typed_api_matches_byte_api() {
    let keypair = Keypair::from_seed(Seed::from_bytes([3u8; 32]));
    let pk = keypair.public().to_bytes();

    let typed = keypair.sign(b"typed");
    let raw = sign(b"typed", &[3u8; 32], &pk).unwrap();
    assert_eq!(typed.to_bytes(), raw);

    assert_eq!(keypair.public().verify(b"typed", &typed), Ok(true));
    assert_eq!(keypair.public().verify(b"other", &typed), Ok(false));
}

#[test]
fn wrong_message_is_rejected() {
    let seed = [9u8; 32];
    let pk = public_key(&seed).unwrap();

    let sig = sign(b"test message", &seed, &pk).unwrap();
    assert_eq!(verify(&sig, b"wrong message", &pk), Ok(false));
}

#[test]
fn every_message_bit_flip_is_rejected() {
    let seed = [5u8; 32];
    let pk = public_key(&seed).unwrap();
    let message = b"flip me".to_vec();
    let sig = sign(&message, &seed, &pk).unwrap();

    for bit in 0..message.len() * 8 {
        let mut tampered = message.clone();
        tampered[bit / 8] ^= 1 << (bit % 8);
        assert_eq!(verify(&sig, &tampered, &pk), Ok(false), "bit {bit}");
    }
}

#[test]
fn every_signature_bit_flip_is_rejected() {
    let seed = [6u8; 32];
    let pk = public_key(&seed).unwrap();
    let sig = sign(b"message", &seed, &pk).unwrap();

    for bit in 0..512 {
        let mut tampered = sig;
        tampered[bit / 8] ^= 1 << (bit % 8);
        // A flipped bit either breaks the encoding of R or S, or yields a
        // well-formed signature that fails the equation.
        assert_ne!(verify(&tampered, b"message", &pk), Ok(true), "bit {bit}");
    }
}

#[test]
fn every_public_key_bit_flip_is_rejected() {
    let seed = [8u8; 32];
    let pk = public_key(&seed).unwrap();
    let sig = sign(b"message", &seed, &pk).unwrap();

    for bit in 0..256 {
        let mut tampered = pk;
        tampered[bit / 8] ^= 1 << (bit % 8);
        assert_ne!(verify(&sig, b"message", &tampered), Ok(true), "bit {bit}");
    }
}

#[test]
fn key_blind_signature_does_not_pass_standard_verification() {
    let seed = [10u8; 32];
    let pk = public_key(&seed).unwrap();

    let blind = sign2(b"message", &seed).unwrap();
    assert_eq!(verify(&blind, b"message", &pk), Ok(false));
    assert_eq!(verify2(&blind, b"message", &pk), Ok(true));

    let bound = sign(b"message", &seed, &pk).unwrap();
    assert_eq!(verify2(&bound, b"message", &pk), Ok(false));
}

#[test]
fn verify2_rejects_other_keys() {
    let seed = [11u8; 32];
    let other = public_key(&[12u8; 32]).unwrap();

    let sig = sign2(b"message", &seed).unwrap();
    assert_eq!(verify2(&sig, b"message", &other), Ok(false));
}

// -------------------------------------------------------
// MALFORMED INPUT
// -------------------------------------------------------

#[test]
fn sign_requires_32_byte_seed_and_key() {
    let pk = public_key(&[1u8; 32]).unwrap();

    assert_eq!(
        sign(b"m", &[1u8; 31], &pk),
        Err(Error::InvalidLength {
            expected: 32,
            actual: 31
        })
    );
    assert_eq!(
        sign(b"m", &[1u8; 32], &pk[..31]),
        Err(Error::InvalidLength {
            expected: 32,
            actual: 31
        })
    );
    assert!(matches!(
        sign2(b"m", &[1u8; 33]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn verify_requires_fixed_lengths() {
    let seed = [1u8; 32];
    let pk = public_key(&seed).unwrap();
    let sig = sign(b"m", &seed, &pk).unwrap();

    for len in [0, 63, 65] {
        let mut resized = sig.to_vec();
        resized.resize(len, 0);
        assert_eq!(
            verify(&resized, b"m", &pk),
            Err(Error::InvalidLength {
                expected: 64,
                actual: len
            })
        );
    }

    assert!(matches!(
        verify(&sig, b"m", &[0u8; 33]),
        Err(Error::InvalidLength { .. })
    ));
    assert!(matches!(
        verify2(&sig[..10], b"m", &pk),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn non_canonical_s_is_an_encoding_error() {
    let seed = [2u8; 32];
    let pk = public_key(&seed).unwrap();
    let mut sig = sign(b"m", &seed, &pk).unwrap();

    // S = ℓ, one past the largest canonical scalar
    sig[32..].copy_from_slice(&unhex::<32>(
        "edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010",
    ));

    assert_eq!(
        verify(&sig, b"m", &pk),
        Err(Error::InvalidEncoding { what: "scalar" })
    );
}

#[test]
fn small_order_public_key_is_an_encoding_error() {
    let seed = [2u8; 32];
    let pk = public_key(&seed).unwrap();
    let sig = sign(b"m", &seed, &pk).unwrap();

    // (0, -1), a point of order two
    let mut small = [0xffu8; 32];
    small[0] = 0xec;
    small[31] = 0x7f;

    assert_eq!(
        verify(&sig, b"m", &small),
        Err(Error::InvalidEncoding { what: "point" })
    );
}
