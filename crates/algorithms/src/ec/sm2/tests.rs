//! SM2 test vectors and unit tests

use super::*;
use crate::error::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Base point x-coordinate from GB/T 32918
const GX_HEX: &str = "32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7";
/// Base point y-coordinate from GB/T 32918
const GY_HEX: &str = "bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0";

/// Example keypair from GB/T 32918.5 appendix A
const SAMPLE_D_HEX: &str = "3945208f7b2144b13f36e38ac6d39f95889393692860b51a42fb81ef4df7c5b8";
const SAMPLE_PX_HEX: &str = "09f9df311e5421a150dd7d161e4bc5c672179fad1833fc076bb08ff356f35020";
const SAMPLE_PY_HEX: &str = "ccea490ce26775a52dc6ea718cc1aa600aed05fbf35e084a6632f6072da9ad13";

fn bytes32(hex: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(hex).unwrap());
    out
}

fn fe(hex: &str) -> FieldElement {
    FieldElement::from_bytes(&bytes32(hex)).unwrap()
}

fn small_scalar(v: u8) -> Scalar {
    let mut bytes = [0u8; SM2_SCALAR_SIZE];
    bytes[SM2_SCALAR_SIZE - 1] = v;
    Scalar::new(bytes).unwrap()
}

/// Test vectors for SM2 field arithmetic
mod field_tests {
    use super::*;

    #[test]
    fn test_field_zero_one() {
        let zero = FieldElement::zero();
        let one = FieldElement::one();

        assert!(zero.is_zero());
        assert!(!one.is_zero());

        let sum = zero.add(&one);
        assert_eq!(sum, one);

        let diff = one.sub(&one);
        assert_eq!(diff, zero);
    }

    #[test]
    fn test_field_addition_commutativity() {
        let a = fe(super::GX_HEX);
        let b = fe(super::GY_HEX);

        assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn test_field_small_multiplication() {
        let one = FieldElement::one();
        let two = FieldElement::from_u32(2);

        // 1 * 2 = 2
        assert_eq!(one.mul(&two), two);

        // 2 * 2 = 4
        assert_eq!(two.mul(&two), FieldElement::from_u32(4));
    }

    #[test]
    fn test_field_squaring_matches_mul() {
        let x = fe(super::GX_HEX);
        assert_eq!(x.square(), x.mul(&x));
    }

    #[test]
    fn test_field_inversion() {
        let x = fe(super::GX_HEX);
        let x_inv = x.invert().unwrap();

        assert_eq!(x.mul(&x_inv), FieldElement::one());
    }

    #[test]
    fn test_field_inversion_zero_fails() {
        let zero = FieldElement::zero();
        assert!(zero.invert().is_err());
    }

    #[test]
    fn test_field_serialization_round_trip() {
        let original = bytes32(super::GY_HEX);
        let element = FieldElement::from_bytes(&original).unwrap();
        assert_eq!(element.to_bytes(), original);
    }

    #[test]
    fn test_field_modulus_rejection() {
        // p itself must be rejected
        let p = gmkit_params::sm2::SM2.p;
        assert!(FieldElement::from_bytes(&p).is_err());

        // p - 1 is the largest canonical value
        let mut p_minus_1 = p;
        p_minus_1[31] = 0xFE;
        assert!(FieldElement::from_bytes(&p_minus_1).is_ok());
    }

    #[test]
    fn test_field_wraparound_addition() {
        // (p - 1) + 2 = 1
        let mut p_minus_1 = gmkit_params::sm2::SM2.p;
        p_minus_1[31] = 0xFE;
        let a = FieldElement::from_bytes(&p_minus_1).unwrap();
        let two = FieldElement::from_u32(2);

        assert_eq!(a.add(&two), FieldElement::one());
    }

    #[test]
    fn test_field_minus_one_squared() {
        // (p - 1)² ≡ 1, exercising the wide reduction across the fold
        let mut p_minus_1 = gmkit_params::sm2::SM2.p;
        p_minus_1[31] = 0xFE;
        let minus_one = FieldElement::from_bytes(&p_minus_1).unwrap();

        assert_eq!(minus_one.square(), FieldElement::one());
    }

    #[test]
    fn test_field_negate() {
        let x = fe(super::GX_HEX);
        let neg = x.negate();
        assert_eq!(x.add(&neg), FieldElement::zero());
        assert_eq!(FieldElement::zero().negate(), FieldElement::zero());
    }

    #[test]
    fn test_field_sqrt_of_square() {
        let x = fe(super::GY_HEX);
        let sq = x.square();
        let root = sq.sqrt().unwrap();

        // Either root may come back; both square to the input
        assert!(root == x || root == x.negate());
        assert_eq!(root.square(), sq);
    }

    #[test]
    fn test_field_sqrt_non_residue() {
        // p ≡ 3 (mod 4), so -1 is a quadratic non-residue
        let mut p_minus_1 = gmkit_params::sm2::SM2.p;
        p_minus_1[31] = 0xFE;
        let minus_one = FieldElement::from_bytes(&p_minus_1).unwrap();

        assert!(minus_one.sqrt().is_none());
    }

    #[test]
    fn test_field_parity() {
        assert!(FieldElement::one().is_odd());
        assert!(!FieldElement::from_u32(2).is_odd());
    }
}

/// Tests for SM2 scalar validation
mod scalar_tests {
    use super::*;

    #[test]
    fn test_scalar_zero_rejected() {
        let result = Scalar::new([0u8; SM2_SCALAR_SIZE]);
        assert!(matches!(result, Err(Error::InvalidScalar { .. })));
    }

    #[test]
    fn test_scalar_order_rejected() {
        // d = n is outside [1, n-1]
        let result = Scalar::new(gmkit_params::sm2::SM2.n);
        assert!(matches!(result, Err(Error::InvalidScalar { .. })));
    }

    #[test]
    fn test_scalar_above_order_rejected() {
        // n < d < 2^256 must be rejected, not reduced
        let mut above = gmkit_params::sm2::SM2.n;
        above[31] = above[31].wrapping_add(1);
        let result = Scalar::new(above);
        assert!(matches!(result, Err(Error::InvalidScalar { .. })));
    }

    #[test]
    fn test_scalar_order_minus_one_accepted() {
        let mut n_minus_1 = gmkit_params::sm2::SM2.n;
        n_minus_1[31] = 0x22;
        let scalar = Scalar::new(n_minus_1).unwrap();
        assert_eq!(scalar.serialize(), n_minus_1);
    }

    #[test]
    fn test_scalar_one_accepted() {
        let scalar = small_scalar(1);
        assert!(!scalar.is_zero());
    }

    #[test]
    fn test_scalar_deserialize_length() {
        let result = Scalar::deserialize(&[0x01u8; 16]);
        assert!(matches!(result, Err(Error::Length { .. })));
    }

    #[test]
    fn test_scalar_serialize_round_trip() {
        let bytes = bytes32(super::SAMPLE_D_HEX);
        let scalar = Scalar::new(bytes).unwrap();
        assert_eq!(scalar.serialize(), bytes);
        assert_eq!(Scalar::deserialize(&bytes).unwrap().serialize(), bytes);
    }
}

/// Test vectors for SM2 point operations
mod point_tests {
    use super::*;

    #[test]
    fn test_base_point_on_curve() {
        // new_uncompressed validates the curve equation
        let g = base_point_g();
        assert!(!g.is_identity());
        assert_eq!(g.x_coordinate_bytes(), bytes32(GX_HEX));
        assert_eq!(g.y_coordinate_bytes(), bytes32(GY_HEX));
    }

    #[test]
    fn test_point_rejects_off_curve_coordinates() {
        // Perturb Gy so the curve equation fails
        let mut bad_y = bytes32(GY_HEX);
        bad_y[31] ^= 1;
        let result = Point::new_uncompressed(&bytes32(GX_HEX), &bad_y);
        assert!(matches!(result, Err(Error::InvalidPoint { .. })));
    }

    #[test]
    fn test_uncompressed_serialization_round_trip() {
        let g = base_point_g();
        let encoded = g.serialize_uncompressed();

        assert_eq!(encoded[0], 0x04);
        assert_eq!(&encoded[1..33], &bytes32(GX_HEX));
        assert_eq!(&encoded[33..65], &bytes32(GY_HEX));

        let decoded = Point::deserialize_uncompressed(&encoded).unwrap();
        assert_eq!(decoded, g);
    }

    #[test]
    fn test_compressed_serialization_round_trip() {
        let g = base_point_g();
        let encoded = g.serialize_compressed();

        // Gy is even, so the tag must be 0x02
        assert_eq!(encoded[0], 0x02);
        assert_eq!(&encoded[1..], &bytes32(GX_HEX));

        let decoded = Point::deserialize_compressed(&encoded).unwrap();
        assert_eq!(decoded, g);
    }

    #[test]
    fn test_compressed_parity_selects_root() {
        // Flipping the tag must produce the other root, p - Gy
        let g = base_point_g();
        let mut encoded = g.serialize_compressed();
        encoded[0] = 0x03;

        let mirrored = Point::deserialize_compressed(&encoded).unwrap();
        assert_eq!(mirrored.x_coordinate_bytes(), g.x_coordinate_bytes());
        assert_eq!(
            FieldElement::from_bytes(&mirrored.y_coordinate_bytes()).unwrap(),
            FieldElement::from_bytes(&g.y_coordinate_bytes())
                .unwrap()
                .negate()
        );
    }

    #[test]
    fn test_detect_format() {
        let g = base_point_g();
        assert_eq!(
            Point::detect_format(&g.serialize_uncompressed()).unwrap(),
            PointFormat::Uncompressed
        );
        assert_eq!(
            Point::detect_format(&g.serialize_compressed()).unwrap(),
            PointFormat::Compressed
        );
        assert_eq!(
            Point::detect_format(&[0u8; SM2_POINT_UNCOMPRESSED_SIZE]).unwrap(),
            PointFormat::Identity
        );
        assert!(Point::detect_format(&[0x05u8; 65]).is_err());
        assert!(Point::detect_format(&[]).is_err());
    }

    #[test]
    fn test_add_double_consistency() {
        let g = base_point_g();
        let two_g = g.double();
        assert_eq!(g.add(&g), two_g);

        let three_g = two_g.add(&g);
        assert_eq!(g.mul(&small_scalar(3)).unwrap(), three_g);
    }

    #[test]
    fn test_mul_by_one_is_identity_map() {
        let g = base_point_g();
        assert_eq!(g.mul(&small_scalar(1)).unwrap(), g);
    }

    #[test]
    fn test_add_identity() {
        let g = base_point_g();
        let id = Point::identity();
        assert_eq!(g.add(&id), g);
        assert_eq!(id.add(&g), g);
        assert!(id.is_identity());
    }

    #[test]
    fn test_scalar_mult_identity_point() {
        let id = Point::identity();
        let result = scalar_mult(&small_scalar(7), &id).unwrap();
        assert!(result.is_identity());
    }

    #[test]
    fn test_known_scalar_multiple() {
        // GB/T 32918.5 appendix A example keypair
        let d = Scalar::new(bytes32(SAMPLE_D_HEX)).unwrap();
        let public = scalar_mult_base_g(&d).unwrap();

        assert_eq!(public.x_coordinate_bytes(), bytes32(SAMPLE_PX_HEX));
        assert_eq!(public.y_coordinate_bytes(), bytes32(SAMPLE_PY_HEX));
    }

    #[test]
    fn test_derived_point_satisfies_curve_equation() {
        let d = Scalar::new(bytes32(SAMPLE_D_HEX)).unwrap();
        let public = scalar_mult_base_g(&d).unwrap();

        // Reconstructing through the validating constructor re-checks
        // y² = x³ + ax + b
        let rebuilt = Point::new_uncompressed(
            &public.x_coordinate_bytes(),
            &public.y_coordinate_bytes(),
        );
        assert!(rebuilt.is_ok());
    }
}

/// Tests for keypair generation
mod key_tests {
    use super::*;

    #[test]
    fn test_generate_keypair_valid() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6b65);
        let (private_key, public_key) = generate_keypair(&mut rng).unwrap();

        assert!(!private_key.is_zero());
        assert!(!public_key.is_identity());

        // The public point must round-trip through the validating decoder
        let encoded = public_key.serialize_uncompressed();
        assert_eq!(
            Point::deserialize_uncompressed(&encoded).unwrap(),
            public_key
        );
    }

    #[test]
    fn test_generate_keypair_distinct() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6b66);
        let (first, _) = generate_keypair(&mut rng).unwrap();
        let (second, _) = generate_keypair(&mut rng).unwrap();

        assert_ne!(first.serialize(), second.serialize());
    }

    #[test]
    fn test_generate_keypair_matches_derivation() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6b67);
        let (private_key, public_key) = generate_keypair(&mut rng).unwrap();

        let derived = scalar_mult_base_g(&private_key).unwrap();
        assert_eq!(derived, public_key);
    }

    #[test]
    fn test_generate_keypair_hex_shape() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6b68);
        let pair = generate_keypair_hex(&mut rng).unwrap();

        assert_eq!(pair.private_key.len(), SM2_COORDINATE_HEX_WIDTH);
        assert_eq!(pair.public_key.len(), SM2_POINT_UNCOMPRESSED_HEX_WIDTH);
        assert!(pair.public_key.starts_with("04"));
        assert!(pair
            .private_key
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_keypair_debug_redacts_private_key() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6b69);
        let pair = generate_keypair_hex(&mut rng).unwrap();
        let rendered = format!("{:?}", pair);

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains(&pair.private_key));
    }
}

/// Tests for the hex-string utility layer
mod hex_tests {
    use super::*;

    fn g_uncompressed_hex() -> String {
        let mut s = String::from("04");
        s.push_str(GX_HEX);
        s.push_str(GY_HEX);
        s
    }

    #[test]
    fn test_compress_base_point() {
        let compressed = compress_public_key_hex(&g_uncompressed_hex()).unwrap();
        assert_eq!(compressed, format!("02{}", GX_HEX));
    }

    #[test]
    fn test_decompress_base_point() {
        // The published uncompressed encoding must come back exactly
        let compressed = format!("02{}", GX_HEX);
        let decompressed = decompress_public_key_hex(&compressed).unwrap();
        assert_eq!(decompressed, g_uncompressed_hex());
    }

    #[test]
    fn test_compress_decompress_round_trip() {
        let original = g_uncompressed_hex();
        let compressed = compress_public_key_hex(&original).unwrap();
        let restored = decompress_public_key_hex(&compressed).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_compress_idempotent_on_compressed_input() {
        let compressed = compress_public_key_hex(&g_uncompressed_hex()).unwrap();
        let again = compress_public_key_hex(&compressed).unwrap();
        assert_eq!(again, compressed);
    }

    #[test]
    fn test_decompress_passthrough_on_uncompressed_input() {
        let original = g_uncompressed_hex();
        assert_eq!(decompress_public_key_hex(&original).unwrap(), original);
    }

    #[test]
    fn test_sample_keypair_hex_round_trip() {
        // GB/T 32918.5 appendix A: Py ends in 0x13, so the tag is "03"
        let uncompressed = format!("04{}{}", SAMPLE_PX_HEX, SAMPLE_PY_HEX);
        let compressed = compress_public_key_hex(&uncompressed).unwrap();
        assert_eq!(compressed, format!("03{}", SAMPLE_PX_HEX));

        assert_eq!(
            decompress_public_key_hex(&compressed).unwrap(),
            uncompressed
        );
    }

    #[test]
    fn test_derive_public_key_hex_sample_vector() {
        let public = derive_public_key_hex(SAMPLE_D_HEX).unwrap();
        assert_eq!(public, format!("04{}{}", SAMPLE_PX_HEX, SAMPLE_PY_HEX));
    }

    #[test]
    fn test_derive_public_key_hex_one_is_base_point() {
        // d = 1 maps to G itself; short input is left-padded
        assert_eq!(derive_public_key_hex("1").unwrap(), g_uncompressed_hex());
    }

    #[test]
    fn test_derive_public_key_hex_rejects_zero() {
        let full_width_zero = "0".repeat(64);
        for zero in ["0", "00", full_width_zero.as_str()] {
            let result = derive_public_key_hex(zero);
            assert!(matches!(result, Err(Error::InvalidScalar { .. })));
        }
    }

    #[test]
    fn test_derive_public_key_hex_rejects_order() {
        let n_hex = "fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123";
        let result = derive_public_key_hex(n_hex);
        assert!(matches!(result, Err(Error::InvalidScalar { .. })));
    }

    #[test]
    fn test_derive_public_key_hex_rejects_overlong() {
        let too_long = "ff".repeat(33);
        let result = derive_public_key_hex(&too_long);
        assert!(matches!(result, Err(Error::Length { .. })));
    }

    #[test]
    fn test_derive_public_key_hex_rejects_malformed_hex() {
        let result = derive_public_key_hex("zz45208f7b2144b1");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_compress_rejects_wrong_width() {
        // "04"-tagged input must be exactly 130 digits
        let truncated = &g_uncompressed_hex()[..128];
        let result = compress_public_key_hex(truncated);
        assert!(matches!(result, Err(Error::Length { .. })));
    }

    #[test]
    fn test_compress_rejects_malformed_hex() {
        let mut corrupted = g_uncompressed_hex();
        corrupted.replace_range(10..12, "zz");
        let result = compress_public_key_hex(&corrupted);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_decompress_rejects_wrong_width() {
        // 65 digits: the parity tag would be mangled by padding, so the
        // width check must fire first
        let odd_width = format!("2{}", GX_HEX);
        let result = decompress_public_key_hex(&odd_width);
        assert!(matches!(result, Err(Error::Length { .. })));
    }

    #[test]
    fn test_decompress_rejects_malformed_hex() {
        let corrupted = format!("02{}", GX_HEX.replace("32", "zz"));
        let result = decompress_public_key_hex(&corrupted);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_decompress_rejects_non_residue_x() {
        // Roughly half of all x values have no curve solution. Sweep a
        // small range: every failure must be the invalid-point kind,
        // and the range is wide enough that some x must fail.
        let mut failures = 0;
        for x in 0u32..20 {
            let candidate = format!("02{:064x}", x);
            match decompress_public_key_hex(&candidate) {
                Ok(decompressed) => {
                    // Whatever decompressed must be a real curve point
                    let bytes = hex::decode(&decompressed).unwrap();
                    assert!(Point::deserialize_uncompressed(&bytes).is_ok());
                }
                Err(Error::InvalidPoint { .. }) => failures += 1,
                Err(other) => panic!("unexpected error kind: {:?}", other),
            }
        }
        assert!(failures > 0);
    }

    #[test]
    fn test_domain_params_accessor() {
        let params = domain_params();
        assert_eq!(params.g_x, bytes32(GX_HEX));
        assert_eq!(params.h, 1);
        // Same immutable instance on every call
        assert!(core::ptr::eq(params, domain_params()));
    }
}
