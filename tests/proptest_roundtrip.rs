use proptest::collection::vec;
use proptest::prelude::*;

use haar2::{
    compress, haar2_pyramid, haar2_pyramid_inverse, haar2_standard, haar2_standard_inverse,
    haar_forward, haar_inverse,
};

fn pow2_signal() -> impl Strategy<Value = Vec<f64>> {
    (0u32..7).prop_flat_map(|k| vec(-1000.0f64..1000.0, 1usize << k))
}

fn pow2_grid() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (0u32..4).prop_flat_map(|k| {
        let side = 1usize << k;
        vec(vec(-100.0f64..100.0, side), side)
    })
}

proptest! {
    #[test]
    fn forward_inverse_is_identity(x in pow2_signal()) {
        let recon = haar_inverse(&haar_forward(&x).unwrap()).unwrap();
        for (a, b) in x.iter().zip(recon.iter()) {
            prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn forward_preserves_length(x in pow2_signal()) {
        prop_assert_eq!(haar_forward(&x).unwrap().len(), x.len());
    }

    #[test]
    fn standard_2d_roundtrip(m in pow2_grid()) {
        let recon = haar2_standard_inverse(&haar2_standard(&m).unwrap()).unwrap();
        for (orig, rec) in m.iter().zip(recon.iter()) {
            for (a, b) in orig.iter().zip(rec.iter()) {
                prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn pyramid_2d_roundtrip(m in pow2_grid()) {
        let recon = haar2_pyramid_inverse(&haar2_pyramid(&m).unwrap()).unwrap();
        for (orig, rec) in m.iter().zip(recon.iter()) {
            for (a, b) in orig.iter().zip(rec.iter()) {
                prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn compress_preserves_length(x in pow2_signal(), q in 0.0001f64..=1.0) {
        let compressed = compress(&x, q).unwrap();
        prop_assert_eq!(compressed.len(), x.len());
    }

    #[test]
    fn compress_keeps_at_least_floor_quota(x in pow2_signal(), q in 0.0001f64..=1.0) {
        // Every zeroed rank comes from the tail of the signed ordering, so at
        // most len - floor(len * q) coefficients can change.
        let coeffs = haar_forward(&x).unwrap();
        let compressed = compress(&x, q).unwrap();
        let changed = coeffs
            .iter()
            .zip(compressed.iter())
            .filter(|(a, b)| a != b)
            .count();
        let retain = (x.len() as f64 * q) as usize;
        prop_assert!(changed <= x.len() - retain);
    }
}
