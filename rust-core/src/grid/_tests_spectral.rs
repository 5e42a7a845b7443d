#[cfg(test)]
mod _tests_spectral {
    use super::super::spectral::{frequency, is_nyquist, Fourier3D};
    use num_complex::Complex64;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    // Reference transform straight from the definition
    fn naive_dft(data: &[Complex64], resolution: [usize; 3]) -> Vec<Complex64> {
        let [nx, ny, nz] = resolution;
        let mut out = vec![Complex64::new(0.0, 0.0); data.len()];
        for kz in 0..nz {
            for ky in 0..ny {
                for kx in 0..nx {
                    let mut sum = Complex64::new(0.0, 0.0);
                    for z in 0..nz {
                        for y in 0..ny {
                            for x in 0..nx {
                                let phase = -2.0
                                    * PI
                                    * ((kx * x) as f64 / nx as f64
                                        + (ky * y) as f64 / ny as f64
                                        + (kz * z) as f64 / nz as f64);
                                sum += data[x + nx * (y + ny * z)] * Complex64::from_polar(1.0, phase);
                            }
                        }
                    }
                    out[kx + nx * (ky + ny * kz)] = sum;
                }
            }
        }
        out
    }

    fn sample(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| Complex64::new((i as f64 * 0.37).sin() + 0.1 * i as f64, (i as f64 * 1.3).cos()))
            .collect()
    }

    #[test]
    fn test_forward_matches_definition_power_of_two() {
        let resolution = [4, 2, 8];
        let original = sample(64);
        let mut data = original.clone();
        Fourier3D::new(resolution).forward(&mut data).unwrap();

        let expected = naive_dft(&original, resolution);
        for (a, b) in data.iter().zip(&expected) {
            assert!((a - b).norm() < TOL);
        }
    }

    #[test]
    fn test_forward_matches_definition_mixed_lengths() {
        let resolution = [3, 5, 2];
        let original = sample(30);
        let mut data = original.clone();
        Fourier3D::new(resolution).forward(&mut data).unwrap();

        let expected = naive_dft(&original, resolution);
        for (a, b) in data.iter().zip(&expected) {
            assert!((a - b).norm() < TOL);
        }
    }

    #[test]
    fn test_inverse_restores_input() {
        let fourier = Fourier3D::new([6, 4, 3]);
        let original = sample(72);
        let mut data = original.clone();
        fourier.forward(&mut data).unwrap();
        fourier.inverse(&mut data).unwrap();

        for (a, b) in data.iter().zip(&original) {
            assert!((a - b).norm() < TOL);
        }
    }

    #[test]
    fn test_constant_field_has_only_mean() {
        let mut data = vec![Complex64::new(2.0, 0.0); 8];
        Fourier3D::new([2, 2, 2]).forward(&mut data).unwrap();

        assert!((data[0] - Complex64::new(16.0, 0.0)).norm() < TOL);
        assert!(data[1..].iter().all(|value| value.norm() < TOL));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let mut data = vec![Complex64::new(0.0, 0.0); 7];
        assert!(Fourier3D::new([2, 2, 2]).forward(&mut data).is_err());
    }

    #[test]
    fn test_frequency_folding() {
        let folded: Vec<i64> = (0..6).map(|k| frequency(k, 6)).collect();
        assert_eq!(folded, vec![0, 1, 2, -3, -2, -1]);
        let folded: Vec<i64> = (0..5).map(|k| frequency(k, 5)).collect();
        assert_eq!(folded, vec![0, 1, 2, -2, -1]);

        assert!(is_nyquist(3, 6));
        assert!(!is_nyquist(2, 5));
        assert!(!is_nyquist(0, 1));
    }
}
