use std::f64::consts::PI;

use anyhow::{bail, Result};
use num_complex::Complex64;

/// Discrete Fourier transform along one grid axis.
///
/// Power-of-two lengths use an iterative radix-2 Cooley-Tukey transform,
/// all other lengths a direct summation over precomputed twiddle factors.
#[derive(Debug, Clone)]
struct AxisPlan {
    len: usize,
    /// `exp(-2πi k / len)` for `k` in `0..len`
    twiddles: Vec<Complex64>,
}

impl AxisPlan {
    fn new(len: usize) -> Self {
        let twiddles = (0..len)
            .map(|k| Complex64::from_polar(1.0, -2.0 * PI * k as f64 / len as f64))
            .collect();
        AxisPlan { len, twiddles }
    }

    fn twiddle(&self, k: usize, inverse: bool) -> Complex64 {
        let w = self.twiddles[k % self.len];
        if inverse {
            w.conj()
        } else {
            w
        }
    }

    fn transform(&self, line: &mut [Complex64], scratch: &mut Vec<Complex64>, inverse: bool) {
        if self.len <= 1 {
            return;
        }
        if self.len.is_power_of_two() {
            self.radix2(line, inverse);
        } else {
            self.direct(line, scratch, inverse);
        }
    }

    fn radix2(&self, line: &mut [Complex64], inverse: bool) {
        let n = self.len;

        // Bit-reversal permutation
        let bits = n.trailing_zeros();
        for i in 0..n {
            let j = i.reverse_bits() >> (usize::BITS - bits);
            if i < j {
                line.swap(i, j);
            }
        }

        // Butterflies
        let mut size = 2;
        while size <= n {
            let half = size / 2;
            let stride = n / size;
            for start in (0..n).step_by(size) {
                for k in 0..half {
                    let a = line[start + k];
                    let b = line[start + k + half] * self.twiddle(k * stride, inverse);
                    line[start + k] = a + b;
                    line[start + k + half] = a - b;
                }
            }
            size *= 2;
        }
    }

    fn direct(&self, line: &mut [Complex64], scratch: &mut Vec<Complex64>, inverse: bool) {
        scratch.clear();
        scratch.extend_from_slice(line);
        for (k, out) in line.iter_mut().enumerate() {
            *out = scratch
                .iter()
                .enumerate()
                .fold(Complex64::new(0.0, 0.0), |acc, (j, value)| {
                    acc + value * self.twiddle(j * k, inverse)
                });
        }
    }
}

/// Separable discrete Fourier transform over a 3D grid stored x fastest.
#[derive(Debug, Clone)]
pub struct Fourier3D {
    resolution: [usize; 3],
    plans: [AxisPlan; 3],
}

impl Fourier3D {
    pub fn new(resolution: [usize; 3]) -> Self {
        Fourier3D {
            resolution,
            plans: [
                AxisPlan::new(resolution[0]),
                AxisPlan::new(resolution[1]),
                AxisPlan::new(resolution[2]),
            ],
        }
    }

    /// Unnormalised forward transform, `X(k) = Σ x(j) exp(-2πi k·j/n)`.
    pub fn forward(&self, data: &mut [Complex64]) -> Result<()> {
        self.transform(data, false)
    }

    /// Inverse transform including the `1/N` normalisation.
    pub fn inverse(&self, data: &mut [Complex64]) -> Result<()> {
        self.transform(data, true)?;
        let scale = 1.0 / data.len() as f64;
        for value in data.iter_mut() {
            *value *= scale;
        }
        Ok(())
    }

    fn transform(&self, data: &mut [Complex64], inverse: bool) -> Result<()> {
        let [nx, ny, nz] = self.resolution;
        if data.len() != nx * ny * nz {
            bail!(
                "Transform of {} values requested on a {} x {} x {} grid.",
                data.len(),
                nx,
                ny,
                nz
            );
        }

        let mut line = Vec::new();
        let mut scratch = Vec::new();
        for axis in 0..3 {
            let n = self.resolution[axis];
            if n == 1 {
                continue;
            }
            let stride = match axis {
                0 => 1,
                1 => nx,
                _ => nx * ny,
            };
            for start in Self::line_starts(self.resolution, axis) {
                line.clear();
                line.extend((0..n).map(|j| data[start + j * stride]));
                self.plans[axis].transform(&mut line, &mut scratch, inverse);
                for (j, value) in line.iter().enumerate() {
                    data[start + j * stride] = *value;
                }
            }
        }
        Ok(())
    }

    /// First linear index of every grid line running along `axis`.
    fn line_starts(resolution: [usize; 3], axis: usize) -> Vec<usize> {
        let [nx, ny, nz] = resolution;
        let mut starts = Vec::new();
        match axis {
            0 => {
                for z in 0..nz {
                    for y in 0..ny {
                        starts.push(nx * (y + ny * z));
                    }
                }
            }
            1 => {
                for z in 0..nz {
                    for x in 0..nx {
                        starts.push(x + nx * ny * z);
                    }
                }
            }
            _ => {
                for y in 0..ny {
                    for x in 0..nx {
                        starts.push(x + nx * y);
                    }
                }
            }
        }
        starts
    }
}

/// Signed frequency of bin `bin` on an axis of length `n`.
///
/// Bins above `n/2` fold to negative frequencies; the Nyquist bin of an even
/// axis is reported as `-n/2`.
pub fn frequency(bin: usize, n: usize) -> i64 {
    if 2 * bin < n {
        bin as i64
    } else {
        bin as i64 - n as i64
    }
}

pub fn is_nyquist(bin: usize, n: usize) -> bool {
    n % 2 == 0 && 2 * bin == n
}
