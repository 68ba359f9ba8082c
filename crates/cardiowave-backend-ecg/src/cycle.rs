//! Piecewise model of a single cardiac cycle.
//!
//! A beat is described by its phase in `[0, 1)`. The cycle is split into
//! fixed segments (P wave, PR segment, QRS complex, ST segment, T wave, TP
//! segment) and each segment maps phase to amplitude with a simple closed
//! form. Every rhythm strategy draws its P-QRS-T geometry from here.
//!
//! | Segment | Narrow phase    | Wide phase      |
//! |---------|-----------------|-----------------|
//! | P       | `[0.00, 0.15)`  | flat            |
//! | PR      | `[0.15, 0.20)`  | `[0.15, 0.20)`  |
//! | QRS     | `[0.20, 0.30)`  | `[0.20, 0.50)`  |
//! | ST      | `[0.30, 0.50)`  | none            |
//! | T       | `[0.50, 0.80)`  | flat            |
//! | TP      | `[0.80, 1.00)`  | `[0.50, 1.00)`  |

use std::f64::consts::PI;

/// End of the P wave.
pub const P_WAVE_END: f64 = 0.15;
/// Start of the QRS complex (end of the PR segment).
pub const QRS_START: f64 = 0.2;
/// End of a narrow QRS complex.
pub const NARROW_QRS_END: f64 = 0.3;
/// End of a wide (ectopic) QRS complex.
pub const WIDE_QRS_END: f64 = 0.5;
/// Start of the T wave (end of the ST segment).
pub const T_WAVE_START: f64 = 0.5;
/// End of the T wave.
pub const T_WAVE_END: f64 = 0.8;

const NARROW_QRS_WIDTH: f64 = 0.1;
const WIDE_QRS_WIDTH: f64 = 0.3;
const T_WAVE_WIDTH: f64 = 0.3;

const P_WAVE_AMPLITUDE: f64 = 0.2;
const T_WAVE_AMPLITUDE: f64 = 0.3;

/// QRS shape used for a beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexShape {
    /// Normally conducted beat with a narrow QRS.
    Narrow,
    /// Ectopic ventricular beat with a wide, bizarre QRS and no P or T wave.
    Wide,
}

impl ComplexShape {
    /// Evaluates the shape at a phase.
    pub fn amplitude(self, phase: f64) -> f64 {
        match self {
            ComplexShape::Narrow => narrow_complex(phase),
            ComplexShape::Wide => wide_complex(phase),
        }
    }
}

/// Amplitude of a normally conducted beat at `phase`.
pub fn narrow_complex(phase: f64) -> f64 {
    if phase < P_WAVE_END {
        return (PI * phase / P_WAVE_END).sin() * P_WAVE_AMPLITUDE;
    }

    if phase < QRS_START {
        return 0.0;
    }

    if phase < NARROW_QRS_END {
        let q = (phase - QRS_START) / NARROW_QRS_WIDTH;
        return if q < 0.2 {
            // Q: small negative dip
            -q * 0.5
        } else if q < 0.6 {
            // R: sharp upstroke to 1.0
            (q - 0.2) * 2.5
        } else {
            // S: fall through the baseline
            1.0 - (q - 0.6) * 3.0
        };
    }

    if phase < T_WAVE_START {
        return 0.0;
    }

    if phase < T_WAVE_END {
        let t = phase - T_WAVE_START;
        return (PI * t / T_WAVE_WIDTH).sin() * T_WAVE_AMPLITUDE;
    }

    0.0
}

/// Amplitude of an ectopic ventricular beat at `phase`.
pub fn wide_complex(phase: f64) -> f64 {
    if !(QRS_START..WIDE_QRS_END).contains(&phase) {
        return 0.0;
    }

    let q = (phase - QRS_START) / WIDE_QRS_WIDTH;
    if q < 0.3 {
        -q * 0.8
    } else if q < 0.7 {
        (q - 0.3) * 2.0
    } else {
        0.8 - (q - 0.7) * 2.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_narrow_starts_at_baseline() {
        assert_eq!(narrow_complex(0.0), 0.0);
    }

    #[test]
    fn test_p_wave_peak() {
        assert!(approx(narrow_complex(0.075), 0.2));
    }

    #[test]
    fn test_flat_segments() {
        assert_eq!(narrow_complex(0.17), 0.0); // PR
        assert_eq!(narrow_complex(0.4), 0.0); // ST
        assert_eq!(narrow_complex(0.9), 0.0); // TP
    }

    #[test]
    fn test_qrs_landmarks() {
        // Q trough just before the R upstroke
        assert!(narrow_complex(0.219) < 0.0);
        // R peak at q = 0.6
        assert!(approx(narrow_complex(0.26), 1.0));
        // S dips below baseline at the end of the complex
        assert!(narrow_complex(0.2999) < 0.0);
    }

    #[test]
    fn test_r_peak_is_global_maximum() {
        let max = (0..1000)
            .map(|i| narrow_complex(i as f64 / 1000.0))
            .fold(f64::MIN, f64::max);
        assert!(approx(max, 1.0));
    }

    #[test]
    fn test_t_wave_peak() {
        assert!(approx(narrow_complex(0.65), 0.3));
    }

    #[test]
    fn test_wide_has_no_p_or_t_wave() {
        assert_eq!(wide_complex(0.075), 0.0);
        assert_eq!(wide_complex(0.65), 0.0);
        assert_eq!(wide_complex(0.95), 0.0);
    }

    #[test]
    fn test_wide_qrs_landmarks() {
        // Peak at q = 0.7 -> phase 0.41
        assert!(approx(wide_complex(0.41), 0.8));
        // Trough at q -> 0.3 from below
        assert!(wide_complex(0.2899) < -0.23);
        // Still inside the complex where the narrow one has ended
        assert!(wide_complex(0.35).abs() > 0.0);
        assert_eq!(narrow_complex(0.35), 0.0);
    }

    #[test]
    fn test_shape_dispatch() {
        for i in 0..100 {
            let phase = i as f64 / 100.0;
            assert_eq!(ComplexShape::Narrow.amplitude(phase), narrow_complex(phase));
            assert_eq!(ComplexShape::Wide.amplitude(phase), wide_complex(phase));
        }
    }
}
