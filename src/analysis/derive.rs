//! Two-port parameter derivation.
//!
//! Given the network matrix `[[A, B], [C, D]]`, the load `Z_L`, the source
//! resistance `Z_S` and the Thevenin voltage `V_th`:
//!
//! ```text
//! Zin  = (A·Z_L + B) / (C·Z_L + D)
//! Zout = (D·Z_S + B) / (C·Z_S + A)
//! V1   = V_th · Zin / (Zin + Z_S)
//! I1   = V1 / Zin
//! I2   = V1 / (A·Z_L + B)
//! V2   = Z_L · I2
//! Pin  = V1 · conj(I1)
//! Pout = V2 · conj(I2)
//! Av   = 1 / (A + B / Z_L)
//! Ai   = I2 / I1
//! Ap   = Pout / Pin
//! ```
//!
//! Singular denominators are not special-cased. A non-finite result is
//! reported as [`CascadeError::DerivationFault`].

use num_complex::Complex64;

use crate::circuit::AbcdMatrix;
use crate::error::{CascadeError, Result};

use super::{Quantity, Terminations};

/// All derived quantities at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPortSolution {
    pub frequency: f64,
    pub zin: Complex64,
    pub zout: Complex64,
    pub vin: Complex64,
    pub iin: Complex64,
    pub iout: Complex64,
    pub vout: Complex64,
    pub pin: Complex64,
    pub pout: Complex64,
    pub av: Complex64,
    pub ai: Complex64,
    pub ap: Complex64,
}

impl TwoPortSolution {
    /// Derive every quantity from the network matrix at `frequency`.
    pub fn derive(frequency: f64, m: &AbcdMatrix, terms: &Terminations) -> Result<Self> {
        let zl = Complex64::from(terms.load_resistance);
        let zs = Complex64::from(terms.source_resistance);
        let vth = Complex64::from(terms.source_voltage);
        let (a, b, c, d) = (m.a, m.b, m.c, m.d);

        let zin = (a * zl + b) / (c * zl + d);
        let zout = (d * zs + b) / (c * zs + a);
        let vin = vth * zin / (zin + zs);
        let iin = vin / zin;
        let iout = vin / (a * zl + b);
        let vout = zl * iout;
        let pin = vin * iin.conj();
        let pout = vout * iout.conj();
        let av = Complex64::ONE / (a + b / zl);
        let ai = iout / iin;
        let ap = pout / pin;

        let solution = Self {
            frequency,
            zin,
            zout,
            vin,
            iin,
            iout,
            vout,
            pin,
            pout,
            av,
            ai,
            ap,
        };

        if let Some(q) = Quantity::ALL.into_iter().find(|&q| !solution.get(q).is_finite()) {
            return Err(CascadeError::DerivationFault {
                quantity: q.name(),
                frequency,
            });
        }
        Ok(solution)
    }

    /// Value of one quantity.
    pub fn get(&self, quantity: Quantity) -> Complex64 {
        match quantity {
            Quantity::Vin => self.vin,
            Quantity::Vout => self.vout,
            Quantity::Iin => self.iin,
            Quantity::Iout => self.iout,
            Quantity::Zin => self.zin,
            Quantity::Zout => self.zout,
            Quantity::Pin => self.pin,
            Quantity::Pout => self.pout,
            Quantity::Av => self.av,
            Quantity::Ai => self.ai,
            Quantity::Ap => self.ap,
        }
    }
}
