//! Named two-port quantities.

use std::fmt;

/// A derived electrical quantity that can be requested in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Input port voltage V1
    Vin,
    /// Output port voltage V2
    Vout,
    /// Input port current I1
    Iin,
    /// Output port current I2
    Iout,
    /// Input impedance
    Zin,
    /// Output impedance
    Zout,
    /// Complex power into the input port
    Pin,
    /// Complex power delivered to the load
    Pout,
    /// Voltage gain
    Av,
    /// Current gain
    Ai,
    /// Power gain
    Ap,
}

impl Quantity {
    /// Every quantity, in derivation order.
    pub const ALL: [Quantity; 11] = [
        Quantity::Zin,
        Quantity::Zout,
        Quantity::Vin,
        Quantity::Iin,
        Quantity::Iout,
        Quantity::Vout,
        Quantity::Pin,
        Quantity::Pout,
        Quantity::Av,
        Quantity::Ai,
        Quantity::Ap,
    ];

    /// Look up a quantity by its output name. Port aliases `V1`, `V2`, `I1`
    /// and `I2` are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Vin" | "V1" => Some(Self::Vin),
            "Vout" | "V2" => Some(Self::Vout),
            "Iin" | "I1" => Some(Self::Iin),
            "Iout" | "I2" => Some(Self::Iout),
            "Zin" => Some(Self::Zin),
            "Zout" => Some(Self::Zout),
            "Pin" => Some(Self::Pin),
            "Pout" => Some(Self::Pout),
            "Av" => Some(Self::Av),
            "Ai" => Some(Self::Ai),
            "Ap" => Some(Self::Ap),
            _ => None,
        }
    }

    /// Canonical output name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vin => "Vin",
            Self::Vout => "Vout",
            Self::Iin => "Iin",
            Self::Iout => "Iout",
            Self::Zin => "Zin",
            Self::Zout => "Zout",
            Self::Pin => "Pin",
            Self::Pout => "Pout",
            Self::Av => "Av",
            Self::Ai => "Ai",
            Self::Ap => "Ap",
        }
    }

    /// Decibel multiplier: 10 for power-like quantities, 20 otherwise.
    pub fn decibel_multiplier(&self) -> f64 {
        match self {
            Self::Pin | Self::Pout | Self::Zin | Self::Zout | Self::Ap => 10.0,
            _ => 20.0,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for q in Quantity::ALL {
            assert_eq!(Quantity::from_name(q.name()), Some(q));
        }
        assert_eq!(Quantity::from_name("V2"), Some(Quantity::Vout));
        assert_eq!(Quantity::from_name("Gain"), None);
        assert_eq!(Quantity::from_name("vin"), None);
    }

    #[test]
    fn test_decibel_multiplier() {
        assert_eq!(Quantity::Pout.decibel_multiplier(), 10.0);
        assert_eq!(Quantity::Zin.decibel_multiplier(), 10.0);
        assert_eq!(Quantity::Av.decibel_multiplier(), 20.0);
        assert_eq!(Quantity::Iin.decibel_multiplier(), 20.0);
    }
}
