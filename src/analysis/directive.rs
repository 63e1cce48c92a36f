//! Output directive: which quantities to report and in what unit.

use crate::dsl::prefix_multiplier;

use super::Quantity;

/// Marker that switches a request to magnitude/phase form.
const DECIBEL_MARKER: &str = "dB";

/// One requested output column.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRequest {
    /// Request as written, e.g. `"Av dB"`; used verbatim as the result key
    pub key: String,
    /// Unit token, e.g. `"dBmW"`, `"V"`, or empty
    pub unit: String,
}

impl OutputRequest {
    /// Create a request for `name` with an optional unit.
    pub fn new(name: &str, unit: &str) -> Self {
        let key = if unit.is_empty() {
            name.to_string()
        } else {
            format!("{name} {unit}")
        };
        Self {
            key,
            unit: unit.to_string(),
        }
    }

    /// The quantity named by the first word of the key, if known.
    pub fn quantity(&self) -> Option<Quantity> {
        self.key.split_whitespace().next().and_then(Quantity::from_name)
    }

    /// The decibel scaling requested by the unit, if any.
    pub fn decibel(&self) -> Option<DecibelScale> {
        DecibelScale::from_unit(&self.unit)
    }
}

/// Decibel conversion requested by a unit token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecibelScale {
    /// Reference scale the raw value is divided by before taking the log
    pub reference: f64,
}

impl DecibelScale {
    /// Parse a unit token. `None` means no decibel marker is present.
    ///
    /// An SI prefix directly after the marker (`dBm`, `dBuV`) sets the
    /// reference scale; otherwise the reference is 1.
    pub fn from_unit(unit: &str) -> Option<Self> {
        let at = unit.find(DECIBEL_MARKER)?;
        let reference = unit[at + DECIBEL_MARKER.len()..]
            .chars()
            .next()
            .and_then(prefix_multiplier)
            .unwrap_or(1.0);
        Some(Self { reference })
    }
}

/// Ordered list of output requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputDirective {
    requests: Vec<OutputRequest>,
}

impl OutputDirective {
    /// Create an empty directive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request. A repeated key keeps its first position.
    pub fn push(&mut self, request: OutputRequest) {
        if let Some(existing) = self.requests.iter_mut().find(|r| r.key == request.key) {
            *existing = request;
        } else {
            self.requests.push(request);
        }
    }

    /// Builder-style append of `name` with `unit`.
    pub fn with(mut self, name: &str, unit: &str) -> Self {
        self.push(OutputRequest::new(name, unit));
        self
    }

    /// All requests in order.
    pub fn requests(&self) -> &[OutputRequest] {
        &self.requests
    }

    /// Requests naming a known quantity, paired with that quantity.
    pub fn resolved(&self) -> impl Iterator<Item = (&OutputRequest, Quantity)> {
        self.requests
            .iter()
            .filter_map(|r| r.quantity().map(|q| (r, q)))
    }

    /// Number of requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether no outputs were requested.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_key_and_quantity() {
        let r = OutputRequest::new("Av", "dB");
        assert_eq!(r.key, "Av dB");
        assert_eq!(r.quantity(), Some(Quantity::Av));

        let bare = OutputRequest::new("Zin", "");
        assert_eq!(bare.key, "Zin");
        assert_eq!(bare.decibel(), None);

        assert_eq!(OutputRequest::new("Gain", "dB").quantity(), None);
    }

    #[test]
    fn test_decibel_prefixes() {
        assert_eq!(DecibelScale::from_unit("dB"), Some(DecibelScale { reference: 1.0 }));
        assert_eq!(DecibelScale::from_unit("dBV"), Some(DecibelScale { reference: 1.0 }));
        assert_eq!(DecibelScale::from_unit("dBmW"), Some(DecibelScale { reference: 1e-3 }));
        assert_eq!(DecibelScale::from_unit("dBuV"), Some(DecibelScale { reference: 1e-6 }));
        assert_eq!(DecibelScale::from_unit("dBk"), Some(DecibelScale { reference: 1e3 }));
        assert_eq!(DecibelScale::from_unit("V"), None);
        assert_eq!(DecibelScale::from_unit(""), None);
    }

    #[test]
    fn test_directive_keeps_order_and_dedupes() {
        let directive = OutputDirective::new()
            .with("Vin", "V")
            .with("Av", "dB")
            .with("Vin", "V")
            .with("Bogus", "");
        let keys: Vec<&str> = directive.requests().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["Vin V", "Av dB", "Bogus"]);
        assert_eq!(directive.resolved().count(), 2);
    }

    #[test]
    fn test_same_quantity_under_two_units() {
        let directive = OutputDirective::new().with("Pout", "W").with("Pout", "dBmW");
        assert_eq!(directive.len(), 2);
    }
}
