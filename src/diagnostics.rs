use std::fmt;

/// A recoverable anomaly found while reading a definition: an object key that
/// is neither a known property nor a child-element key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub object: String,
    pub property: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported property '{}' in '{}' object",
            self.property, self.object
        )
    }
}

/// Collects the warnings emitted during one parse call.
///
/// Every recorded warning is also forwarded to `tracing` at `WARN` level.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn unsupported_property(&mut self, object: &str, property: &str) {
        let warning = Warning {
            object: object.to_string(),
            property: property.to_string(),
        };
        tracing::warn!(object, property, "{}", warning);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}
