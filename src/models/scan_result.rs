use super::QrSymbol;

/// Outcome of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Candidates located in the image
    pub found: usize,
    /// Candidates that decoded successfully
    pub usable: usize,
    /// Decoded symbols in candidate extraction order
    pub symbols: Vec<QrSymbol>,
}

impl ScanResult {
    /// Candidates that were located but could not be decoded
    pub fn failed(&self) -> usize {
        self.found - self.usable
    }

    /// True when no candidate was located
    pub fn is_empty(&self) -> bool {
        self.found == 0
    }

    /// Payloads of the decoded symbols
    pub fn payloads(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.payload.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ScanResult::default();
        assert!(result.is_empty());
        assert_eq!(result.failed(), 0);
        assert_eq!(result.payloads().count(), 0);
    }
}
