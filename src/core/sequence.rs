/// A named input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Record name (first FASTA record, or the file stem for raw text)
    pub name: String,

    /// Symbols in input order
    pub symbols: Vec<u8>,
}

impl Sequence {
    pub fn new(name: impl Into<String>, symbols: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// MD5 of the upper-cased symbols, lowercase hex
    #[must_use]
    pub fn md5(&self) -> String {
        let uppercase: Vec<u8> = self.symbols.iter().map(u8::to_ascii_uppercase).collect();
        format!("{:x}", md5::compute(&uppercase))
    }
}

/// Read-only indexed access to a run of symbols.
///
/// Lets the DP sweeps walk a slice front-to-back or back-to-front without
/// materialising a reversed copy.
pub trait SymbolView {
    fn len(&self) -> usize;

    /// Symbol at position `i` of the view; `i < self.len()`
    fn at(&self, i: usize) -> u8;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A slice in its natural order
#[derive(Debug, Clone, Copy)]
pub struct Forward<'a>(pub &'a [u8]);

/// A slice read from its last symbol to its first
#[derive(Debug, Clone, Copy)]
pub struct Reversed<'a>(pub &'a [u8]);

impl SymbolView for Forward<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn at(&self, i: usize) -> u8 {
        self.0[i]
    }
}

impl SymbolView for Reversed<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn at(&self, i: usize) -> u8 {
        self.0[self.0.len() - 1 - i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_view() {
        let view = Reversed(b"ACGT");
        let collected: Vec<u8> = (0..view.len()).map(|i| view.at(i)).collect();
        assert_eq!(collected, b"TGCA");
        assert!(Reversed(b"").is_empty());
    }

    #[test]
    fn test_forward_view() {
        let view = Forward(b"ACG");
        assert_eq!(view.len(), 3);
        assert_eq!(view.at(2), b'G');
    }

    #[test]
    fn test_md5_is_case_insensitive() {
        // "ACGT" uppercase -> MD5 = f1f8f4bf413b16ad135722aa4591043e
        assert_eq!(
            Sequence::new("s", "acgt").md5(),
            "f1f8f4bf413b16ad135722aa4591043e"
        );
        assert_eq!(Sequence::new("s", "ACGT").md5(), Sequence::new("t", "acgt").md5());
    }
}
