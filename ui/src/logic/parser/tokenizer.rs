//! Splits a command's argument string into prefixed values.
//!
//! Arguments look like `n/Alex Yeoh p/87438807 t/friend t/TA`: a prefix
//! marks where a value starts, and the value runs until the next prefix or
//! the end of input. A prefix only counts when it follows whitespace, so
//! values may contain `x/` sequences verbatim (e.g. an office `COM1/B1`).

/// A marker such as `n/` introducing an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

pub const PREFIX_ROLE: Prefix = Prefix("r/");
pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_OFFICE: Prefix = Prefix("o/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_MODULE: Prefix = Prefix("m/");
pub const PREFIX_CODE: Prefix = Prefix("c/");

/// The tokenized arguments: the text before the first prefix plus every
/// prefixed value in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMap {
    /// The text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(found, _)| *found == prefix)
    }

    /// The value of the last occurrence of `prefix`, the one that wins
    /// when a single-valued argument is repeated.
    pub fn value_of(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(found, _)| *found == prefix)
            .map(|(_, value)| value.as_str())
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values_of(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(found, _)| *found == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

/// Tokenizes `args` around the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMap {
    // A leading space makes "prefix at the start" and "prefix after
    // whitespace" the same case.
    let padded = format!(" {args}");

    let mut markers: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let needle = format!(" {}", prefix.0);
        let mut from = 0;
        while let Some(found) = padded[from..].find(&needle) {
            let at = from + found + 1;
            markers.push((at, prefix));
            from = at + prefix.0.len();
        }
    }
    markers.sort_by_key(|(at, _)| *at);

    let preamble_end = markers.first().map_or(padded.len(), |(at, _)| *at);
    let preamble = padded[..preamble_end].trim().to_string();

    let mut values = Vec::with_capacity(markers.len());
    for (position, &(at, prefix)) in markers.iter().enumerate() {
        let value_start = at + prefix.0.len();
        let value_end = markers
            .get(position + 1)
            .map_or(padded.len(), |(next, _)| *next);
        values.push((prefix, padded[value_start..value_end].trim().to_string()));
    }

    ArgumentMap { preamble, values }
}
