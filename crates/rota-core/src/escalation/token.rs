use regex::Regex;

/// Modifier character marking a forced ("always notify") entry.
pub const FORCED: char = '!';

/// A raw chain entry split into its name and trailing modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryToken {
    pub name: String,
    pub modifiers: String,
}

impl EntryToken {
    pub fn forced(&self) -> bool {
        self.modifiers.contains(FORCED)
    }
}

/// Compiled entry-token syntax: leading word characters form the name,
/// trailing non-word characters the modifiers. Anything else is malformed.
#[derive(Debug, Clone)]
pub struct TokenPattern(Regex);

impl TokenPattern {
    pub fn new() -> Self {
        Self(Regex::new(r"^(\w+)(\W*)$").expect("entry token pattern is valid"))
    }

    pub fn parse(&self, raw: &str) -> Option<EntryToken> {
        let caps = self.0.captures(raw)?;
        Some(EntryToken {
            name: caps[1].to_string(),
            modifiers: caps[2].to_string(),
        })
    }
}

impl Default for TokenPattern {
    fn default() -> Self {
        Self::new()
    }
}
