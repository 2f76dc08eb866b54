//! Typed run keys for the benchmark data set.
//!
//! A run file is named `<alphabet>.<size>.<algorithm>.<case>.csv` with exactly
//! four dot-delimited fields. The fields themselves may contain underscores
//! (`amino_acid.large.boyer_moore.worst.csv`), which is why the schema uses a
//! fixed delimiter instead of suffix matching on underscore-joined tokens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing run keys or their fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("expected 4 dot-delimited fields (alphabet.size.algorithm.case), found {found}")]
    WrongFieldCount { found: usize },
    #[error("unknown {field} token: {token:?}")]
    UnknownToken { field: &'static str, token: String },
}

impl KeyError {
    fn unknown(field: &'static str, token: &str) -> Self {
        Self::UnknownToken {
            field,
            token: token.to_string(),
        }
    }
}

/// Input alphabet the benchmark texts were drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    Binary,
    Dna,
    AminoAcid,
    Ascii,
}

impl Alphabet {
    pub const ALL: [Self; 4] = [Self::Binary, Self::Dna, Self::AminoAcid, Self::Ascii];

    /// Number of distinct symbols in the alphabet.
    pub fn symbol_count(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Dna => 4,
            Self::AminoAcid => 23,
            Self::Ascii => 256,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Dna => "dna",
            Self::AminoAcid => "amino_acid",
            Self::Ascii => "ascii",
        }
    }
}

impl FromStr for Alphabet {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Self::Binary),
            "dna" => Ok(Self::Dna),
            "amino_acid" => Ok(Self::AminoAcid),
            "ascii" => Ok(Self::Ascii),
            other => Err(KeyError::unknown("alphabet", other)),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Text size class of the benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Large,
}

impl SizeClass {
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];

    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

impl FromStr for SizeClass {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            other => Err(KeyError::unknown("size", other)),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Pattern-search algorithm under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    BoyerMoore,
    Kmp,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::BruteForce, Self::BoyerMoore, Self::Kmp];

    pub fn token(self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::BoyerMoore => "boyer_moore",
            Self::Kmp => "kmp",
        }
    }

    /// Human-readable chart label.
    pub fn label(self) -> &'static str {
        match self {
            Self::BruteForce => "Brute Force",
            Self::BoyerMoore => "Boyer-Moore",
            Self::Kmp => "KMP",
        }
    }
}

impl FromStr for Algorithm {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute_force" => Ok(Self::BruteForce),
            "boyer_moore" => Ok(Self::BoyerMoore),
            "kmp" => Ok(Self::Kmp),
            other => Err(KeyError::unknown("algorithm", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Measurement scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    Best,
    Average,
    Worst,
}

impl CaseKind {
    pub fn token(self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Average => "average",
            Self::Worst => "worst",
        }
    }
}

impl FromStr for CaseKind {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(Self::Best),
            "average" => Ok(Self::Average),
            "worst" => Ok(Self::Worst),
            other => Err(KeyError::unknown("case", other)),
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Identity of a single benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunKey {
    pub alphabet: Alphabet,
    pub size: SizeClass,
    pub algorithm: Algorithm,
    pub case: CaseKind,
}

impl RunKey {
    /// Parse a key from a file stem (file name without the `.csv` extension).
    pub fn from_file_stem(stem: &str) -> Result<Self, KeyError> {
        let fields: Vec<&str> = stem.split('.').collect();
        if fields.len() != 4 {
            return Err(KeyError::WrongFieldCount {
                found: fields.len(),
            });
        }

        Ok(Self {
            alphabet: fields[0].parse()?,
            size: fields[1].parse()?,
            algorithm: fields[2].parse()?,
            case: fields[3].parse()?,
        })
    }

    /// File stem this key maps to under the naming schema.
    pub fn file_stem(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.alphabet, self.size, self.algorithm, self.case
        )
    }
}

impl fmt::Display for RunKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} {} ({} case)",
            self.algorithm.label(),
            self.alphabet,
            self.size,
            self.case
        )
    }
}
