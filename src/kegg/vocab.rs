// Database-category vocabulary.
// The valid database tokens are fixed at construction and never mutated;
// tests can inject an alternate set.

/// Database categories accepted by the public KEGG REST API.
const KEGG_DATABASES: &[&str] = &[
    "pathway", "brite", "module", "ko", "genome", "vg", "ag", "compound",
    "glycan", "reaction", "rclass", "enzyme", "network", "variant", "disease",
    "drug", "dgroup", "environ", "atc", "jtc", "ndc", "yj", "pubmed", "hsa",
];

/// The set of valid database-category names.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    databases: Vec<String>,
}

impl Vocabulary {
    /// The standard KEGG database categories.
    pub fn kegg() -> Self {
        Self::new(KEGG_DATABASES.iter().copied())
    }

    /// A vocabulary with a custom database set.
    pub fn new<I, S>(databases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            databases: databases.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether `database` is a valid category.
    pub fn contains(&self, database: &str) -> bool {
        self.databases.iter().any(|db| db == database)
    }

    /// All valid category tokens.
    pub fn databases(&self) -> &[String] {
        &self.databases
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::kegg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kegg_vocabulary() {
        let vocab = Vocabulary::kegg();
        assert!(vocab.contains("pathway"));
        assert!(vocab.contains("brite"));
        assert!(vocab.contains("drug"));
        assert!(!vocab.contains("not-a-real-db"));
        assert!(!vocab.contains(""));
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocab = Vocabulary::new(["alpha", "beta"]);
        assert!(vocab.contains("alpha"));
        assert!(!vocab.contains("pathway"));
        assert_eq!(vocab.databases().len(), 2);
    }
}
