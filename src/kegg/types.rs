// KEGG API request and response types.
// Closed option vocabularies and content kinds are enums, not strings.

/// How a response body is decoded and cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Json,
    Image,
}

/// A loaded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Json(serde_json::Value),
    Image(Vec<u8>),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Text(_) => ContentKind::Text,
            Content::Json(_) => ContentKind::Json,
            Content::Image(_) => ContentKind::Image,
        }
    }

    /// Text body, if this is a text response.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Option for the `list` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOption {
    /// Binary relation files; only valid with the `brite` database.
    Xl,
    /// Restrict the listing to one organism; only valid with the `pathway`
    /// and `module` databases.
    Organism(String),
}

impl ListOption {
    /// Wire token used in the request path and cache filename.
    pub fn as_str(&self) -> &str {
        match self {
            ListOption::Xl => "xl",
            ListOption::Organism(code) => code,
        }
    }
}

/// Option for the `find` operation; only valid with the `compound` and
/// `drug` databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOption {
    Formula,
    ExactMass,
    MolWeight,
}

impl FindOption {
    /// Wire token used in the request path and cache filename.
    /// `exact_mass` is the literal the API accepts; the space-separated
    /// spelling found in upstream prose is not a token.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindOption::Formula => "formula",
            FindOption::ExactMass => "exact_mass",
            FindOption::MolWeight => "mol_weight",
        }
    }
}

/// Option for the `get` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetOption {
    AaSeq,
    NtSeq,
    Mol,
    Kcf,
    Image,
    Conf,
    Kgml,
    Json,
}

impl GetOption {
    /// Wire token used in the request path and cache filename.
    pub fn as_str(&self) -> &'static str {
        match self {
            GetOption::AaSeq => "aaseq",
            GetOption::NtSeq => "ntseq",
            GetOption::Mol => "mol",
            GetOption::Kcf => "kcf",
            GetOption::Image => "image",
            GetOption::Conf => "conf",
            GetOption::Kgml => "kgml",
            GetOption::Json => "json",
        }
    }

    /// Content kind the option's response decodes as.
    pub fn kind(&self) -> ContentKind {
        match self {
            GetOption::Json => ContentKind::Json,
            GetOption::Image => ContentKind::Image,
            GetOption::AaSeq
            | GetOption::NtSeq
            | GetOption::Mol
            | GetOption::Kcf
            | GetOption::Conf
            | GetOption::Kgml => ContentKind::Text,
        }
    }
}

/// A parsed item/description listing.
///
/// `descriptions`, when present, is parallel to `entries`: equal length,
/// same source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<String>,
    pub descriptions: Option<Vec<String>>,
}
