use serde::{Deserialize, Serialize};

/// Provenance wrapper distinguishing live API data from the deterministic
/// sample fallback. Serializes as `{"source": "live"|"sample", "data": ...}`
/// so scripted consumers can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "data", rename_all = "lowercase")]
pub enum Sourced<T> {
    Live(T),
    Sample(T),
}

impl<T> Sourced<T> {
    pub fn data(&self) -> &T {
        match self {
            Sourced::Live(data) | Sourced::Sample(data) => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Sourced::Live(data) | Sourced::Sample(data) => data,
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, Sourced::Sample(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sourced<U> {
        match self {
            Sourced::Live(data) => Sourced::Live(f(data)),
            Sourced::Sample(data) => Sourced::Sample(f(data)),
        }
    }
}

/// Context a statistics view renders against: a whole organization or a
/// single repository within one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scope {
    Organization { name: String },
    Repository { org: String, name: String },
}

impl Scope {
    pub fn organization(name: impl Into<String>) -> Self {
        Scope::Organization { name: name.into() }
    }

    pub fn repository(org: impl Into<String>, name: impl Into<String>) -> Self {
        Scope::Repository {
            org: org.into(),
            name: name.into(),
        }
    }

    /// Name the sample-data seed derives from: the repository name when
    /// scoped to a repository, the organization name otherwise.
    pub fn seed_name(&self) -> &str {
        match self {
            Scope::Organization { name } => name,
            Scope::Repository { name, .. } => name,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Organization { name } => write!(f, "{}", name),
            Scope::Repository { org, name } => write!(f, "{}/{}", org, name),
        }
    }
}
