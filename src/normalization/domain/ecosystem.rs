use serde::{Deserialize, Serialize};

/// Package ecosystems understood by the normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Maven,
    Npm,
    Pypi,
    /// Go modules: identifiers are reported as `name@module`
    #[serde(alias = "go")]
    Golang,
}

impl Ecosystem {
    /// Whether identifiers in this ecosystem carry a module component
    /// and versions may be pseudo versions.
    pub fn is_module_based(self) -> bool {
        matches!(self, Ecosystem::Golang)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ecosystem::Maven => "maven",
            Ecosystem::Npm => "npm",
            Ecosystem::Pypi => "pypi",
            Ecosystem::Golang => "golang",
        }
    }
}

impl std::str::FromStr for Ecosystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maven" => Ok(Ecosystem::Maven),
            "npm" => Ok(Ecosystem::Npm),
            "pypi" => Ok(Ecosystem::Pypi),
            "golang" | "go" => Ok(Ecosystem::Golang),
            _ => Err(format!(
                "Invalid ecosystem: {}. Please specify 'maven', 'npm', 'pypi' or 'golang'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
