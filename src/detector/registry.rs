//! Technology Registry
//!
//! Static rule tables mapping canonical technology names to keyword/weight
//! rules and dependency-manifest filenames to implied technologies. The
//! tables are configuration data: the detector accepts any registry, so
//! tests can substitute a reduced one.

/// Keyword rule for one canonical technology
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub tech: String,
    /// Matched as substrings of normalized (de-punctuated, lowercase) text.
    /// Multi-word keywords keep their single space.
    pub keywords: Vec<String>,
    pub weight: f64,
}

/// Filename-substring signal implying one or more technologies
#[derive(Debug, Clone)]
pub struct FileIndicator {
    /// Matched case-insensitively as a substring of the filename
    pub pattern: String,
    pub techs: Vec<String>,
}

/// Built-in keyword table: (technology, keywords, weight)
const KEYWORD_TABLE: &[(&str, &[&str], f64)] = &[
    // Frontend
    ("React", &["react", "reactjs", "react.js"], 2.0),
    ("Vue.js", &["vue", "vuejs", "vue.js"], 2.0),
    ("Angular", &["angular"], 2.0),
    ("TypeScript", &["typescript", "ts"], 1.5),
    ("JavaScript", &["javascript", "js", "ecmascript"], 1.0),
    ("HTML/CSS", &["html", "css", "sass", "scss", "less"], 1.0),
    ("Tailwind CSS", &["tailwind", "tailwindcss"], 1.5),
    // Backend
    ("Node.js", &["node", "nodejs", "node.js"], 2.0),
    ("Python", &["python", "py"], 2.0),
    ("Django", &["django"], 2.0),
    ("Flask", &["flask"], 2.0),
    ("FastAPI", &["fastapi"], 2.0),
    ("Express.js", &["express", "expressjs"], 1.5),
    ("Java", &["java"], 2.0),
    ("Spring Boot", &["springboot", "spring boot"], 2.0),
    // Mobile
    ("React Native", &["react native"], 2.0),
    ("Flutter", &["flutter"], 2.0),
    // Databases
    ("MySQL", &["mysql"], 1.5),
    ("PostgreSQL", &["postgresql", "postgres"], 1.5),
    ("MongoDB", &["mongodb"], 1.5),
    ("Redis", &["redis"], 1.5),
    // DevOps & Cloud
    ("Docker", &["docker"], 2.0),
    ("Kubernetes", &["kubernetes", "k8s"], 2.0),
    ("AWS", &["aws", "amazon web services"], 2.0),
    ("Azure", &["azure"], 1.5),
    ("GitHub Actions", &["github actions"], 1.5),
    // AI/ML
    ("TensorFlow", &["tensorflow"], 2.0),
    ("PyTorch", &["pytorch"], 2.0),
    ("Scikit-learn", &["scikit-learn", "sklearn"], 1.5),
    // Tools
    ("Git", &["git"], 1.0),
    ("REST API", &["rest", "rest api", "restful"], 1.0),
    ("GraphQL", &["graphql"], 1.5),
];

/// Built-in filename-indicator table: (filename substring, implied technologies)
const FILE_INDICATOR_TABLE: &[(&str, &[&str])] = &[
    ("package.json", &["Node.js", "JavaScript", "TypeScript"]),
    ("requirements.txt", &["Python"]),
    ("pipfile", &["Python"]),
    ("dockerfile", &["Docker"]),
    ("docker-compose.yml", &["Docker"]),
    ("composer.json", &["PHP"]),
    ("gemfile", &["Ruby"]),
    ("cargo.toml", &["Rust"]),
    ("go.mod", &["Go"]),
];

/// Rule tables consumed by the detector
#[derive(Debug, Clone)]
pub struct TechRegistry {
    keyword_rules: Vec<KeywordRule>,
    file_indicators: Vec<FileIndicator>,
}

impl TechRegistry {
    /// Registry with custom rule tables. Rule order is significant: it fixes
    /// the base insertion order and therefore the tie ordering of results.
    pub fn new(keyword_rules: Vec<KeywordRule>, file_indicators: Vec<FileIndicator>) -> Self {
        Self {
            keyword_rules,
            file_indicators,
        }
    }

    /// Registry built from the compiled-in tables.
    pub fn builtin() -> Self {
        let keyword_rules = KEYWORD_TABLE
            .iter()
            .map(|(tech, keywords, weight)| KeywordRule {
                tech: tech.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                weight: *weight,
            })
            .collect();

        let file_indicators = FILE_INDICATOR_TABLE
            .iter()
            .map(|(pattern, techs)| FileIndicator {
                pattern: pattern.to_string(),
                techs: techs.iter().map(|t| t.to_string()).collect(),
            })
            .collect();

        Self::new(keyword_rules, file_indicators)
    }

    pub fn keyword_rules(&self) -> &[KeywordRule] {
        &self.keyword_rules
    }

    pub fn file_indicators(&self) -> &[FileIndicator] {
        &self.file_indicators
    }
}

impl Default for TechRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_well_formed() {
        let registry = TechRegistry::builtin();

        assert!(!registry.keyword_rules().is_empty());
        for rule in registry.keyword_rules() {
            assert!(!rule.keywords.is_empty(), "{} has no keywords", rule.tech);
            assert!(rule.weight > 0.0, "{} has non-positive weight", rule.tech);
            for keyword in &rule.keywords {
                assert_eq!(
                    keyword,
                    &keyword.to_lowercase(),
                    "keywords must be pre-lowercased"
                );
            }
        }

        for indicator in registry.file_indicators() {
            assert!(!indicator.techs.is_empty());
            assert_eq!(indicator.pattern, indicator.pattern.to_lowercase());
        }
    }

    #[test]
    fn test_builtin_tech_names_are_unique() {
        let registry = TechRegistry::builtin();
        let mut seen = std::collections::HashSet::new();
        for rule in registry.keyword_rules() {
            assert!(seen.insert(rule.tech.clone()), "duplicate: {}", rule.tech);
        }
    }
}
