use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::Path;

/// How a single ignore pattern is applied to a relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    /// Pattern ended with a separator: matched against directory name
    /// segments only, never against a file name.
    DirOnly,
    /// Pattern contains an internal separator: matched against the entire
    /// relative path as one string.
    FullPath,
    /// Matched against each path segment independently.
    Segment,
}

#[derive(Debug, Clone)]
struct IgnoreRule {
    matcher: GlobMatcher,
    kind: RuleKind,
}

impl IgnoreRule {
    fn parse(line: &str) -> Option<Self> {
        let (kind, pattern) = if let Some(stripped) = line.strip_suffix('/') {
            (RuleKind::DirOnly, stripped)
        } else if line.contains('/') {
            (RuleKind::FullPath, line)
        } else {
            (RuleKind::Segment, line)
        };

        let glob = Glob::new(pattern).ok()?;
        Some(Self {
            matcher: glob.compile_matcher(),
            kind,
        })
    }
}

/// An ordered set of glob-style exclusion rules, in the spirit of a
/// version-control ignore file. Order is irrelevant for the outcome: the
/// rules are plain ORs, matching just short-circuits on the first hit.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    /// Build a rule set from pattern lines. Blank lines, `#` comments and
    /// unparseable globs are skipped.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let rules = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(IgnoreRule::parse)
            .collect();
        Self { rules }
    }

    /// Load rules from a plain-text ignore file. A missing file yields an
    /// empty rule set rather than an error.
    pub fn load(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(Self::from_lines(content.lines()))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decide whether `path` should be excluded. `path` is relativized
    /// against `base` before matching; `is_dir` tells the matcher whether
    /// the final segment names a directory, which directory-only rules are
    /// allowed to match.
    pub fn matches(&self, path: &Path, base: &Path, is_dir: bool) -> bool {
        let relative = path.strip_prefix(base).unwrap_or(path);

        self.rules.iter().any(|rule| match rule.kind {
            RuleKind::FullPath => rule.matcher.is_match(relative),
            RuleKind::Segment => relative
                .components()
                .any(|segment| rule.matcher.is_match(Path::new(segment.as_os_str()))),
            RuleKind::DirOnly => {
                let segments = relative.components().count();
                let dir_segments = if is_dir {
                    segments
                } else {
                    segments.saturating_sub(1)
                };
                relative
                    .components()
                    .take(dir_segments)
                    .any(|segment| rule.matcher.is_match(Path::new(segment.as_os_str())))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(patterns: &[&str]) -> IgnoreRules {
        IgnoreRules::from_lines(patterns.iter().copied())
    }

    #[test]
    fn segment_rule_matches_any_segment() {
        let rules = rules(&["node_modules"]);
        let base = Path::new("/project");
        assert!(rules.matches(Path::new("/project/node_modules"), base, true));
        assert!(rules.matches(Path::new("/project/src/node_modules/lib.py"), base, false));
        assert!(!rules.matches(Path::new("/project/src/app.py"), base, false));
    }

    #[test]
    fn wildcard_segment_rule_matches_file_names() {
        let rules = rules(&["*.log"]);
        let base = Path::new("/project");
        assert!(rules.matches(Path::new("/project/build.log"), base, false));
        assert!(rules.matches(Path::new("/project/logs/debug.log"), base, false));
        assert!(!rules.matches(Path::new("/project/build.rs"), base, false));
    }

    #[test]
    fn dir_only_rule_never_matches_a_file_name() {
        let rules = rules(&["build/"]);
        let base = Path::new("/project");
        // Directory named "build" matches.
        assert!(rules.matches(Path::new("/project/build"), base, true));
        // A file beneath a "build" directory matches through its parent.
        assert!(rules.matches(Path::new("/project/build/out.js"), base, false));
        // A plain file named "build" does not.
        assert!(!rules.matches(Path::new("/project/build"), base, false));
    }

    #[test]
    fn full_path_rule_matches_whole_relative_path() {
        let rules = rules(&["src/*.py"]);
        let base = Path::new("/project");
        assert!(rules.matches(Path::new("/project/src/app.py"), base, false));
        assert!(!rules.matches(Path::new("/project/lib/app.py"), base, false));
        // The segment branch is never consulted for path-qualified rules.
        assert!(!rules.matches(Path::new("/project/app.py"), base, false));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let rules = IgnoreRules::from_lines(vec!["# a comment", "", "  ", "target"]);
        let base = Path::new("/p");
        assert!(rules.matches(Path::new("/p/target"), base, true));
        assert!(!rules.matches(Path::new("/p/# a comment"), base, true));
    }

    #[test]
    fn empty_rule_set_matches_nothing() {
        let rules = IgnoreRules::default();
        assert!(!rules.matches(Path::new("/p/anything"), Path::new("/p"), false));
    }

    #[test]
    fn missing_ignore_file_yields_empty_rules() {
        let loaded = IgnoreRules::load(Path::new("/definitely/not/here/.ignore_files")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn loads_rules_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let ignore_path = dir.path().join(".ignore_files");
        std::fs::write(&ignore_path, "# deps\nnode_modules/\n\n*.log\n").unwrap();

        let rules = IgnoreRules::load(&ignore_path).unwrap();
        let base = Path::new("/p");
        assert!(rules.matches(Path::new("/p/node_modules"), base, true));
        assert!(rules.matches(Path::new("/p/x.log"), base, false));
        assert!(!rules.matches(Path::new("/p/x.py"), base, false));
    }

    #[test]
    fn matching_is_deterministic() {
        let rules = rules(&["dist/", "*.min.js", "vendor/*.py"]);
        let base = Path::new("/p");
        let path = Path::new("/p/vendor/gen.py");
        let first = rules.matches(path, base, false);
        for _ in 0..10 {
            assert_eq!(rules.matches(path, base, false), first);
        }
    }
}
