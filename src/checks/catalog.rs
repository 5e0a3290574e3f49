//! Check definitions: banners and commands.
//!
//! Each check has a fixed start banner, an optional success banner and a
//! shell command. Commands may reference `${package}`, which is replaced
//! with the project's source package when the catalog is built.

use std::collections::BTreeMap;

use crate::config::schema::CheckOverride;

use super::CheckName;

/// Placeholder substituted with the project's source package.
pub const PACKAGE_PLACEHOLDER: &str = "${package}";

/// A fully resolved check, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDefinition {
    /// Which check this is.
    pub name: CheckName,
    /// Printed before the command starts.
    pub banner: &'static str,
    /// Shell command line to run.
    pub command: String,
    /// Printed after the command succeeds, if the check has one.
    pub success_banner: Option<&'static str>,
}

/// The command a check runs when no override is configured.
pub fn default_command(name: CheckName) -> &'static str {
    match name {
        CheckName::Pytest => "pytest -v --color=yes",
        CheckName::Pylint => "pylint -d locally-disabled,locally-enabled -f colorized ${package}",
        CheckName::Mypy => "mypy ${package} --ignore-missing-imports",
        CheckName::BuildDocs => "cd doc; make html-strict",
        CheckName::CheckDocs => "./scripts/check_docs.py",
        CheckName::CheckLinks => "./scripts/check_links.py",
        CheckName::CheckRequirements => "./scripts/check_requirements_and_setup.py",
    }
}

fn banner(name: CheckName) -> &'static str {
    match name {
        CheckName::Pytest => "Tests (pytest):",
        CheckName::Pylint => "Linter (pylint):",
        CheckName::Mypy => "Typechecker (mypy):",
        CheckName::BuildDocs => "Documentation (build):",
        CheckName::CheckDocs => "Documentation (check):",
        CheckName::CheckLinks => "Checking links in Markdown files:",
        CheckName::CheckRequirements => "Checking requirements.txt against setup.py",
    }
}

fn success_banner(name: CheckName) -> Option<&'static str> {
    match name {
        CheckName::Pytest | CheckName::BuildDocs => None,
        CheckName::Pylint => Some("pylint checks passed"),
        CheckName::Mypy => Some("mypy checks passed"),
        CheckName::CheckDocs => Some("check docs passed"),
        CheckName::CheckLinks => Some("check links passed"),
        CheckName::CheckRequirements => Some("check requirements passed"),
    }
}

fn interpolate(template: &str, package: &str) -> String {
    template.replace(PACKAGE_PLACEHOLDER, package)
}

/// Resolved definitions for every check, in canonical order.
#[derive(Debug, Clone)]
pub struct CheckCatalog {
    package: String,
    definitions: Vec<CheckDefinition>,
}

impl CheckCatalog {
    /// Build the catalog with default commands only.
    pub fn new(package: &str) -> Self {
        Self::with_overrides(package, &BTreeMap::new())
    }

    /// Build the catalog, replacing commands for checks that have an override.
    pub fn with_overrides(package: &str, overrides: &BTreeMap<CheckName, CheckOverride>) -> Self {
        let definitions = CheckName::ALL
            .iter()
            .map(|&name| {
                let template = overrides
                    .get(&name)
                    .and_then(|o| o.command.as_deref())
                    .unwrap_or_else(|| default_command(name));
                CheckDefinition {
                    name,
                    banner: banner(name),
                    command: interpolate(template, package),
                    success_banner: success_banner(name),
                }
            })
            .collect();

        Self {
            package: package.to_string(),
            definitions,
        }
    }

    /// The package substituted into commands.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Look up the definition for a check.
    pub fn get(&self, name: CheckName) -> &CheckDefinition {
        &self.definitions[name as usize]
    }

    /// Iterate over every definition in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &CheckDefinition> {
        self.definitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_substitute_package() {
        let catalog = CheckCatalog::new("allennlp");
        assert_eq!(
            catalog.get(CheckName::Mypy).command,
            "mypy allennlp --ignore-missing-imports"
        );
        assert_eq!(
            catalog.get(CheckName::Pylint).command,
            "pylint -d locally-disabled,locally-enabled -f colorized allennlp"
        );
        assert_eq!(catalog.get(CheckName::Pytest).command, "pytest -v --color=yes");
    }

    #[test]
    fn get_returns_matching_definition_for_every_check() {
        let catalog = CheckCatalog::new("pkg");
        for check in CheckName::ALL {
            assert_eq!(catalog.get(check).name, check);
        }
    }

    #[test]
    fn iter_follows_canonical_order() {
        let catalog = CheckCatalog::new("pkg");
        let names: Vec<CheckName> = catalog.iter().map(|d| d.name).collect();
        assert_eq!(names, CheckName::ALL.to_vec());
    }

    #[test]
    fn success_banners_only_where_defined() {
        let catalog = CheckCatalog::new("pkg");
        assert_eq!(catalog.get(CheckName::Pytest).success_banner, None);
        assert_eq!(catalog.get(CheckName::BuildDocs).success_banner, None);
        assert_eq!(
            catalog.get(CheckName::CheckLinks).success_banner,
            Some("check links passed")
        );
    }

    #[test]
    fn override_replaces_command_and_keeps_banner() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            CheckName::Pylint,
            CheckOverride {
                command: Some("ruff check ${package}".to_string()),
            },
        );
        let catalog = CheckCatalog::with_overrides("mylib", &overrides);

        let pylint = catalog.get(CheckName::Pylint);
        assert_eq!(pylint.command, "ruff check mylib");
        assert_eq!(pylint.banner, "Linter (pylint):");
        assert_eq!(
            catalog.get(CheckName::Mypy).command,
            "mypy mylib --ignore-missing-imports"
        );
    }

    #[test]
    fn override_without_command_falls_back_to_default() {
        let mut overrides = BTreeMap::new();
        overrides.insert(CheckName::Pytest, CheckOverride { command: None });
        let catalog = CheckCatalog::with_overrides("pkg", &overrides);
        assert_eq!(catalog.get(CheckName::Pytest).command, "pytest -v --color=yes");
    }
}
