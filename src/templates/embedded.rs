//! Embedded template resources
//!
//! Templates live under the repository's `templates/` directory and are
//! compiled into the binary, so a single executable carries everything it
//! scaffolds.

use std::fs;
use std::path::{Path, PathBuf};

use super::{TemplateError, TemplateStore};

const DEVCONTAINER_JSON: &str = include_str!("../../templates/devcontainer/devcontainer.json");
const DEVCONTAINER_README: &str = include_str!("../../templates/devcontainer/README.md");
const EDITORCONFIG: &str = include_str!("../../templates/editorconfig/editorconfig");
const GITIGNORE: &str = include_str!("../../templates/gitignore/gitignore");
const GITHUB_WORKFLOW_MAVEN: &str = include_str!("../../templates/github/workflows/maven.yml");
const GITHUB_CODEOWNERS: &str = include_str!("../../templates/github/CODEOWNERS");
const GITHUB_DEPENDABOT: &str = include_str!("../../templates/github/dependabot.yml");
const CURSOR_JAVA_GENERAL: &str = include_str!("../../templates/cursor/java/100-java-general.mdc");
const CURSOR_JAVA_TESTING: &str = include_str!("../../templates/cursor/java/110-java-testing.mdc");
const CURSOR_SPRING_BOOT: &str =
    include_str!("../../templates/cursor/spring-boot/200-spring-boot.mdc");
const CURSOR_QUARKUS: &str = include_str!("../../templates/cursor/quarkus/210-quarkus.mdc");
const CURSOR_TASKS: &str = include_str!("../../templates/cursor/tasks/300-task-workflow.mdc");
const CURSOR_AGILE: &str = include_str!("../../templates/cursor/agile/310-agile-practices.mdc");
const FRAGMENT_ENFORCER_PLUGIN: &str =
    include_str!("../../templates/fragments/maven-enforcer-plugin.xml");
const FRAGMENT_ENFORCER_VERSION: &str =
    include_str!("../../templates/fragments/maven-enforcer-plugin-version.xml");

/// Resource name -> content, one entry per bundled file
const TEMPLATES: &[(&str, &str)] = &[
    ("devcontainer/devcontainer.json", DEVCONTAINER_JSON),
    ("devcontainer/README.md", DEVCONTAINER_README),
    ("editorconfig/editorconfig", EDITORCONFIG),
    ("gitignore/gitignore", GITIGNORE),
    ("github/workflows/maven.yml", GITHUB_WORKFLOW_MAVEN),
    ("github/CODEOWNERS", GITHUB_CODEOWNERS),
    ("github/dependabot.yml", GITHUB_DEPENDABOT),
    ("cursor/java/100-java-general.mdc", CURSOR_JAVA_GENERAL),
    ("cursor/java/110-java-testing.mdc", CURSOR_JAVA_TESTING),
    ("cursor/spring-boot/200-spring-boot.mdc", CURSOR_SPRING_BOOT),
    ("cursor/quarkus/210-quarkus.mdc", CURSOR_QUARKUS),
    ("cursor/tasks/300-task-workflow.mdc", CURSOR_TASKS),
    ("cursor/agile/310-agile-practices.mdc", CURSOR_AGILE),
    (
        "fragments/maven-enforcer-plugin.xml",
        FRAGMENT_ENFORCER_PLUGIN,
    ),
    (
        "fragments/maven-enforcer-plugin-version.xml",
        FRAGMENT_ENFORCER_VERSION,
    ),
];

/// Template store backed by the compiled-in resource table
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn read(&self, name: &str) -> Result<String, TemplateError> {
        TEMPLATES
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, content)| (*content).to_string())
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }

    fn copy_file(&self, name: &str, dest: &Path) -> Result<(), TemplateError> {
        let content = self.read(name)?;
        write_file(dest, &content)
    }

    fn copy_content(&self, content: &str, dest: &Path) -> Result<(), TemplateError> {
        write_file(dest, content)
    }

    fn copy_folder_excluding(
        &self,
        name: &str,
        dest: &Path,
        exclude: &[&str],
    ) -> Result<Vec<PathBuf>, TemplateError> {
        let prefix = format!("{name}/");
        let mut written = Vec::new();

        for (entry, content) in TEMPLATES {
            let Some(relative) = entry.strip_prefix(&prefix) else {
                continue;
            };
            if is_excluded(relative, exclude) {
                continue;
            }

            let target = dest.join(relative);
            write_file(&target, content)?;
            written.push(target);
        }

        if written.is_empty() {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        Ok(written)
    }
}

/// The exclude list matches either the full relative path or the bare
/// file name.
fn is_excluded(relative: &str, exclude: &[&str]) -> bool {
    let file_name = relative.rsplit('/').next().unwrap_or(relative);
    exclude
        .iter()
        .any(|entry| *entry == relative || *entry == file_name)
}

fn write_file(dest: &Path, content: &str) -> Result<(), TemplateError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| TemplateError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(dest, content).map_err(|source| TemplateError::Io {
        path: dest.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_bundled_content() {
        let store = EmbeddedTemplates::new();
        let content = store.read("gitignore/gitignore").unwrap();
        assert!(content.contains("target/"));
    }

    #[test]
    fn read_unknown_resource_fails() {
        let store = EmbeddedTemplates::new();
        let err = store.read("no/such/resource").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[test]
    fn copy_file_creates_parent_directories() {
        let store = EmbeddedTemplates::new();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested/deeply/.editorconfig");

        store.copy_file("editorconfig/editorconfig", &dest).unwrap();

        assert!(dest.is_file());
    }

    #[test]
    fn copy_folder_writes_nested_entries() {
        let store = EmbeddedTemplates::new();
        let dir = tempfile::tempdir().unwrap();

        let written = store.copy_folder("github", dir.path()).unwrap();

        assert_eq!(written.len(), 3);
        assert!(dir.path().join("workflows/maven.yml").is_file());
        assert!(dir.path().join("CODEOWNERS").is_file());
        assert!(dir.path().join("dependabot.yml").is_file());
    }

    #[test]
    fn copy_folder_excluding_skips_by_file_name() {
        let store = EmbeddedTemplates::new();
        let dir = tempfile::tempdir().unwrap();

        let written = store
            .copy_folder_excluding("devcontainer", dir.path(), &["README.md"])
            .unwrap();

        assert_eq!(written.len(), 1);
        assert!(dir.path().join("devcontainer.json").is_file());
        assert!(!dir.path().join("README.md").exists());
    }

    #[test]
    fn copy_folder_unknown_folder_fails() {
        let store = EmbeddedTemplates::new();
        let dir = tempfile::tempdir().unwrap();
        let err = store.copy_folder("no-such-folder", dir.path()).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[test]
    fn copy_content_overwrites_existing_files() {
        let store = EmbeddedTemplates::new();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join(".sdkmanrc");

        store.copy_content("java=17\n", &dest).unwrap();
        store.copy_content("java=21\n", &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "java=21\n");
    }
}
