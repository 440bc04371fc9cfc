//! Page template store.
//!
//! Templates are read from a single directory and compiled once, before the
//! server accepts connections. The resulting [`TemplateStore`] is immutable and
//! shared by reference across handlers.
//!
//! Template names are file names (`login.html`). Only files ending in `.html`
//! directly inside the directory are loaded; subdirectories are ignored.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Errors raised while loading or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to read template directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read template file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No *.html templates found in {0}")]
    NoTemplates(PathBuf),

    #[error("Failed to compile template '{name}': {source}")]
    Compile {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Immutable set of compiled templates, addressable by name.
pub struct TemplateStore {
    env: Environment<'static>,
    names: Vec<String>,
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl TemplateStore {
    /// Compiles every `*.html` file in `dir`.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::ReadDir`] / [`TemplateError::ReadFile`] on I/O failure
    /// - [`TemplateError::NoTemplates`] if the directory holds no `*.html` file
    /// - [`TemplateError::Compile`] if any template has a syntax error
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();

        let entries = std::fs::read_dir(dir).map_err(|source| TemplateError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| TemplateError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if !path.is_file() || path.extension().is_none_or(|ext| ext != "html") {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let name = name.to_string();

            let source = std::fs::read_to_string(&path)
                .map_err(|source| TemplateError::ReadFile { path, source })?;

            files.push((name, source));
        }

        if files.is_empty() {
            return Err(TemplateError::NoTemplates(dir.to_path_buf()));
        }

        Self::from_sources(files)
    }

    /// Compiles templates from in-memory `(name, source)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Compile`] for the first template that fails to
    /// compile.
    pub fn from_sources<I, N, S>(sources: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let mut names = Vec::new();
        for (name, source) in sources {
            let name: String = name.into();
            let source: String = source.into();
            env.add_template_owned(name.clone(), source)
                .map_err(|source| TemplateError::Compile {
                    name: name.clone(),
                    source,
                })?;
            names.push(name);
        }
        names.sort();

        Ok(Self { env, names })
    }

    /// Renders the named template with `ctx` as its data.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] if the name is unknown or template
    /// evaluation fails (e.g. an undefined variable is referenced).
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, TemplateError> {
        let render_error = |source| TemplateError::Render {
            name: name.to_string(),
            source,
        };

        self.env
            .get_template(name)
            .map_err(render_error)?
            .render(ctx)
            .map_err(render_error)
    }

    /// Names of all loaded templates, sorted.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;
    use std::fs;

    #[test]
    fn test_load_compiles_html_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("login.html"), "<h1>Login</h1>").unwrap();
        fs::write(dir.path().join("base.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("notes.txt"), "{% broken").unwrap();
        fs::create_dir(dir.path().join("partials.html")).unwrap();

        let store = TemplateStore::load(dir.path()).unwrap();

        assert_eq!(store.names(), ["base.html", "login.html"]);
        assert!(store.contains("login.html"));
        assert!(!store.contains("notes.txt"));
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = TemplateStore::load(&missing).unwrap_err();

        assert!(matches!(err, TemplateError::ReadDir { .. }));
    }

    #[test]
    fn test_load_empty_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = TemplateStore::load(dir.path()).unwrap_err();

        assert!(matches!(err, TemplateError::NoTemplates(_)));
    }

    #[test]
    fn test_load_syntax_error_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("login.html"), "<h1>{% if %}</h1>").unwrap();

        let err = TemplateStore::load(dir.path()).unwrap_err();

        match err {
            TemplateError::Compile { name, .. } => assert_eq!(name, "login.html"),
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    #[test]
    fn test_render_with_data() {
        let store =
            TemplateStore::from_sources([("greet.html", "Hello {{ name }}!")]).unwrap();

        let html = store.render("greet.html", context! { name => "world" }).unwrap();

        assert_eq!(html, "Hello world!");
    }

    #[test]
    fn test_render_escapes_html() {
        let store = TemplateStore::from_sources([("greet.html", "{{ name }}")]).unwrap();

        let html = store
            .render("greet.html", context! { name => "<script>" })
            .unwrap();

        assert_eq!(html, "&lt;script&gt;");
    }

    #[test]
    fn test_render_without_data() {
        let store = TemplateStore::from_sources([("login.html", "<form></form>")]).unwrap();

        let html = store.render("login.html", context! {}).unwrap();

        assert_eq!(html, "<form></form>");
    }

    #[test]
    fn test_render_unknown_template() {
        let store = TemplateStore::from_sources([("login.html", "ok")]).unwrap();

        let err = store.render("missing.html", context! {}).unwrap_err();

        assert!(matches!(err, TemplateError::Render { ref name, .. } if name == "missing.html"));
    }

    #[test]
    fn test_render_undefined_variable_fails() {
        let store = TemplateStore::from_sources([("login.html", "{{ user.email }}")]).unwrap();

        let result = store.render("login.html", context! {});

        assert!(matches!(result, Err(TemplateError::Render { .. })));
    }
}
