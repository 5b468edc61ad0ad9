//! Component definitions.
//!
//! A [`ComponentRegistry`] is built once when the theme starts: components
//! are registered by hand or found with [`ComponentRegistry::discover`].
//! Each request then borrows it through [`ComponentRegistry::begin_request`].

use crate::config::LoaderConfig;
use crate::error::{ComponentError, Result};
use crate::usage::ComponentUsage;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directories under `src/components` that hold one directory per component.
const COMPONENT_KINDS: [&str; 2] = ["atoms", "molecules"];

const STYLE_EXTENSIONS: [&str; 2] = ["scss", "css"];

/// The assets belonging to one component. Paths are theme-relative.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentAssets {
    pub style_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
    /// Script handles the component's script depends on.
    pub dependencies: Vec<String>,
}

impl ComponentAssets {
    pub fn style(path: impl Into<PathBuf>) -> Self {
        Self {
            style_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn script(path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = Some(path.into());
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    fn is_empty(&self) -> bool {
        self.style_path.is_none() && self.script_path.is_none()
    }
}

/// Every component the theme knows about.
#[derive(Debug)]
pub struct ComponentRegistry {
    config: LoaderConfig,
    components: BTreeMap<String, ComponentAssets>,
}

impl ComponentRegistry {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            components: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Registers `name`, replacing any earlier registration.
    ///
    /// Components with neither a style nor a script are ignored.
    pub fn register(&mut self, name: impl Into<String>, assets: ComponentAssets) {
        let name = name.into();
        if assets.is_empty() {
            log::debug!("component '{}' has no assets, not registering", name);
            return;
        }
        log::debug!("registered component '{}'", name);
        self.components.insert(name, assets);
    }

    pub fn get(&self, name: &str) -> Option<&ComponentAssets> {
        self.components.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Registers every component found under `src/components/{atoms,molecules}`.
    ///
    /// A component is a directory `<name>` holding `<name>.scss` or
    /// `<name>.css` and optionally `<name>.js`. A `rio-` prefix may be
    /// dropped from the file stem, so `rio-button/button.scss` also counts.
    /// Returns how many components were registered.
    pub fn discover(&mut self) -> Result<usize> {
        let base = Path::new("src").join("components");
        let mut found = 0;

        for kind in COMPONENT_KINDS {
            let relative_kind = base.join(kind);
            let kind_dir = self.config.asset_path(&relative_kind);
            if !kind_dir.is_dir() {
                continue;
            }

            for name in component_dirs(&kind_dir)? {
                let relative_dir = relative_kind.join(&name);
                let dir = self.config.asset_path(&relative_dir);
                let assets = find_assets(&dir, &name);
                if assets.is_empty() {
                    continue;
                }
                self.register(
                    name,
                    ComponentAssets {
                        style_path: assets.style_path.map(|file| relative_dir.join(file)),
                        script_path: assets.script_path.map(|file| relative_dir.join(file)),
                        dependencies: Vec::new(),
                    },
                );
                found += 1;
            }
        }

        log::debug!("discovered {} components", found);
        Ok(found)
    }

    /// Starts tracking component usage for a single request.
    pub fn begin_request(&self) -> ComponentUsage<'_> {
        ComponentUsage::new(self)
    }
}

/// Sorted names of the directories directly inside `dir`.
fn component_dirs(dir: &Path) -> Result<Vec<String>> {
    let io_err = |source| ComponentError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Finds a component's asset files, returned as bare file names.
fn find_assets(dir: &Path, name: &str) -> ComponentAssets {
    let mut stems = vec![name];
    if let Some(short) = name.strip_prefix("rio-") {
        stems.push(short);
    }

    let style_path = stems
        .iter()
        .flat_map(|stem| STYLE_EXTENSIONS.iter().map(move |ext| format!("{}.{}", stem, ext)))
        .find(|file| dir.join(file).is_file())
        .map(PathBuf::from);

    let script_path = stems
        .iter()
        .map(|stem| format!("{}.js", stem))
        .find(|file| dir.join(file).is_file())
        .map(PathBuf::from);

    ComponentAssets {
        style_path,
        script_path,
        dependencies: Vec::new(),
    }
}
