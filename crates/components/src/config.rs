use rio_scss::CompileOptions;
use std::path::{Path, PathBuf};

/// Where component assets live and how their styles are compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Theme directory; component asset paths are relative to it.
    pub theme_root: PathBuf,
    /// Directory, relative to `theme_root`, holding precompiled CSS.
    pub dist_dir: PathBuf,
    pub compile: CompileOptions,
}

impl LoaderConfig {
    pub fn new(theme_root: impl Into<PathBuf>) -> Self {
        Self {
            theme_root: theme_root.into(),
            dist_dir: PathBuf::from("dist/css"),
            compile: CompileOptions::default(),
        }
    }

    pub fn with_dist_dir(mut self, dist_dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dist_dir.into();
        self
    }

    pub fn with_compile_options(mut self, compile: CompileOptions) -> Self {
        self.compile = compile;
        self
    }

    /// Absolute path of a theme-relative asset.
    pub fn asset_path(&self, relative: &Path) -> PathBuf {
        self.theme_root.join(relative)
    }

    /// Where a build step would have written the CSS for `style_path`.
    pub fn precompiled_path(&self, style_path: &Path) -> PathBuf {
        self.theme_root
            .join(&self.dist_dir)
            .join(style_path.with_extension("css"))
    }
}
