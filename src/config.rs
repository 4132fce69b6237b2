use crate::error::{QuickfindError, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

lazy_static! {
    /// Directory names whose entire subtree is pruned during traversal.
    static ref DEFAULT_IGNORE_DIRS: Vec<&'static str> = vec![
        ".git",
        ".hg",
        ".svn",
        "node_modules",
        "bower_components",
        "dist",
        "build",
        "out",
        "target",
        ".venv",
        "venv",
        "__pycache__",
        ".tox",
        "vendor",
        "Pods",
        "DerivedData",
        ".gradle",
        ".idea",
        ".cache",
    ];

    /// Extensions that mark a candidate as a code/text file for ranking.
    static ref DEFAULT_CODE_EXTENSIONS: Vec<&'static str> = vec![
        "rs", "py", "js", "ts", "jsx", "tsx", "go", "c", "h", "cpp", "hpp",
        "java", "kt", "swift", "rb", "php", "cs", "sh", "zsh", "fish",
        "html", "css", "scss", "json", "yaml", "yml", "toml", "xml", "sql",
        "md", "txt",
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickfindConfig {
    /// Roots for file searches, highest priority first. Empty means "use the
    /// standard launcher list": cwd, documents, downloads, desktop,
    /// ~/Developer, then home.
    pub roots: Vec<PathBuf>,

    /// Directories scanned for application bundles.
    pub application_dirs: Vec<PathBuf>,

    pub ignore_dirs: Vec<String>,
    pub code_extensions: Vec<String>,

    pub max_file_results: usize,
    pub max_app_results: usize,

    /// The walker may examine up to `max_results * overscan_factor` entries
    /// before stopping.
    pub overscan_factor: usize,

    /// Extra path segments allowed below each root before descent is pruned.
    pub depth_budget: usize,

    #[serde(default)]
    pub matching: MatchTuning,

    #[serde(default)]
    pub ranking: RankTuning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTuning {
    /// Points per consumed query character in a subsequence match.
    pub char_base: i64,
    /// Step size of the growing bonus for consecutive-run extensions; the
    /// n-th extension of a streak earns `run_bonus * (n - 1)` extra points.
    pub run_bonus: i64,
    /// Bonus when the query equals a delimited token of the text.
    pub token_equal_bonus: i64,
    /// Bonus when the query is a prefix of a delimited token.
    pub token_prefix_bonus: i64,
    /// Minimum fraction of the query that must be consumed against a bare name.
    pub name_accept_ratio: f64,
    /// Minimum fraction of the query that must be consumed against a relative path.
    pub path_accept_ratio: f64,
}

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            char_base: default_char_base(),
            run_bonus: default_run_bonus(),
            token_equal_bonus: default_token_equal_bonus(),
            token_prefix_bonus: default_token_prefix_bonus(),
            name_accept_ratio: default_name_accept_ratio(),
            path_accept_ratio: default_path_accept_ratio(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankTuning {
    /// Points added per recorded usage of a candidate.
    pub usage_weight: i64,
    /// Bonus for candidates under the first (current working directory) root.
    pub cwd_bonus: i64,
    /// Bonus for candidates under any other configured root.
    pub preferred_root_bonus: i64,
    /// Bonus for recognized code/text extensions.
    pub extension_bonus: i64,
    /// Penalty per path segment; shallower candidates win ties.
    pub depth_penalty: i64,
}

impl Default for RankTuning {
    fn default() -> Self {
        Self {
            usage_weight: default_usage_weight(),
            cwd_bonus: default_cwd_bonus(),
            preferred_root_bonus: default_preferred_root_bonus(),
            extension_bonus: default_extension_bonus(),
            depth_penalty: default_depth_penalty(),
        }
    }
}

fn default_char_base() -> i64 {
    10
}
fn default_run_bonus() -> i64 {
    15
}
fn default_token_equal_bonus() -> i64 {
    2500
}
fn default_token_prefix_bonus() -> i64 {
    1000
}
fn default_name_accept_ratio() -> f64 {
    0.9
}
fn default_path_accept_ratio() -> f64 {
    0.6
}
fn default_usage_weight() -> i64 {
    250
}
fn default_cwd_bonus() -> i64 {
    4000
}
fn default_preferred_root_bonus() -> i64 {
    2000
}
fn default_extension_bonus() -> i64 {
    1500
}
fn default_depth_penalty() -> i64 {
    50
}

impl Default for QuickfindConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            application_dirs: default_application_dirs(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            code_extensions: DEFAULT_CODE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_results: 40,
            max_app_results: 8,
            overscan_factor: 50,
            depth_budget: 6,
            matching: MatchTuning::default(),
            ranking: RankTuning::default(),
        }
    }
}

impl QuickfindConfig {
    pub fn load() -> Result<Self> {
        match Self::find_config_path()? {
            Some(path) => {
                let content = fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|e| {
                    QuickfindError::Config(format!("Failed to parse {}: {e}", path.display()))
                })
            }
            None => Ok(Self::default()),
        }
    }

    fn find_config_path() -> Result<Option<PathBuf>> {
        if let Some(xdg_config) = dirs::config_dir() {
            let xdg_path = xdg_config.join("quickfind/config.toml");
            if xdg_path.exists() {
                return Ok(Some(xdg_path));
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_path = home.join(".quickfind.toml");
            if home_path.exists() {
                return Ok(Some(home_path));
            }
        }

        let current_path = Path::new("quickfind.toml");
        if current_path.exists() {
            return Ok(Some(current_path.to_path_buf()));
        }

        Ok(None)
    }

    /// Effective root list, highest priority first. An explicit `roots` entry
    /// wins; otherwise build the standard launcher list from the environment.
    pub fn effective_roots(&self) -> Vec<PathBuf> {
        if !self.roots.is_empty() {
            return self.roots.clone();
        }

        let mut roots = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            roots.push(cwd);
        }
        for dir in [
            dirs::document_dir(),
            dirs::download_dir(),
            dirs::desktop_dir(),
            dirs::home_dir().map(|h| h.join("Developer")),
            dirs::home_dir(),
        ]
        .into_iter()
        .flatten()
        {
            if dir.is_dir() && !roots.contains(&dir) {
                roots.push(dir);
            }
        }
        roots
    }

    pub fn ignore_set(&self) -> HashSet<String> {
        self.ignore_dirs.iter().cloned().collect()
    }

    pub fn code_extension_set(&self) -> HashSet<String> {
        self.code_extensions
            .iter()
            .map(|e| e.to_lowercase())
            .collect()
    }
}

fn default_application_dirs() -> Vec<PathBuf> {
    let mut dirs_list = Vec::new();
    #[cfg(target_os = "macos")]
    {
        dirs_list.push(PathBuf::from("/Applications"));
        dirs_list.push(PathBuf::from("/System/Applications"));
        if let Some(home) = dirs::home_dir() {
            dirs_list.push(home.join("Applications"));
        }
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs_list.push(PathBuf::from("/usr/share/applications"));
        if let Some(data) = dirs::data_dir() {
            dirs_list.push(data.join("applications"));
        }
    }
    dirs_list
}
