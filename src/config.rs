use std::path::PathBuf;

pub const DEFAULT_PLANS_FILE: &str = "youtube_plans.json";
pub const DEFAULT_EXPORT_FILE: &str = "youtube_plans.xlsx";

/// Runtime settings. Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub plans_path: PathBuf,
    pub export_path: PathBuf,
    /// Clear the terminal before each menu render.
    pub clear_screen: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            plans_path: PathBuf::from(DEFAULT_PLANS_FILE),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            clear_screen: true,
        }
    }
}

impl PlannerConfig {
    pub fn with_plans_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plans_path = path.into();
        self
    }

    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}
