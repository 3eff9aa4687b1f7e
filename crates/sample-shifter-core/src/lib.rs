pub mod categories;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod organize;
pub mod preview;
pub mod progress;
pub mod scanner;
pub mod settings;
pub mod stats;

pub use categories::{load_category_config, CategoryConfig, CategoryDefinition, UNCATEGORIZED};
pub use classifier::{ClassifiedFile, Classifier};
pub use engine::{PlanResult, ShiftEngine};
pub use error::{ConfigError, Error, OrganizeError};
pub use organize::{apply_plan, ApplyOptions, ApplyReport, CopyOutcome};
pub use progress::{ProgressReporter, SilentReporter};
pub use scanner::DiscoveredFile;
pub use settings::AppConfig;
pub use stats::{summarize, StatsReport};
