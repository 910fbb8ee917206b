pub mod config;
pub mod export;
pub mod operations;
pub mod persistence;
pub mod record;
pub mod shell;
pub mod store;

pub use config::{DEFAULT_EXPORT_FILE, DEFAULT_PLANS_FILE, PlannerConfig};
pub use export::{
    ExportError, ExportOutcome, ExportResult, export_plans, plans_to_dataframe,
    write_dataframe_to_xlsx,
};
pub use operations::{AddOutcome, add_entries, export_plans_to_file, list_plans, search_plans};
pub use persistence::{
    JsonFileStorage, PersistenceError, PersistenceResult, PlanStorage, load_plans_from_json,
    save_plans_to_json,
};
pub use record::{PlanEntry, PlanField};
pub use shell::input::{InputError, LineSource, ScriptedInput, TerminalInput};
pub use shell::{MenuChoice, Shell, ShellError, ShellExit};
pub use store::PlanStore;
