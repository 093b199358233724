pub mod generate;
pub mod list;
pub mod payload;
pub mod run;

pub use generate::{GenerateCommandArgs, GeneratedFiles, execute_generate};
pub use list::execute_list;
pub use payload::execute_payload;
pub use run::{RunCommandArgs, execute_run};
