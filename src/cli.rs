//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; a single route table dispatches to the porter.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_apply_result_json, format_apply_result_text, format_inspect_json, format_inspect_text,
};
pub use route::RunContext;
