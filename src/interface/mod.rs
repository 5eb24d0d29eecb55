pub mod export;
pub mod prompts;
pub mod render;

pub use export::{evaluation_json, report_csv_string, write_report_csv};
pub use prompts::{
    collect_diet_inputs, collect_feed_entries, prompt_amount, prompt_feed_identifier,
    prompt_weight, prompt_yes_no,
};
pub use render::{display_evaluation, display_feed_list, format_evaluation, format_percent};
