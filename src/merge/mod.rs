pub mod collate;
pub mod normalize;
pub mod pipeline;

pub use collate::TitleCollator;
pub use normalize::normalize_title;
pub use pipeline::{
    inspect_inputs, load_inputs, merge_entries, render_json, run_merge, write_output,
    MergeReport, MergedEntry, DIRECTOR_NOT_SPECIFIED,
};
