//! Presentation layer: turns snapshots, history, and static info into
//! terminal text. No I/O and no side effects on the data model — every
//! function here is a pure `data -> String` mapping.

pub mod bar;
pub mod view;

pub use bar::{usage_bar, UsageLevel, BAR_WIDTH, MINI_BAR_WIDTH};
pub use view::{
    render_frame, render_history, render_static_info, render_usage, FRAME_BAR_WIDTH,
    HISTORY_BAR_WIDTH, HISTORY_DISPLAY_LIMIT,
};
