//! Runtime debugger inspection tools.
//!
//! Only meaningful while a JADX debugging session has the target process
//! suspended; the plugin reports an application-level error otherwise.

use super::ToolSpec;

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::plain(
        "debug_get_stack_frames",
        "debug/stack-frames",
        "Get the current call stack of the debugged process.",
        &[],
    ),
    ToolSpec::plain(
        "debug_get_threads",
        "debug/threads",
        "List all threads in the debugged process.",
        &[],
    ),
    ToolSpec::plain(
        "debug_get_variables",
        "debug/variables",
        "Get local and instance variables at the current breakpoint.",
        &[],
    ),
];
