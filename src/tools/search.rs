//! Code search tools.

use super::{ParamSpec, ToolSpec};

const METHOD_LOOKUP_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("class_name", "Fully qualified class name"),
    ParamSpec::required("method_name", "Method name, optionally with signature"),
];

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::plain(
        "get_method_by_name",
        "method-by-name",
        "Fetch the source code of a method from a specific class.",
        METHOD_LOOKUP_PARAMS,
    ),
    // Kept for callers of the historical tool name.
    ToolSpec::alias(
        "get_method_code",
        "get_method_by_name",
        "method-by-name",
        "Fetch the full method code (alias for get_method_by_name).",
        METHOD_LOOKUP_PARAMS,
    ),
    ToolSpec::plain(
        "search_method_by_name",
        "search-method",
        "Search for a method name across all classes.",
        &[ParamSpec::required(
            "method_name",
            "Method name to search for (partial matching supported)",
        )],
    ),
    ToolSpec::paged(
        "search_classes_by_keyword",
        "search-classes-by-keyword",
        "Search decompiled classes for a keyword, with package filtering and \
         scope targeting (class, method, field, code, comment).",
        &[
            ParamSpec::required("search_term", "Keyword or string to search for"),
            ParamSpec::with_default(
                "package",
                "Package name to limit the search scope; empty searches all packages",
                "",
            ),
            ParamSpec::with_default(
                "search_in",
                "Comma-separated search scopes: class, method, field, code, comment",
                "code",
            ),
        ],
    ),
];
