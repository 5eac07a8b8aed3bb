//! Cross-reference analysis tools. All paginated.

use super::{ParamSpec, ToolSpec};

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::paged(
        "get_xrefs_to_class",
        "xrefs-to-class",
        "Find all references to a class, including constructor calls.",
        &[ParamSpec::required("class_name", "Fully qualified class name")],
    ),
    ToolSpec::paged(
        "get_xrefs_to_method",
        "xrefs-to-method",
        "Find all references to a method, including overrides.",
        &[
            ParamSpec::required("class_name", "Fully qualified class name containing the method"),
            ParamSpec::required("method_name", "Method name, optionally with signature"),
        ],
    ),
    ToolSpec::paged(
        "get_xrefs_to_field",
        "xrefs-to-field",
        "Find all read and write references to a field.",
        &[
            ParamSpec::required("class_name", "Fully qualified class name containing the field"),
            ParamSpec::required("field_name", "Field name"),
        ],
    ),
];
