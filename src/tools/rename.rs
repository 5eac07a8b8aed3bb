//! Refactoring tools.
//!
//! Every rename mutates the live JADX project. These are single-shot,
//! non-idempotent operations: the bridge forwards each call exactly once
//! and never retries.

use super::{ParamSpec, ToolSpec};

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::plain(
        "rename_class",
        "rename-class",
        "Rename a class across the entire decompiled codebase.",
        &[
            ParamSpec::required("class_name", "Fully qualified current class name"),
            ParamSpec::required("new_name", "New name for the class (without package)"),
        ],
    ),
    ToolSpec::plain(
        "rename_method",
        "rename-method",
        "Rename a method and update all call sites.",
        &[
            ParamSpec::required("method_name", "Current method name, optionally with signature"),
            ParamSpec::required("new_name", "New name for the method"),
        ],
    ),
    ToolSpec::plain(
        "rename_field",
        "rename-field",
        "Rename a field and update all references.",
        &[
            ParamSpec::required("class_name", "Fully qualified class name containing the field"),
            ParamSpec::required("field_name", "Current field name"),
            ParamSpec::renamed("new_name", "new_field_name", "New name for the field"),
        ],
    ),
    ToolSpec::plain(
        "rename_package",
        "rename-package",
        "Rename a package and all of its classes.",
        &[
            ParamSpec::required("old_package_name", "Current package name (e.g. com.example.old)"),
            ParamSpec::required("new_package_name", "New package name (e.g. com.example.new)"),
        ],
    ),
    ToolSpec::plain(
        "rename_variable",
        "rename-variable",
        "Rename a variable within a method.",
        &[
            ParamSpec::required("class_name", "Fully qualified class name"),
            ParamSpec::required("method_name", "Method containing the variable"),
            ParamSpec::required("variable_name", "Current variable name"),
            ParamSpec::required("new_name", "New name for the variable"),
            ParamSpec::optional("reg", "Register number to disambiguate the variable (e.g. \"3\")"),
            ParamSpec::optional("ssa", "SSA version to disambiguate the variable (e.g. \"1\")"),
        ],
    ),
];
