//! Class analysis tools.
//!
//! Retrieval of decompiled Java classes, their members, and their smali
//! form from the JADX project.

use super::{ParamSpec, ToolSpec};

const CLASS_NAME: ParamSpec = ParamSpec::required(
    "class_name",
    "Fully qualified class name (e.g. com.example.MainActivity)",
);

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::plain(
        "fetch_current_class",
        "current-class",
        "Fetch the currently selected class and its code from the JADX-GUI plugin.",
        &[],
    ),
    ToolSpec::plain(
        "get_selected_text",
        "selected-text",
        "Returns the currently selected text in the decompiled code view.",
        &[],
    ),
    ToolSpec::plain(
        "get_class_source",
        "class-source",
        "Fetch the decompiled Java source of a specific class.",
        &[CLASS_NAME],
    ),
    ToolSpec::paged(
        "get_all_classes",
        "all-classes",
        "List all classes in the project, paginated for large APKs.",
        &[],
    ),
    ToolSpec::plain(
        "get_methods_of_class",
        "methods-of-class",
        "List all method names in a class.",
        &[CLASS_NAME],
    ),
    ToolSpec::plain(
        "get_fields_of_class",
        "fields-of-class",
        "List all field names in a class.",
        &[CLASS_NAME],
    ),
    ToolSpec::plain(
        "get_smali_of_class",
        "smali-of-class",
        "Fetch the smali (Dalvik bytecode) representation of a class.",
        &[CLASS_NAME],
    ),
    ToolSpec::plain(
        "get_main_application_classes_names",
        "main-application-classes-names",
        "List class names belonging to the application package declared in the manifest.",
        &[],
    ),
    ToolSpec::paged(
        "get_main_application_classes_code",
        "main-application-classes-code",
        "Fetch decompiled source of the application-package classes, paginated.",
        &[],
    ),
    ToolSpec::plain(
        "get_main_activity_class",
        "main-activity",
        "Fetch the main launcher activity class as declared in AndroidManifest.xml.",
        &[],
    ),
];
