//! Android resource tools: manifest, string tables, resource files.

use super::{ParamSpec, ToolSpec};

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec::plain(
        "get_android_manifest",
        "manifest",
        "Retrieve the AndroidManifest.xml content.",
        &[],
    ),
    ToolSpec::paged(
        "get_strings",
        "strings",
        "Retrieve string resources from the application's strings.xml files, paginated.",
        &[],
    ),
    ToolSpec::paged(
        "get_all_resource_file_names",
        "list-all-resource-files-names",
        "List all resource file paths in the APK, paginated.",
        &[],
    ),
    ToolSpec::plain(
        "get_resource_file",
        "get-resource-file",
        "Retrieve the content of a resource file by path.",
        &[ParamSpec::renamed(
            "resource_name",
            "file_name",
            "Path to the resource file (e.g. res/layout/activity_main.xml)",
        )],
    ),
];
