//! Static tool catalogue for the JADX bridge.
//!
//! One module per analysis domain, each exporting a `TOOLS` table of
//! descriptors. The registry is built from these tables once at startup;
//! nothing here is mutable at runtime.

pub mod classes;
pub mod debug;
pub mod rename;
pub mod resources;
pub mod search;
pub mod xrefs;

/// JSON type a tool parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    Object,
}

impl ParamKind {
    pub fn as_schema_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
        }
    }
}

/// A single declared tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    /// Inserted when the caller omits the parameter.
    pub default: Option<&'static str>,
    /// Query parameter name on the JADX wire, when it differs from `name`.
    pub wire_name: Option<&'static str>,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            required: true,
            default: None,
            wire_name: None,
            description,
        }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            required: false,
            default: None,
            wire_name: None,
            description,
        }
    }

    pub const fn with_default(
        name: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            required: false,
            default: Some(default),
            wire_name: None,
            description,
        }
    }

    /// Required parameter whose wire name differs from the tool-facing name.
    pub const fn renamed(
        name: &'static str,
        wire_name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            required: true,
            default: None,
            wire_name: Some(wire_name),
            description,
        }
    }

    /// Name under which this parameter is sent to the backend.
    pub fn wire_name(&self) -> &'static str {
        self.wire_name.unwrap_or(self.name)
    }
}

/// A tool descriptor: one exposed tool name, its argument schema, and the
/// backend endpoint it forwards to.
///
/// All JADX plugin endpoints are plain GETs with query-encoded parameters,
/// so the operation is fully described by its path.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: &'static str,
    pub params: &'static [ParamSpec],
    /// Paged tools accept `offset`/`count` and return a standardized
    /// `{items, pagination}` envelope.
    pub paged: bool,
    /// Canonical tool name when this descriptor is an alias. Aliases keep
    /// their own schema but resolve to the same backend operation.
    pub alias_of: Option<&'static str>,
}

impl ToolSpec {
    pub const fn plain(
        name: &'static str,
        endpoint: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            endpoint,
            params,
            paged: false,
            alias_of: None,
        }
    }

    pub const fn paged(
        name: &'static str,
        endpoint: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            endpoint,
            params,
            paged: true,
            alias_of: None,
        }
    }

    pub const fn alias(
        name: &'static str,
        of: &'static str,
        endpoint: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            endpoint,
            params,
            paged: false,
            alias_of: Some(of),
        }
    }
}

/// Connectivity probe against the plugin's `/health` endpoint.
const CORE_TOOLS: &[ToolSpec] = &[ToolSpec::plain(
    "health",
    "health",
    "Check that the JADX plugin HTTP server is reachable.",
    &[],
)];

/// Full catalogue in registration order.
pub fn catalog() -> impl Iterator<Item = &'static ToolSpec> {
    CORE_TOOLS
        .iter()
        .chain(classes::TOOLS)
        .chain(search::TOOLS)
        .chain(resources::TOOLS)
        .chain(rename::TOOLS)
        .chain(xrefs::TOOLS)
        .chain(debug::TOOLS)
}
