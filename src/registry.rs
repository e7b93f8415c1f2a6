use serde::Serialize;
use serde_json::Value;

use crate::protocol::{ToolErrorCode, ToolErrorResponse, ToolResult};
use crate::schema;

/// A tool exposed over `tools/list` and `tools/call`. Immutable once registered.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Tool handlers are pure functions: arguments in, result envelope out.
/// They perform no I/O and never touch the registry.
pub type ToolHandler = fn(Value) -> Result<ToolResult, ToolErrorResponse>;

/// Registration-time errors. The tool set is fixed at startup, so these
/// are fatal to the process, never wire-visible.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("tool already registered: {0}")]
    DuplicateTool(String),
    #[error("invalid input schema for tool {tool}: {detail}")]
    InvalidSchema { tool: String, detail: String },
}

struct RegisteredTool {
    definition: ToolDefinition,
    validator: jsonschema::Validator,
    handler: ToolHandler,
}

/// Name → tool mapping, populated once at startup and read-only thereafter.
///
/// Tools are stored in registration order so `tools/list` output is stable
/// across runs.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. The input schema is compiled here, once; dispatch
    /// reuses the compiled validator.
    pub fn register(
        &mut self,
        definition: ToolDefinition,
        handler: ToolHandler,
    ) -> Result<(), RegistryError> {
        if self.tools.iter().any(|t| t.definition.name == definition.name) {
            return Err(RegistryError::DuplicateTool(definition.name));
        }

        let validator = schema::compile(&definition.input_schema).map_err(|e| {
            RegistryError::InvalidSchema {
                tool: definition.name.clone(),
                detail: e.to_string(),
            }
        })?;

        self.tools.push(RegisteredTool {
            definition,
            validator,
            handler,
        });
        Ok(())
    }

    /// Dispatch a tool call: look up the tool by name, validate the
    /// arguments against its input schema, then invoke the handler.
    ///
    /// Optional properties absent from `arguments` are filled with their
    /// declared defaults when the handler decodes them.
    pub fn dispatch(&self, name: &str, arguments: &Value) -> Result<ToolResult, ToolErrorResponse> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.definition.name == name)
            .ok_or_else(|| {
                ToolErrorResponse::new(
                    ToolErrorCode::UnknownTool,
                    format!("Unknown tool: {name}"),
                )
            })?;

        if let Some(violation) = schema::first_violation(&tool.validator, arguments) {
            return Err(ToolErrorResponse::new(
                ToolErrorCode::InvalidArguments,
                format!("Invalid arguments for {name}: {violation}"),
            ));
        }

        (tool.handler)(arguments.clone())
    }

    /// Tool definitions in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter().map(|t| &t.definition)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.definition.name == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
