#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Lookup tool unavailable: {0}")]
    Tool(#[from] ToolError),
}

#[derive(Debug, thiserror::Error)]
pub enum CustomDefinitionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
