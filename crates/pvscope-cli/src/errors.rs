use console::style;
use pvscope_core::PvError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a rejected numeric input
pub fn invalid_input(field: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid {}", field))
        .with_context(format!("The value cannot be estimated.\n\nReason: {}", reason))
        .with_suggestion("Provide a finite, non-negative area in square meters")
        .with_help("Run: pvscope estimate --help")
}

/// Create error for a shape that does not enclose an area
pub fn invalid_geometry(reason: &str) -> CliError {
    CliError::new("Invalid geometry")
        .with_context(format!("The shape cannot be measured.\n\nReason: {}", reason))
        .with_suggestion("Draw a Polygon with at least three distinct corners")
        .with_suggestion("Use [longitude, latitude] order for GeoJSON positions")
        .with_help("Run: pvscope measure --help")
}

/// Create error for input that is not GeoJSON
pub fn unreadable_geojson(reason: &str) -> CliError {
    CliError::new("Cannot read GeoJSON")
        .with_context(format!("Error: {}", reason))
        .with_suggestion("Pass a path to a .geojson file or an inline GeoJSON document")
        .with_help("Run: pvscope measure --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check pvscope.toml or the file passed with --config")
        .with_suggestion("Check PVSCOPE_* environment variables")
        .with_help("Run: pvscope config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    match error.downcast_ref::<PvError>() {
        Some(PvError::InvalidInput { field, reason }) => invalid_input(field, reason),
        Some(PvError::InvalidGeometry { reason }) => invalid_geometry(reason),
        Some(PvError::Serialization(reason)) => unreadable_geojson(reason),
        Some(PvError::ConfigInvalid { key, reason }) => invalid_config(key, reason),
        Some(PvError::ConfigMissing { key }) => invalid_config(key, "value is missing"),
        _ => {
            let message = format!("{:#}", error);
            if message.contains("No such file or directory") {
                CliError::new("File not found")
                    .with_context(format!("Error: {}", message))
                    .with_suggestion("Check the file path and try again")
            } else if message.to_lowercase().contains("permission denied") {
                CliError::new("Permission denied")
                    .with_context(format!("Error: {}", message))
                    .with_suggestion("Check file permissions")
            } else {
                CliError::new(message)
            }
        }
    }
}
