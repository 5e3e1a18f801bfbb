//! GL debug-output records.
//!
//! `KHR_debug` hands the callback raw enums. [`DebugMessage`] decodes them
//! once so sinks only deal with typed values, and its `Display` impl gives
//! the one-line form `(High) <API> [Error] message`.

use std::fmt;

/// Severity of a debug message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DebugSeverity {
    Notification,
    Low,
    Medium,
    High,
    Unknown(u32),
}

impl DebugSeverity {
    /// Decode a `GL_DEBUG_SEVERITY_*` value.
    #[must_use]
    pub const fn from_gl(value: u32) -> Self {
        match value {
            glow::DEBUG_SEVERITY_HIGH => Self::High,
            glow::DEBUG_SEVERITY_MEDIUM => Self::Medium,
            glow::DEBUG_SEVERITY_LOW => Self::Low,
            glow::DEBUG_SEVERITY_NOTIFICATION => Self::Notification,
            other => Self::Unknown(other),
        }
    }

    /// Short label used in formatted output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Med",
            Self::Low => "Low",
            Self::Notification => "Noti",
            Self::Unknown(_) => "?",
        }
    }
}

/// Component that raised a debug message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
    Unknown(u32),
}

impl DebugSource {
    /// Decode a `GL_DEBUG_SOURCE_*` value.
    #[must_use]
    pub const fn from_gl(value: u32) -> Self {
        match value {
            glow::DEBUG_SOURCE_API => Self::Api,
            glow::DEBUG_SOURCE_WINDOW_SYSTEM => Self::WindowSystem,
            glow::DEBUG_SOURCE_SHADER_COMPILER => Self::ShaderCompiler,
            glow::DEBUG_SOURCE_THIRD_PARTY => Self::ThirdParty,
            glow::DEBUG_SOURCE_APPLICATION => Self::Application,
            glow::DEBUG_SOURCE_OTHER => Self::Other,
            other => Self::Unknown(other),
        }
    }

    /// Name used in formatted output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::WindowSystem => "Window System",
            Self::ShaderCompiler => "Shader Compiler",
            Self::ThirdParty => "Third Party",
            Self::Application => "Application",
            Self::Other => "Other",
            Self::Unknown(_) => "?",
        }
    }
}

/// Category of a debug message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugType {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    PushGroup,
    PopGroup,
    Other,
    Unknown(u32),
}

impl DebugType {
    /// Decode a `GL_DEBUG_TYPE_*` value.
    #[must_use]
    pub const fn from_gl(value: u32) -> Self {
        match value {
            glow::DEBUG_TYPE_ERROR => Self::Error,
            glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => Self::DeprecatedBehavior,
            glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => Self::UndefinedBehavior,
            glow::DEBUG_TYPE_PORTABILITY => Self::Portability,
            glow::DEBUG_TYPE_PERFORMANCE => Self::Performance,
            glow::DEBUG_TYPE_MARKER => Self::Marker,
            glow::DEBUG_TYPE_PUSH_GROUP => Self::PushGroup,
            glow::DEBUG_TYPE_POP_GROUP => Self::PopGroup,
            glow::DEBUG_TYPE_OTHER => Self::Other,
            other => Self::Unknown(other),
        }
    }

    /// Name used in formatted output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::DeprecatedBehavior => "Deprecated Behaviour",
            Self::UndefinedBehavior => "Undefined Behaviour",
            Self::Portability => "Portability",
            Self::Performance => "Performance",
            Self::Marker => "Marker",
            Self::PushGroup => "Push Group",
            Self::PopGroup => "Pop Group",
            Self::Other => "Other",
            Self::Unknown(_) => "?",
        }
    }
}

/// A decoded GL debug message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMessage {
    /// Part of the GL stack that raised the message.
    pub source: DebugSource,
    /// Message category.
    pub kind: DebugType,
    /// Message severity.
    pub severity: DebugSeverity,
    /// Implementation-defined message id.
    pub id: u32,
    /// Message body with trailing whitespace removed.
    pub text: String,
}

impl DebugMessage {
    /// Decode the raw arguments of a GL debug callback.
    #[must_use]
    pub fn from_gl(source: u32, kind: u32, id: u32, severity: u32, text: &str) -> Self {
        Self {
            source: DebugSource::from_gl(source),
            kind: DebugType::from_gl(kind),
            severity: DebugSeverity::from_gl(severity),
            id,
            text: text.trim_end().to_owned(),
        }
    }
}

impl fmt::Display for DebugMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) <{}> [{}] {}",
            self.severity.label(),
            self.source.label(),
            self.kind.label(),
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_enums() {
        let msg = DebugMessage::from_gl(
            glow::DEBUG_SOURCE_SHADER_COMPILER,
            glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR,
            7,
            glow::DEBUG_SEVERITY_MEDIUM,
            "use of gl_FragColor\n",
        );
        assert_eq!(msg.source, DebugSource::ShaderCompiler);
        assert_eq!(msg.kind, DebugType::DeprecatedBehavior);
        assert_eq!(msg.severity, DebugSeverity::Medium);
        assert_eq!(msg.id, 7);
        assert_eq!(msg.text, "use of gl_FragColor");
    }

    #[test]
    fn formats_single_line() {
        let msg = DebugMessage::from_gl(
            glow::DEBUG_SOURCE_API,
            glow::DEBUG_TYPE_ERROR,
            1280,
            glow::DEBUG_SEVERITY_HIGH,
            "GL_INVALID_ENUM in glEnable",
        );
        assert_eq!(
            msg.to_string(),
            "(High) <API> [Error] GL_INVALID_ENUM in glEnable"
        );
    }

    #[test]
    fn unknown_values_are_kept() {
        assert_eq!(DebugSeverity::from_gl(0xdead), DebugSeverity::Unknown(0xdead));
        assert_eq!(DebugSource::from_gl(1), DebugSource::Unknown(1));
        assert_eq!(DebugType::from_gl(2).label(), "?");
    }

    #[test]
    fn severity_orders_by_importance() {
        assert!(DebugSeverity::High > DebugSeverity::Medium);
        assert!(DebugSeverity::Medium > DebugSeverity::Low);
        assert!(DebugSeverity::Low > DebugSeverity::Notification);
    }

    #[test]
    fn labels_match_short_forms() {
        assert_eq!(DebugSeverity::Notification.label(), "Noti");
        assert_eq!(DebugSource::WindowSystem.label(), "Window System");
        assert_eq!(DebugType::PushGroup.label(), "Push Group");
    }
}
