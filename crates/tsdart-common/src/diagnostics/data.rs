use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const TRANSLATION_ERROR: u32 = 9000;
    pub const CONST_CONSTRUCTOR_WITH_BODY: u32 = 9001;
    pub const DECORATOR_NOT_ALLOWED_HERE: u32 = 9002;
}

pub mod diagnostic_messages {
    use super::diagnostic_codes;
    use super::{DiagnosticCategory, DiagnosticMessage};

    pub const TRANSLATION_ERROR: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TRANSLATION_ERROR,
        category: DiagnosticCategory::Error,
        message: "{0}",
    };
    pub const CONST_CONSTRUCTOR_WITH_BODY: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CONST_CONSTRUCTOR_WITH_BODY,
        category: DiagnosticCategory::Error,
        message: "Const constructor of '{0}' must have an empty body.",
    };
    pub const DECORATOR_NOT_ALLOWED_HERE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::DECORATOR_NOT_ALLOWED_HERE,
        category: DiagnosticCategory::Error,
        message: "Decorator '{0}' has no Dart translation and is dropped.",
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::TRANSLATION_ERROR,
    diagnostic_messages::CONST_CONSTRUCTOR_WITH_BODY,
    diagnostic_messages::DECORATOR_NOT_ALLOWED_HERE,
];
