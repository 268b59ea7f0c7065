//! Console output for `check`, `configure`, `logout` and session setup.
//!
//! Every line starts with a colored `[KIND]` tag, followed by a title and optional
//! tab-separated details.

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MessageKind {
    Info,
    Warn,
    Error,
    Success,
}

impl MessageKind {
    fn ansi_color(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;33m",
            MessageKind::Warn => "\x1b[1;91m",
            MessageKind::Error => "\x1b[1;31m",
            MessageKind::Success => "\x1b[1;32m",
        }
    }
}

/// A single tagged console line
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    let tag = format!("{}[{}]\x1b[0m", kind.ansi_color(), kind);
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", format_message(MessageKind::Info, title, details));
}

pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_message(MessageKind::Warn, title, details));
}

/// Errors put their details on a second line
pub fn print_error(title: &str, details: Option<&str>) {
    println!("{}", format_message(MessageKind::Error, title, ""));
    if let Some(details) = details {
        println!("{}", format_message(MessageKind::Error, "Details:", details));
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", format_message(MessageKind::Success, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
