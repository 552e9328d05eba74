/// Environment variable naming the file that receives one line per stub invocation.
pub const STUB_LOG_ENV: &str = "QT_TOOL_STUB_LOG";

pub const MOC_PAYLOAD: &str = "// moc stub\n";
pub const UIC_PAYLOAD: &str = "#pragma once\n// uic stub\n";
pub const GENERIC_PAYLOAD: &str = "// qt tool stub\n";

/// Prefix that marks a base path as Windows-style.
pub const WINDOWS_DRIVE_PREFIX: &str = "C:/";

pub const BAT_DIR: &str = "bat";
pub const GAME_SCRIPT: &str = "game.bat";
pub const GAME_SCRIPT_BODY: &str = "echo run";
