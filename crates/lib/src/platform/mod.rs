pub mod os;

pub use os::Os;

/// Whether the host belongs to the Windows family.
///
/// Unsupported hosts count as non-Windows.
pub fn is_windows_family() -> bool {
  matches!(Os::current(), Some(Os::Windows))
}
