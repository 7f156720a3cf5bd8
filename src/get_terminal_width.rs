use terminal_size::{terminal_size, Width};

/// Width used for wrapping `--help` output; falls back to 100 when
/// stdout is not a terminal.
pub fn get_terminal_width() -> usize {
    if let Some((Width(width), _)) = terminal_size() {
        usize::from(width)
    } else {
        100
    }
}
