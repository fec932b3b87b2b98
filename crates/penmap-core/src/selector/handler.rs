use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use super::types::{Choice, Selection};
use crate::devices::DeviceMap;
use crate::windows::Window;

const PROMPT: &str = "Select window number to map to (or 0 to exit): ";

/// Interpret one line of input as a 1-based window number, `0` meaning exit.
pub fn parse_choice(line: &str, window_count: usize) -> Choice {
    let text = line.trim();
    let Ok(number) = text.parse::<i64>() else {
        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Choice::OutOfRange;
        }
        return Choice::NotANumber;
    };

    match usize::try_from(number) {
        Ok(0) => Choice::Exit,
        Ok(n) if n <= window_count => Choice::Window(n - 1),
        _ => Choice::OutOfRange,
    }
}

/// Present devices and windows, then read a choice until it is valid.
///
/// Re-prompts without limit on invalid input. End of input ends the
/// selection as [`Selection::Exit`].
pub fn select<R: BufRead, W: Write>(
    devices: &DeviceMap,
    windows: &[Window],
    input: &mut R,
    output: &mut W,
) -> io::Result<Selection> {
    if !announce_devices(devices, output)? {
        return Ok(Selection::NoDevices);
    }
    choose_window(windows, input, output)
}

/// Print the detected devices, or a notice when there are none.
///
/// Returns whether there is anything to map.
pub fn announce_devices<W: Write>(devices: &DeviceMap, output: &mut W) -> io::Result<bool> {
    if devices.is_empty() {
        writeln!(output, "No tablet devices found.")?;
        return Ok(false);
    }
    print_devices(devices, output)?;
    Ok(true)
}

/// Print the numbered windows and prompt until a valid choice is read.
pub fn choose_window<R: BufRead, W: Write>(
    windows: &[Window],
    input: &mut R,
    output: &mut W,
) -> io::Result<Selection> {
    if windows.is_empty() {
        writeln!(output, "No windows found.")?;
        return Ok(Selection::NoWindows);
    }
    print_windows(windows, output)?;

    info!(event = "core.selector.prompt_started", window_count = windows.len());

    let mut line = String::new();
    loop {
        write!(output, "\n{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            info!(event = "core.selector.input_closed");
            return Ok(Selection::Exit);
        }

        match parse_choice(&line, windows.len()) {
            Choice::Exit => {
                info!(event = "core.selector.exit_requested");
                return Ok(Selection::Exit);
            }
            Choice::Window(index) => {
                let window = windows[index].clone();
                writeln!(output, "\nMapping to window: {}", window.title)?;
                writeln!(output, "Using geometry: {}", window.geometry)?;
                info!(
                    event = "core.selector.window_selected",
                    window_id = %window.id,
                    geometry = %window.geometry
                );
                return Ok(Selection::Chosen(window));
            }
            Choice::OutOfRange => {
                debug!(event = "core.selector.out_of_range", input = line.trim());
                writeln!(output, "Invalid selection. Please try again.")?;
            }
            Choice::NotANumber => {
                debug!(event = "core.selector.not_a_number", input = line.trim());
                writeln!(output, "Please enter a valid number.")?;
            }
        }
    }
}

fn print_devices<W: Write>(devices: &DeviceMap, output: &mut W) -> io::Result<()> {
    writeln!(output, "Found tablet devices:")?;
    for device in devices {
        writeln!(output, "- {} (ID: {})", device.name, device.id)?;
    }
    Ok(())
}

fn print_windows<W: Write>(windows: &[Window], output: &mut W) -> io::Result<()> {
    writeln!(output, "\nAvailable windows:")?;
    for (number, window) in windows.iter().enumerate().map(|(i, w)| (i + 1, w)) {
        writeln!(output, "{}. {}", number, window.title)?;
        writeln!(output, "   Geometry: {}", window.geometry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::GeometryString;

    fn devices() -> DeviceMap {
        let mut devices = DeviceMap::new();
        devices.insert("Wacom Pen", "9");
        devices
    }

    fn window(title: &str, geometry: &str) -> Window {
        Window {
            title: title.to_string(),
            geometry: GeometryString::new(geometry).unwrap(),
            id: format!("0x{}", title.len()),
        }
    }

    fn two_windows() -> Vec<Window> {
        vec![
            window("Editor", "800x600+100+50"),
            window("Browser", "1280x720+0+0"),
        ]
    }

    fn run(devices: &DeviceMap, windows: &[Window], input: &str) -> (Selection, String) {
        let mut reader = input.as_bytes();
        let mut output = Vec::new();
        let selection = select(devices, windows, &mut reader, &mut output).unwrap();
        (selection, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("0\n", 2), Choice::Exit);
        assert_eq!(parse_choice(" 1 ", 2), Choice::Window(0));
        assert_eq!(parse_choice("2", 2), Choice::Window(1));
        assert_eq!(parse_choice("3", 2), Choice::OutOfRange);
        assert_eq!(parse_choice("-1", 2), Choice::OutOfRange);
        assert_eq!(parse_choice("two", 2), Choice::NotANumber);
        assert_eq!(parse_choice("", 2), Choice::NotANumber);
        assert_eq!(parse_choice("1.5", 2), Choice::NotANumber);
        assert_eq!(parse_choice("+", 2), Choice::NotANumber);
        assert_eq!(parse_choice("99999999999999999999", 2), Choice::OutOfRange);
        assert_eq!(parse_choice("-99999999999999999999", 2), Choice::OutOfRange);
    }

    #[test]
    fn test_no_devices() {
        let (selection, output) = run(&DeviceMap::new(), &two_windows(), "1\n");
        assert_eq!(selection, Selection::NoDevices);
        assert_eq!(output, "No tablet devices found.\n");
    }

    #[test]
    fn test_no_windows() {
        let (selection, output) = run(&devices(), &[], "1\n");
        assert_eq!(selection, Selection::NoWindows);
        assert!(output.contains("- Wacom Pen (ID: 9)"));
        assert!(output.ends_with("No windows found.\n"));
        assert!(!output.contains(PROMPT));
    }

    #[test]
    fn test_zero_exits() {
        let (selection, output) = run(&devices(), &two_windows(), "0\n");
        assert_eq!(selection, Selection::Exit);
        assert!(selection.geometry().is_none());
        assert_eq!(output.matches(PROMPT).count(), 1);
    }

    #[test]
    fn test_lists_windows_numbered() {
        let (_, output) = run(&devices(), &two_windows(), "0\n");
        assert!(output.contains("1. Editor\n   Geometry: 800x600+100+50\n"));
        assert!(output.contains("2. Browser\n   Geometry: 1280x720+0+0\n"));
    }

    #[test]
    fn test_valid_choice_resolves_geometry() {
        let (selection, output) = run(&devices(), &two_windows(), "2\n");
        assert_eq!(selection.geometry().unwrap().as_str(), "1280x720+0+0");
        assert!(output.contains("Mapping to window: Browser"));
        assert!(output.contains("Using geometry: 1280x720+0+0"));
    }

    #[test]
    fn test_out_of_range_reprompts_once() {
        let (selection, output) = run(&devices(), &two_windows(), "3\n1\n");
        assert_eq!(selection.geometry().unwrap().as_str(), "800x600+100+50");
        assert_eq!(output.matches("Invalid selection. Please try again.").count(), 1);
        assert_eq!(output.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_non_numeric_reprompts() {
        let (selection, output) = run(&devices(), &two_windows(), "abc\n\n2\n");
        assert!(matches!(selection, Selection::Chosen(ref w) if w.title == "Browser"));
        assert_eq!(output.matches("Please enter a valid number.").count(), 2);
    }

    #[test]
    fn test_many_invalid_inputs_before_choice() {
        let input = format!("{}1\n", "9\n".repeat(50));
        let (selection, output) = run(&devices(), &two_windows(), &input);
        assert!(matches!(selection, Selection::Chosen(_)));
        assert_eq!(output.matches("Invalid selection.").count(), 50);
    }

    #[test]
    fn test_huge_number_reprompts_as_invalid_selection() {
        let (selection, output) = run(&devices(), &two_windows(), "99999999999999999999\n1\n");
        assert!(matches!(selection, Selection::Chosen(_)));
        assert_eq!(output.matches("Invalid selection. Please try again.").count(), 1);
        assert!(!output.contains("Please enter a valid number."));
    }

    #[test]
    fn test_announce_devices_alone_does_not_prompt() {
        let mut output = Vec::new();
        assert!(announce_devices(&devices(), &mut output).unwrap());
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Found tablet devices:\n- Wacom Pen (ID: 9)\n");

        let mut empty = Vec::new();
        assert!(!announce_devices(&DeviceMap::new(), &mut empty).unwrap());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (selection, _) = run(&devices(), &two_windows(), "5\n");
        assert_eq!(selection, Selection::Exit);
    }
}
