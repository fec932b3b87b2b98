/// Number of whitespace-separated fields in a `wmctrl -lG` line.
///
/// id, desktop, x, y, width, height, host, title. The title is the greedy
/// remainder and may contain whitespace.
const WINDOW_LIST_FIELDS: usize = 8;

/// A window reported by the window lister, before geometry resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub id: String,
    pub title: String,
}

/// Parse `wmctrl -lG` output. Lines with fewer than eight fields are skipped.
pub fn parse_window_list(output: &str) -> Vec<WindowEntry> {
    output
        .lines()
        .filter_map(|line| {
            let fields = split_fields(line, WINDOW_LIST_FIELDS);
            if fields.len() < WINDOW_LIST_FIELDS {
                return None;
            }
            Some(WindowEntry {
                id: fields[0].to_string(),
                title: fields[WINDOW_LIST_FIELDS - 1].to_string(),
            })
        })
        .collect()
}

/// Split on runs of whitespace into at most `max` fields; the last field
/// keeps the rest of the line.
fn split_fields(line: &str, max: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(max);
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        if fields.len() + 1 == max {
            fields.push(rest.trim_end());
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }

    fields
}
