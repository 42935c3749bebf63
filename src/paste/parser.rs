use crate::fill::fill_model::FieldSpec;

/// Parse pasted spreadsheet text into ordered field specs.
///
/// Each non-blank line holds a field name and a value separated by the
/// first comma or tab outside double quotes. Quotes toggle quoting and are
/// not kept; later separators belong to the value. A single pair of quotes
/// wrapping the whole paste (as spreadsheets add when copying a range) is
/// removed first. Lines whose name comes out empty are dropped.
pub fn parse_pasted(text: &str) -> Vec<FieldSpec> {
    let text = strip_enclosing_quotes(text.trim());

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

fn strip_enclosing_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else if text == "\"" {
        ""
    } else {
        text
    }
}

fn parse_line(line: &str) -> Option<FieldSpec> {
    let mut name = String::new();
    let mut value = String::new();
    let mut in_quotes = false;
    let mut past_separator = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' | '\t' if !in_quotes && !past_separator => past_separator = true,
            _ if past_separator => value.push(c),
            _ => name.push(c),
        }
    }

    let name = name.trim();
    let value = value.trim();

    if name.is_empty() {
        return None;
    }

    Some(FieldSpec::new(name, value))
}
