use std::io::{self, BufRead, Write};

use jobfinder_core::{CriteriaField, JobNature, SearchCriteria};

/// Asks for one field, offering its current value as the default.
///
/// Returns `Ok(None)` at end of input, `Ok(Some(None))` when the value is
/// kept, and `Ok(Some(Some(value)))` for an edit. A single `-` clears the
/// field.
pub fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    field: CriteriaField,
    current: &str,
) -> io::Result<Option<Option<String>>> {
    loop {
        let marker = if field.is_required() { "*" } else { "" };
        let hint = if current.is_empty() {
            field.placeholder().to_string()
        } else {
            format!("current: {current}")
        };
        write!(out, "{}{marker} ({hint}): ", field.label())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let value = line.trim_end_matches(['\r', '\n']);

        if value.trim().is_empty() {
            return Ok(Some(None));
        }
        if value.trim() == "-" {
            return Ok(Some(Some(String::new())));
        }
        if field == CriteriaField::JobNature && value.parse::<JobNature>().is_err() {
            writeln!(out, "Choose remote, onsite, hybrid or leave blank.")?;
            continue;
        }
        return Ok(Some(Some(value.to_string())));
    }
}

/// Walks the whole form. Returns the edits, or `None` at end of input.
pub fn prompt_form<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    current: &SearchCriteria,
) -> io::Result<Option<Vec<(CriteriaField, String)>>> {
    writeln!(out, "Find Your Dream Job  (* required, Enter keeps, - clears)")?;
    let mut edits = Vec::new();
    for field in CriteriaField::ALL {
        match prompt_field(input, out, field, current.value(field))? {
            None => return Ok(None),
            Some(Some(value)) => edits.push((field, value)),
            Some(None) => {}
        }
    }
    Ok(Some(edits))
}

/// Yes/no question defaulting to yes; end of input answers no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<bool> {
    write!(out, "{question} [Y/n] ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let answer = line.trim().to_ascii_lowercase();
    Ok(!matches!(answer.as_str(), "n" | "no" | "q" | "quit"))
}
