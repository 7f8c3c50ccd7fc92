pub mod context;
pub mod diff;
pub mod files;
pub mod terminal;

pub use context::{DocumentContext, Supplement};

/// Render the full document: preamble, the supplement section, then context files.
pub fn assemble_document(ctx: &DocumentContext) -> String {
    let mut doc = String::new();
    ctx.append_preamble(&mut doc);

    match &ctx.supplement {
        Supplement::TerminalOutput(output) => terminal::append_section(&mut doc, output),
        Supplement::GitDiff(record) => diff::append_section(&mut doc, record),
    }

    files::append_section(&mut doc, &ctx.files);
    doc
}

/// Append a fenced block tagged with `tag` (may be empty).
pub(crate) fn append_fenced(doc: &mut String, tag: &str, body: &str) {
    doc.push_str(&format!("```{tag}\n"));
    doc.push_str(body);
    doc.push_str("\n```\n\n");
}
