use ctxprompt_core::FileContent;

/// Append the captured terminal output as a `text` block.
pub fn append_section(doc: &mut String, output: &FileContent) {
    doc.push_str("## Terminal Output\n\n");
    crate::append_fenced(doc, "text", &output.to_string());
}
