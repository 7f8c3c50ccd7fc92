use ctxprompt_core::DiffRecord;

/// Append the branch comparison caption and the diff as a `diff` block.
pub fn append_section(doc: &mut String, record: &DiffRecord) {
    doc.push_str("## Git Diff\n\n");
    doc.push_str(&format!("{}\n\n", record.caption()));
    crate::append_fenced(doc, "diff", &record.to_string());
}
