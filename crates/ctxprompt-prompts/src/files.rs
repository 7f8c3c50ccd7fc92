use ctxprompt_core::ContextFile;

/// Append the context header, the list of included files, and one fenced
/// subsection per file, all in input order.
pub fn append_section(doc: &mut String, files: &[ContextFile]) {
    doc.push_str("## Context\n\n");
    doc.push_str("### List of Included Files\n\n");
    if files.is_empty() {
        doc.push_str("* *No context files included.*");
    } else {
        let list: Vec<String> = files
            .iter()
            .map(|f| format!("* `{}`", f.display_name))
            .collect();
        doc.push_str(&list.join("\n"));
    }
    doc.push_str("\n\n");

    for file in files {
        doc.push_str(&format!("#### {}\n\n", file.display_name));
        crate::append_fenced(doc, &file.file_type, &file.content.to_string());
    }
}
