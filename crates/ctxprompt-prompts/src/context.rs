use ctxprompt_core::{ContextFile, DiffRecord, FileContent};

/// The section that sits between the generic instructions and the context files.
#[derive(Debug, Clone)]
pub enum Supplement {
    TerminalOutput(FileContent),
    GitDiff(DiffRecord),
}

/// Everything needed to render one document.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    pub basic_request: String,
    pub generic_instructions: String,
    pub supplement: Supplement,
    pub files: Vec<ContextFile>,
}

impl DocumentContext {
    /// Render the basic request and generic instructions sections.
    pub fn append_preamble(&self, doc: &mut String) {
        doc.push_str("# Basic Request\n\n");
        doc.push_str(&format!("{}\n\n", self.basic_request));

        doc.push_str("## Generic Instructions\n\n");
        doc.push_str(&format!("{}\n\n", self.generic_instructions));
    }
}
