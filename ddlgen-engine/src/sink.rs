/// Collects the generation engine's verbose diagnostics for one run.
///
/// Engines borrow a sink per call instead of writing to the process output
/// streams, so engine chatter never leaks to stdout and nothing ambient has
/// to be restored when generation fails. The pipeline surfaces collected
/// lines in the export report.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    lines: Vec<String>,
}

impl DiagnosticSink {
    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
