use crate::application::dto::FulfillResponse;
use crate::fulfillment::domain::{FulfillmentSummary, LicenseFulfillment, ReportMetadata};
use crate::ports::outbound::FulfillmentFormatter;
use crate::shared::Result;

/// Markdown table header for accepted fulfillments
const ACCEPTED_TABLE_HEADER: &str = "| Package | Versions | License | Repository | Publisher |\n";

/// Markdown table separator line for accepted fulfillments
const ACCEPTED_TABLE_SEPARATOR: &str =
    "|---------|----------|---------|------------|-----------|\n";

/// Markdown table header for policy violations
const VIOLATION_TABLE_HEADER: &str = "| Package | Versions | Repository | Publisher |\n";

/// Markdown table separator line for policy violations
const VIOLATION_TABLE_SEPARATOR: &str = "|---------|----------|------------|-----------|\n";

/// MarkdownFormatter adapter for generating a human-readable fulfillment report
///
/// Sections: header, summary, accepted licenses, policy violations and an
/// appendix holding the license text of every accepted fulfillment.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn optional_cell(value: Option<&str>) -> String {
        value
            .map(Self::escape_markdown_table_cell)
            .unwrap_or_else(|| "-".to_string())
    }

    fn versions_cell(fulfillment: &LicenseFulfillment) -> String {
        Self::escape_markdown_table_cell(&fulfillment.versions().join(", "))
    }

    /// Longest backtick run in `text` plus one, at least three
    fn code_fence(text: &str) -> String {
        let longest_run = text
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        "`".repeat(longest_run.max(2) + 1)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &ReportMetadata) {
        output.push_str("# License Fulfillment Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} on {}\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &FulfillmentSummary) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "- Packages scanned: {}\n",
            summary.packages_scanned
        ));
        output.push_str(&format!(
            "- Packages ignored: {}\n",
            summary.packages_ignored
        ));
        output.push_str(&format!(
            "- Accepted fulfillments: {}\n",
            summary.accepted_fulfillments
        ));
        output.push_str(&format!(
            "- Policy violations: {}\n\n",
            summary.rejected_fulfillments
        ));
    }

    fn render_accepted(&self, output: &mut String, accepted: &[&LicenseFulfillment]) {
        output.push_str("## Accepted Licenses\n\n");

        if accepted.is_empty() {
            output.push_str("*No packages satisfy the license policy*\n\n");
            return;
        }

        output.push_str(ACCEPTED_TABLE_HEADER);
        output.push_str(ACCEPTED_TABLE_SEPARATOR);
        for fulfillment in accepted {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(fulfillment.name()),
                Self::versions_cell(fulfillment),
                Self::optional_cell(fulfillment.agreed_license()),
                Self::optional_cell(fulfillment.repository()),
                Self::optional_cell(fulfillment.publisher())
            ));
        }
        output.push('\n');
    }

    fn render_violations(&self, output: &mut String, rejected: &[&LicenseFulfillment]) {
        output.push_str("## Policy Violations\n\n");

        if rejected.is_empty() {
            output.push_str("*No policy violations*\n\n");
            return;
        }

        output.push_str(&format!(
            "### ⚠️Warning {} {} not satisfy the license policy.\n\n",
            rejected.len(),
            if rejected.len() == 1 {
                "package does"
            } else {
                "packages do"
            }
        ));
        output.push_str(VIOLATION_TABLE_HEADER);
        output.push_str(VIOLATION_TABLE_SEPARATOR);
        for fulfillment in rejected {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(fulfillment.name()),
                Self::versions_cell(fulfillment),
                Self::optional_cell(fulfillment.repository()),
                Self::optional_cell(fulfillment.publisher())
            ));
        }
        output.push('\n');
    }

    fn render_license_texts(&self, output: &mut String, accepted: &[&LicenseFulfillment]) {
        let with_text: Vec<(&LicenseFulfillment, &str)> = accepted
            .iter()
            .filter_map(|f| f.license_text().map(|text| (*f, text)))
            .collect();
        if with_text.is_empty() {
            return;
        }

        output.push_str("## License Texts\n\n");
        for (fulfillment, text) in with_text {
            output.push_str(&format!(
                "### {} ({})\n\n",
                fulfillment.name(),
                fulfillment.agreed_license().unwrap_or_default()
            ));
            let fence = Self::code_fence(text);
            output.push_str(&format!("{}text\n{}\n{}\n\n", fence, text.trim_end(), fence));
        }
    }
}

impl FulfillmentFormatter for MarkdownFormatter {
    fn format(&self, response: &FulfillResponse) -> Result<String> {
        let accepted: Vec<&LicenseFulfillment> = response.accepted().collect();
        let rejected: Vec<&LicenseFulfillment> = response.rejected().collect();

        let mut output = String::new();
        self.render_header(&mut output, &response.metadata);
        self.render_summary(&mut output, &response.summary);
        self.render_accepted(&mut output, &accepted);
        self.render_violations(&mut output, &rejected);
        self.render_license_texts(&mut output, &accepted);

        Ok(output)
    }
}
