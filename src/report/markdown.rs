//! Markdown rendering of a [`GuildReport`] for chat delivery.
use super::types::GuildReport;

pub const DEFAULT_REPORT_TITLE: &str = "Marlock Police State";

pub fn render_markdown(report: &GuildReport, title: &str) -> String {
    let mut lines = vec![
        format!("# {}", title.trim()),
        "## Overview".to_string(),
        format!(
            "### Total Inactive Members: {}",
            report.inactive_members_count
        ),
        format!("### Total Guild Members: {}", report.members_count),
        format!("### Guild Hall Paid Until: {}", report.guild_hall_paid_until),
        "## Inactive Members:".to_string(),
    ];

    lines.extend(report.inactive_members.iter().map(|member| {
        format!(
            "* **{}**, {} days ({})",
            member.name, member.days_elapsed, member.last_login_date
        )
    }));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::InactiveMember;

    #[test]
    fn renders_overview_and_members() {
        let report = GuildReport::new(
            "Elite Brotherhood",
            vec![
                InactiveMember {
                    name: "Elite Fordrin".to_string(),
                    last_login_date: "29-05-2023".to_string(),
                    days_elapsed: 315,
                },
                InactiveMember {
                    name: "Ame Damnee".to_string(),
                    last_login_date: "30-01-2024".to_string(),
                    days_elapsed: 69,
                },
            ],
            12,
            "30-01-2024",
        );

        let markdown = render_markdown(&report, DEFAULT_REPORT_TITLE);

        assert_eq!(
            markdown,
            "# Marlock Police State\n\
             ## Overview\n\
             ### Total Inactive Members: 2\n\
             ### Total Guild Members: 12\n\
             ### Guild Hall Paid Until: 30-01-2024\n\
             ## Inactive Members:\n\
             * **Elite Fordrin**, 315 days (29-05-2023)\n\
             * **Ame Damnee**, 69 days (30-01-2024)"
        );
    }

    #[test]
    fn empty_report_ends_with_section_header() {
        let report = GuildReport::new("Quiet Guild", Vec::new(), 3, "01-02-2024");
        let markdown = render_markdown(&report, "  Roll Call ");
        assert!(markdown.starts_with("# Roll Call\n"));
        assert!(markdown.ends_with("## Inactive Members:"));
    }
}
