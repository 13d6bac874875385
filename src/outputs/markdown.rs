//! Markdown rendering of the pitch page snapshot.

use crate::models::{ArticleRecord, PitchPage};
use crate::risk::RiskViewState;
use crate::utils::slugify_title;
use itertools::Itertools;
use std::fmt::Write;

pub const PAGE_FILENAME: &str = "pitch.md";

/// Render a [`PitchPage`] as a Markdown document.
///
/// Sections: countdown, press coverage, risk disclosures, team and timeline.
/// Empty sections are omitted, except press and risks which say so explicitly.
pub fn page_to_markdown(page: &PitchPage) -> String {
    let mut md = String::new();

    writeln!(md, "# Invest in {}\n", page.company).unwrap();
    writeln!(md, "**Offering closes in:** {}\n", page.countdown).unwrap();
    let gate = if page.investment.is_valid {
        "ready to confirm"
    } else {
        "minimum not met"
    };
    match page.investment.amount {
        Some(amount) => writeln!(md, "**Your investment:** ${amount:.2} ({gate})\n").unwrap(),
        None => writeln!(md, "**Your investment:** not entered\n").unwrap(),
    }

    writeln!(md, "## In the Press\n").unwrap();
    if page.articles.is_empty() {
        writeln!(md, "_No press coverage available._\n").unwrap();
    }
    for article in &page.articles {
        write_article(&mut md, article);
    }

    writeln!(md, "## Risks\n").unwrap();
    write_risks(&mut md, &page.risks);

    if !page.team.is_empty() {
        writeln!(md, "## Leadership\n").unwrap();
        for member in &page.team {
            writeln!(md, "- **{}**, {}", member.name, member.role).unwrap();
        }
        writeln!(md).unwrap();
    }

    if !page.timeline.is_empty() {
        writeln!(md, "## Timeline\n").unwrap();
        for event in &page.timeline {
            writeln!(md, "- {}: {}", event.date, event.title).unwrap();
        }
        writeln!(md).unwrap();
    }

    writeln!(md, "<small>Generated {}</small>", page.generated_at).unwrap();
    md
}

fn write_article(md: &mut String, article: &ArticleRecord) {
    writeln!(md, "### [{}]({})\n", article.title, article.link).unwrap();
    writeln!(md, "![{}]({})\n", article.source, article.image).unwrap();
    writeln!(md, "<small>`{}` · {}</small>\n", article.source, article.date).unwrap();
    writeln!(md, "{}\n", article.description).unwrap();
}

fn write_risks(md: &mut String, risks: &RiskViewState) {
    if risks.all.is_empty() {
        writeln!(md, "_No risk disclosures loaded._\n").unwrap();
        return;
    }

    let selected_title = risks.selected.as_ref().map(|risk| risk.title.as_str());
    let listing = risks
        .visible
        .iter()
        .map(|risk| {
            let marker = if Some(risk.title.as_str()) == selected_title {
                " ◀"
            } else {
                ""
            };
            format!("- [{}](#{}){}", risk.title, slugify_title(&risk.title), marker)
        })
        .join("\n");
    writeln!(md, "{listing}").unwrap();

    let hidden = risks.all.len() - risks.visible.len();
    if hidden > 0 {
        writeln!(md, "- _…and {hidden} more_").unwrap();
    }
    writeln!(md).unwrap();

    if let Some(risk) = &risks.selected {
        writeln!(md, "### {}\n", risk.title).unwrap();
        writeln!(md, "{}\n", risk.content).unwrap();
    }
}
