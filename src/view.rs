//! Console rendering of the issue board.

use anyhow::Result;
use prettytable::{Cell, Row, Table};

use crate::issues::{IssueClusterRecord, IssueProvider};

/// Builds the issue table. Every representative title is listed, one per line.
pub fn issue_table(issues: &[IssueClusterRecord]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("ID"),
        Cell::new("Label"),
        Cell::new("Articles"),
        Cell::new("Representative titles"),
    ]));

    for issue in issues {
        let titles = issue
            .representative_titles
            .iter()
            .map(|title| format!("· {}", title))
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(Row::new(vec![
            Cell::new(&issue.issue_cluster_id.to_string()),
            Cell::new(&issue.issue_label),
            Cell::new(&issue.cluster_size.to_string()),
            Cell::new(&titles),
        ]));
    }

    table
}

/// Load through `provider` and print the board to stdout.
pub async fn print_issue_board(provider: &IssueProvider) -> Result<()> {
    let issues = provider.load_issues().await?;

    println!("\n=== Issue board ({}) ===\n", provider.source().describe());

    if issues.is_empty() {
        println!("No issues yet. Run the backend analysis first.");
        return Ok(());
    }

    issue_table(&issues).printstd();
    println!("\n{} issues", issues.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_table_has_one_row_per_issue() {
        let issues = vec![
            IssueClusterRecord {
                issue_cluster_id: 4,
                issue_label: "예산안 갈등".to_string(),
                cluster_size: 12,
                representative_titles: vec!["t1".to_string(), "t2".to_string()],
            },
            IssueClusterRecord {
                issue_cluster_id: 7,
                issue_label: "검찰 개혁".to_string(),
                cluster_size: 2,
                representative_titles: Vec::new(),
            },
        ];

        let table = issue_table(&issues);
        assert_eq!(table.len(), 2);

        let row = table.get_row(0).unwrap();
        assert_eq!(row.get_cell(0).unwrap().get_content(), "4");
        assert_eq!(row.get_cell(3).unwrap().get_content(), "· t1\n· t2");
    }
}
