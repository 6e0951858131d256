use crate::models::SurveyResponse;

pub const HEADERS: [&str; 9] = [
    "timestamp",
    "companySize",
    "state",
    "usesRebates",
    "avgProjectSize",
    "barriers",
    "whoFiles",
    "findRebates",
    "email",
];

/// Separator used to fold the barriers list into one cell.
pub const BARRIER_SEPARATOR: &str = "|";

/// Header line, then one fully quoted line per record, joined by `\n`
/// with no trailing newline.
pub fn export(records: &[SurveyResponse]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADERS.join(","));

    for record in records {
        let barriers = record.barriers.join(BARRIER_SEPARATOR);
        let row = [
            record.timestamp.as_str(),
            record.company_size.as_str(),
            record.state.as_str(),
            record.uses_rebates.as_str(),
            record.avg_project_size.as_str(),
            barriers.as_str(),
            record.who_files.as_str(),
            record.find_rebates.as_str(),
            record.email.as_str(),
        ];
        let cells: Vec<String> = row.iter().map(|v| quote(v)).collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
