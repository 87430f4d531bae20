use crate::cli::snapshot::types::ProcessRecord;

/// USER PID %CPU %MEM VSZ RSS TTY STAT START TIME COMMAND
const PS_FIELDS: usize = 11;

const USER: usize = 0;
const PID: usize = 1;
const CPU: usize = 2;
const MEM: usize = 3;
const COMMAND: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTable {
    pub records: Vec<ProcessRecord>,
    /// rows with eleven fields but a non-numeric %CPU or %MEM
    pub skipped_rows: u64,
}

/// Splits on runs of whitespace into at most `max` fields.
///
/// The last field takes the rest of the line verbatim, including inner and
/// trailing whitespace.
pub fn split_fields(line: &str, max: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(max);
    let mut rest = line.trim_start();

    while !rest.is_empty() && fields.len() < max {
        if fields.len() + 1 == max {
            fields.push(rest);
            break;
        }

        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }

    fields
}

/// Parses the full output of the listing command.
///
/// The first line is the header. Rows that don't split into exactly eleven
/// fields (blank lines, truncated rows) are dropped silently; rows whose
/// %CPU or %MEM isn't a number are dropped and counted.
pub fn parse_process_table(output: &str) -> ParsedTable {
    let mut table = ParsedTable::default();

    for (idx, line) in output.trim().lines().enumerate().skip(1) {
        let fields = split_fields(line, PS_FIELDS);
        if fields.len() != PS_FIELDS {
            continue;
        }

        let (Ok(cpu), Ok(mem)) = (fields[CPU].parse::<f64>(), fields[MEM].parse::<f64>()) else {
            tracing::warn!(
                line_no = idx + 1,
                cpu = fields[CPU],
                mem = fields[MEM],
                "skipping process row with non-numeric usage"
            );
            table.skipped_rows += 1;
            continue;
        };

        table.records.push(ProcessRecord {
            user: fields[USER].to_string(),
            pid: fields[PID].to_string(),
            cpu,
            mem,
            command: fields[COMMAND].to_string(),
        });
    }

    table
}
