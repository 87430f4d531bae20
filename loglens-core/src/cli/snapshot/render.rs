use crate::cli::snapshot::types::{ProcessRecord, SystemReport};

const NO_PROCESS: &str = "N/A";

/// First `width` characters of the command line.
pub fn truncate_command(command: &str, width: usize) -> &str {
    match command.char_indices().nth(width) {
        Some((end, _)) => &command[..end],
        None => command,
    }
}

// 50.0 stays "50.0", 12.25 stays "12.25"
fn percent(value: f64) -> String {
    format!("{value:?}")
}

fn peak_line(peak: Option<&ProcessRecord>, value: fn(&ProcessRecord) -> f64, width: usize) -> String {
    match peak {
        Some(p) => format!("{}% ({})", percent(value(p)), truncate_command(&p.command, width)),
        None => format!("{}% ({NO_PROCESS})", percent(0.0)),
    }
}

pub fn render_report(report: &SystemReport, command_width: usize) -> String {
    let mut out = String::new();

    let users: Vec<&str> = report.users.iter().map(String::as_str).collect();

    out.push_str(&format!(
        "System state report:\n\
         System users: {}\n\
         Processes running: {}\n\n",
        users.join(", "),
        report.total_processes
    ));

    out.push_str("User processes:\n");
    for (user, count) in &report.user_process_counts {
        out.push_str(&format!("{user}: {count}\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "Total memory used: {:.1}%\n\
         Total CPU used: {:.1}%\n",
        report.total_mem, report.total_cpu
    ));
    out.push_str(&format!(
        "Most memory used by: {}\n",
        peak_line(report.peak_mem.as_ref(), |p| p.mem, command_width)
    ));
    out.push_str(&format!(
        "Most CPU used by: {}\n",
        peak_line(report.peak_cpu.as_ref(), |p| p.cpu, command_width)
    ));

    out
}
