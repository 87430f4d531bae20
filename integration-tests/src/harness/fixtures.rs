use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary working directory holding an `access.log`.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn with_lines(lines: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(dir.path().join("access.log"), contents).expect("failed to write access.log");
        Self { dir }
    }

    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn access_log(&self) -> PathBuf {
        self.dir.path().join("access.log")
    }

    pub fn results(&self) -> PathBuf {
        self.dir.path().join("results")
    }
}

/// `ps aux` output with a header and one row per `(user, cpu, mem, command)`.
pub fn ps_output(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut out =
        String::from("USER         PID %CPU %MEM    VSZ   RSS TTY      STAT START   TIME COMMAND\n");

    for (pid, (user, cpu, mem, command)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{user:<10} {:>5} {cpu:>4} {mem:>4} 167744 11788 pts/0    Ss   09:12   0:03 {command}\n",
            pid + 100
        ));
    }

    out
}
