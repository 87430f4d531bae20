/// `10/Oct/2023:13:55:36 +0000`
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub const JSON_INDENT: &[u8] = b"    ";

/// `<ip> - - [<time>] "<METHOD> <url> <protocol>" <status> <size> "<referer>" "<user agent>" <duration>`
pub const LOG_LINE_PATTERN: &str = concat!(
    r#"^(?P<ip>\S+) - - "#,
    r#"\[(?P<time>[0-9]{2}/[A-Za-z]{3}/[0-9]{4}:[0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4})\] "#,
    r#""(?P<method>[A-Z]+) (?P<url>[^ ]+) (?P<protocol>[^"\\]+)" "#,
    r#"(?P<status>[0-9]{3,}) (?P<size>[0-9]+|-) "#,
    r#""(?P<referer>[^"]*)" "(?P<user_agent>[^"]*)" "#,
    r#"(?P<duration>[0-9]+)"#,
);
