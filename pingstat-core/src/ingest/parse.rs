const SEQ_MARKER: &str = "icmp_seq=";
const TIME_MARKER: &str = "time=";

/// One successful probe reply extracted from a log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReply {
    pub seq: u64,
    pub rtt_ms: f64,
}

/// Extracts `icmp_seq=<n> ... time=<rtt>` from a ping output line.
///
/// Lines without both parts (headers, timeouts, unreachable notices,
/// summaries) yield `None`.
pub fn parse_reply(line: &str) -> Option<ProbeReply> {
    let (_, after_seq) = line.split_once(SEQ_MARKER)?;
    let digits = leading_digits(after_seq);
    let seq = digits.parse().ok()?;

    let (_, after_time) = after_seq[digits.len()..].split_once(TIME_MARKER)?;
    let rtt_ms = parse_decimal(after_time)?;

    Some(ProbeReply { seq, rtt_ms })
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

// Accepts `12`, `12.` and `12.345`; ignores whatever follows (` ms`).
fn parse_decimal(s: &str) -> Option<f64> {
    let whole = leading_digits(s);
    if whole.is_empty() {
        return None;
    }

    let len = match s[whole.len()..].strip_prefix('.') {
        Some(rest) => whole.len() + 1 + leading_digits(rest).len(),
        None => whole.len(),
    };

    s[..len].trim_end_matches('.').parse().ok()
}
