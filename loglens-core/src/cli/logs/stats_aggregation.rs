use crate::cli::logs::top_k::TopK;
use crate::cli::logs::types::{LogRecord, LogStats, RequestDigest};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, HashMap};

/// Ranks addresses by request count, then by address ascending.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct AddressRank {
    count: u64,
    address: Reverse<String>,
}

/// Ranks requests by duration, then by arrival (earlier line wins).
struct SlowRequest {
    duration: u64,
    arrival: u64,
    digest: RequestDigest,
}

impl SlowRequest {
    fn key(&self) -> (u64, Reverse<u64>) {
        (self.duration, Reverse(self.arrival))
    }
}

impl PartialEq for SlowRequest {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SlowRequest {}

impl PartialOrd for SlowRequest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlowRequest {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Accumulates one access log.
///
/// Fed once per parsed line, then consumed by [`StatsAggregator::finish`].
pub struct StatsAggregator {
    top_n: usize,
    total_requests: u64,
    skipped_lines: u64,
    http_methods: BTreeMap<String, u64>,
    ip_counts: HashMap<String, u64>,
    slowest: TopK<SlowRequest>,
}

impl StatsAggregator {
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            total_requests: 0,
            skipped_lines: 0,
            http_methods: BTreeMap::new(),
            ip_counts: HashMap::new(),
            slowest: TopK::new(top_n),
        }
    }

    pub fn push(&mut self, record: &LogRecord) {
        let arrival = self.total_requests;
        self.total_requests += 1;

        *self
            .http_methods
            .entry(record.method.clone())
            .or_insert(0) += 1;
        *self.ip_counts.entry(record.ip.clone()).or_insert(0) += 1;

        self.slowest.push(SlowRequest {
            duration: record.duration,
            arrival,
            digest: RequestDigest::from(record),
        });
    }

    /// Records a line that didn't parse.
    pub fn skip(&mut self) {
        self.skipped_lines += 1;
    }

    pub fn finish(self) -> LogStats {
        let mut top_ips = TopK::new(self.top_n);
        for (address, count) in self.ip_counts {
            top_ips.push(AddressRank {
                count,
                address: Reverse(address),
            });
        }

        LogStats {
            total_requests: self.total_requests,
            http_methods: self.http_methods,
            top_ips: top_ips
                .into_sorted_vec()
                .into_iter()
                .map(|rank| (rank.address.0, rank.count))
                .collect(),
            slowest_requests: self
                .slowest
                .into_sorted_vec()
                .into_iter()
                .map(|slow| slow.digest)
                .collect(),
            skipped_lines: self.skipped_lines,
        }
    }
}
